/// pairsort-core: Pairwise comparison voting engine.
///
/// Selection → every unordered pair, shuffled → one vote per pair → ranking by
/// win count. No IO, no rendering: the caller dispatches commands and renders
/// the snapshot the session hands back.
///
/// Items are identified by name. The crate maps names to internal array
/// indices; callers only ever see `Item`s and names.
///
/// # Quick start
///
/// ```rust
/// use pairsort_core::{Command, Item, Phase, Session};
///
/// let selection = vec![Item::new("Ayla", "f"), Item::new("Bram", "m"), Item::new("Cass", "f")];
/// let mut session = Session::with_seed(selection, 42).unwrap();
///
/// while !session.is_complete() {
///     session.dispatch(Command::ChooseLeft);
/// }
///
/// if let Phase::Complete { ranking } = session.snapshot().phase {
///     for line in &ranking {
///         println!("{line}");
///     }
/// }
/// ```

pub mod command;
pub mod engine;
pub mod error;
pub mod pairing;
pub mod ranking;
pub mod shuffle;
pub mod types;

// Re-export primary public API at crate root.
pub use command::{Command, Phase, Snapshot};
pub use engine::{Session, State, Transition};
pub use error::SelectionError;
pub use pairing::{generate_comparisons, pair_count, validate_selection, MIN_SELECTION};
pub use ranking::{finalize, ranking_lines};
pub use shuffle::shuffle;
pub use types::{HistoryEntry, IndexedPair, Item, Pair, Progress, RankedItem, Side};
