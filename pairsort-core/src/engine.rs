/// Voting engine: "current pair → vote → next pair" with a LIFO undo log.
///
/// Pure state machine, no IO. A `Session` owns the selection, the shuffled
/// comparison set, the cursor, the score table and the history for one run.
/// Nothing outside the session mutates them.
///
/// Invariants held after every public call:
/// - `0 <= cursor <= comparisons.len()`
/// - `history.len() == cursor`
/// - `scores[i]` equals the number of history entries won by item `i`
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::SelectionError;
use crate::pairing::{generate_comparisons_indexed, validate_selection};
use crate::ranking::finalize;
use crate::types::{HistoryEntry, IndexedPair, Item, NameIndex, Pair, Progress, RankedItem, Side};

/// Engine state, derived from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// `cursor < comparisons.len()`: a pair is on screen.
    AwaitingVote,
    /// `cursor == comparisons.len()`: every pair has been voted on.
    Complete,
}

/// What a state-transition call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// A vote was recorded. `complete` is true when it was the last pair.
    Voted { complete: bool },
    /// The last vote was taken back.
    Undone,
    /// A fresh comparison set was generated and all votes cleared.
    Restarted,
    /// Vote after completion or undo with empty history. State unchanged.
    Ignored,
}

#[derive(Debug)]
pub struct Session {
    selection: Vec<Item>,
    names: NameIndex,
    comparisons: Vec<IndexedPair>,
    cursor: usize,
    /// Win count per item, indexed like `selection`.
    scores: Vec<u32>,
    history: Vec<HistoryEntry>,
    rng: StdRng,
}

impl Session {
    /// Start a session with an OS-seeded random source.
    pub fn new(selection: Vec<Item>) -> Result<Self, SelectionError> {
        Self::with_rng(selection, StdRng::from_os_rng())
    }

    /// Start a session whose pair order is reproducible from `seed`.
    pub fn with_seed(selection: Vec<Item>, seed: u64) -> Result<Self, SelectionError> {
        Self::with_rng(selection, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(selection: Vec<Item>, rng: StdRng) -> Result<Self, SelectionError> {
        validate_selection(&selection)?;
        let names = NameIndex::from_items(&selection)?;

        let mut session = Session {
            selection: Vec::new(),
            names,
            comparisons: Vec::new(),
            cursor: 0,
            scores: Vec::new(),
            history: Vec::new(),
            rng,
        };
        session.install(selection);
        Ok(session)
    }

    /// Start over with a different selection.
    ///
    /// On error the current session is left untouched.
    pub fn reset(&mut self, selection: Vec<Item>) -> Result<(), SelectionError> {
        validate_selection(&selection)?;
        self.names = NameIndex::from_items(&selection)?;
        self.install(selection);
        Ok(())
    }

    /// Start over with the same selection and a freshly shuffled pair order.
    pub fn restart(&mut self) -> Transition {
        let selection = std::mem::take(&mut self.selection);
        self.install(selection);
        Transition::Restarted
    }

    fn install(&mut self, selection: Vec<Item>) {
        self.comparisons = generate_comparisons_indexed(selection.len(), &mut self.rng);
        self.scores = vec![0; selection.len()];
        self.history.clear();
        self.cursor = 0;
        self.selection = selection;
        debug!(
            items = self.selection.len(),
            pairs = self.comparisons.len(),
            "session started"
        );
    }

    pub fn state(&self) -> State {
        if self.cursor >= self.comparisons.len() {
            State::Complete
        } else {
            State::AwaitingVote
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == State::Complete
    }

    /// The pair awaiting a vote, or `None` once complete.
    pub fn current_pair(&self) -> Option<Pair<'_>> {
        self.comparisons.get(self.cursor).map(|&pair| self.resolve(pair))
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.cursor, self.comparisons.len())
    }

    /// Record `winner` as preferred in the current pair.
    ///
    /// Ignored once complete. Panics if `winner` is not one of the two items
    /// on screen: only the left/right choices may call this.
    pub fn vote(&mut self, winner: &str) -> Transition {
        let Some(&pair) = self.comparisons.get(self.cursor) else {
            debug!(winner, "vote ignored: session complete");
            return Transition::Ignored;
        };

        let winner_idx = match self.names.get(winner) {
            Some(idx) if idx == pair.0 || idx == pair.1 => idx,
            _ => panic!(
                "Vote for {:?} is not in the current pair ({:?} vs {:?})",
                winner, self.selection[pair.0].name, self.selection[pair.1].name
            ),
        };

        self.record(pair, winner_idx)
    }

    /// Vote for the item on one side of the current pair.
    pub fn choose(&mut self, side: Side) -> Transition {
        let Some(&pair) = self.comparisons.get(self.cursor) else {
            debug!(?side, "choice ignored: session complete");
            return Transition::Ignored;
        };

        let winner_idx = match side {
            Side::Left => pair.0,
            Side::Right => pair.1,
        };
        self.record(pair, winner_idx)
    }

    fn record(&mut self, pair: IndexedPair, winner_idx: usize) -> Transition {
        self.history.push(HistoryEntry {
            pair,
            winner: winner_idx,
        });
        self.scores[winner_idx] += 1;
        self.cursor += 1;

        let complete = self.is_complete();
        debug!(
            winner = %self.selection[winner_idx].name,
            cursor = self.cursor,
            total = self.comparisons.len(),
            "vote recorded"
        );
        if complete {
            debug!("all pairs voted");
        }
        Transition::Voted { complete }
    }

    /// Take back the most recent vote. Ignored when nothing has been voted.
    pub fn undo(&mut self) -> Transition {
        let Some(entry) = self.history.pop() else {
            debug!("undo ignored: empty history");
            return Transition::Ignored;
        };

        self.scores[entry.winner] -= 1;
        self.cursor -= 1;
        debug!(
            winner = %self.selection[entry.winner].name,
            cursor = self.cursor,
            "vote undone"
        );
        Transition::Undone
    }

    /// Final ranking, available only once every pair has been voted.
    pub fn ranking(&self) -> Option<Vec<RankedItem>> {
        self.is_complete().then(|| finalize(&self.selection, &self.scores))
    }

    /// Current win count for `name`, if it is in the selection.
    pub fn score(&self, name: &str) -> Option<u32> {
        self.names.get(name).map(|idx| self.scores[idx])
    }

    /// `(item, wins)` in selection order.
    pub fn scores(&self) -> impl Iterator<Item = (&Item, u32)> + '_ {
        self.selection.iter().zip(self.scores.iter().copied())
    }

    pub fn selection(&self) -> &[Item] {
        &self.selection
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The item that won a history entry.
    pub fn winner_of(&self, entry: &HistoryEntry) -> &Item {
        &self.selection[entry.winner]
    }

    /// The pair a history entry was cast on.
    pub fn pair_of(&self, entry: &HistoryEntry) -> Pair<'_> {
        self.resolve(entry.pair)
    }

    /// Every pair of the session in presentation order.
    pub fn comparisons(&self) -> impl Iterator<Item = Pair<'_>> + '_ {
        self.comparisons.iter().map(|&pair| self.resolve(pair))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn resolve(&self, (left, right): IndexedPair) -> Pair<'_> {
        Pair {
            left: &self.selection[left],
            right: &self.selection[right],
        }
    }
}
