/// Comparison generation: every unordered pair of the selection, shuffled once.
///
/// Public functions accept `&[Item]` and return borrowed `Pair`s.
/// Internal functions use `usize` indices into the selection.
use rand::Rng;
use tracing::trace;

use crate::error::SelectionError;
use crate::shuffle::shuffle;
use crate::types::{IndexedPair, Item, Pair};

/// Minimum number of items a comparison set can be built from.
pub const MIN_SELECTION: usize = 2;

/// Number of unordered pairs among `num_items` items: `n * (n - 1) / 2`.
pub fn pair_count(num_items: usize) -> usize {
    num_items * num_items.saturating_sub(1) / 2
}

/// Check that a selection is large enough to compare.
pub fn validate_selection(items: &[Item]) -> Result<(), SelectionError> {
    if items.len() < MIN_SELECTION {
        return Err(SelectionError::InsufficientSelection { count: items.len() });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public generator (works with items)
// ---------------------------------------------------------------------------

/// Build the full comparison set for `items` in a random presentation order.
///
/// For each `a` preceding `b` in `items`, the pair is shown as `(a, b)`.
pub fn generate_comparisons<'a>(
    items: &'a [Item],
    rng: &mut impl Rng,
) -> Result<Vec<Pair<'a>>, SelectionError> {
    validate_selection(items)?;
    Ok(generate_comparisons_indexed(items.len(), rng)
        .into_iter()
        .map(|(l, r)| Pair {
            left: &items[l],
            right: &items[r],
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Internal indexed generator
// ---------------------------------------------------------------------------

pub(crate) fn all_pairs_indexed(num_items: usize) -> Vec<IndexedPair> {
    let mut pairs = Vec::with_capacity(pair_count(num_items));
    for i in 0..num_items {
        for j in (i + 1)..num_items {
            pairs.push((i, j));
        }
    }
    pairs
}

pub(crate) fn generate_comparisons_indexed(num_items: usize, rng: &mut impl Rng) -> Vec<IndexedPair> {
    let mut pairs = all_pairs_indexed(num_items);
    shuffle(&mut pairs, rng);
    trace!(num_items, pairs = pairs.len(), "generated comparison set");
    pairs
}
