/// Final ordering by win count.
use crate::types::{Item, RankedItem};

/// Sort items by descending score.
///
/// `scores[i]` is the win count of `items[i]`. Equal scores keep the
/// selection order (stable sort), so the item selected first ranks higher.
pub fn finalize(items: &[Item], scores: &[u32]) -> Vec<RankedItem> {
    assert_eq!(
        items.len(),
        scores.len(),
        "finalize requires one score per item"
    );

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));

    order
        .into_iter()
        .enumerate()
        .map(|(pos, idx)| RankedItem {
            rank: pos + 1,
            name: items[idx].name.clone(),
            score: scores[idx],
        })
        .collect()
}

/// Render a ranking as `"1. A"` lines.
pub fn ranking_lines(ranking: &[RankedItem]) -> Vec<String> {
    ranking.iter().map(ToString::to_string).collect()
}
