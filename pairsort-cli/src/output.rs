/// Output formatting: catalog listing, final ranking table and JSON.
use pairsort_core::{pair_count, Item, RankedItem};
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    items: &'a [RankedItem],
    total_comparisons: usize,
}

/// Numbered catalog, one character per line.
pub fn format_catalog(items: &[Item]) -> String {
    let width = items.len().to_string().len();
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if item.gender.is_empty() {
                format!("{:>width$}. {}\n", i + 1, item.name)
            } else {
                format!("{:>width$}. {} ({})\n", i + 1, item.name, item.gender)
            }
        })
        .collect()
}

/// Final ranking as a terminal table.
pub fn format_table(ranking: &[RankedItem]) -> String {
    // Find the widest name for padding
    let name_width = ranking
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(9)
        .max(9); // at least "Character"

    let mut out = String::new();
    out.push_str(&format!(" # | {:<name_width$} | Wins\n", "Character"));
    out.push_str(&format!("---|-{}-|-----\n", "-".repeat(name_width)));
    for r in ranking {
        out.push_str(&format!("{:>2} | {:<name_width$} | {:>4}\n", r.rank, r.name, r.score));
    }
    out.push_str(&format!(
        "\n{} characters ranked ({} comparisons)\n",
        ranking.len(),
        pair_count(ranking.len()),
    ));
    out
}

/// Final ranking as JSON.
pub fn format_json(ranking: &[RankedItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput {
        items: ranking,
        total_comparisons: pair_count(ranking.len()),
    })
}
