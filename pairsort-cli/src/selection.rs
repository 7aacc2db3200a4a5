/// Turning user input into a selection of catalog characters.
///
/// Works like a column of checkboxes: each character is either picked or not,
/// and the selection keeps catalog order no matter how it was typed.
use pairsort_core::Item;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionInputError {
    #[error("No character named \"{0}\" in the catalog")]
    UnknownName(String),

    #[error("Number {index} is out of range (catalog has {len} characters)")]
    OutOfRange { index: usize, len: usize },
}

/// Resolve one token to a 0-based catalog index range.
///
/// Tokens are 1-based numbers (`3`), inclusive ranges (`2-5`) or names,
/// matched ignoring case.
fn resolve_token(token: &str, catalog: &[Item]) -> Result<Vec<usize>, SelectionInputError> {
    let check = |n: usize| {
        if n == 0 || n > catalog.len() {
            Err(SelectionInputError::OutOfRange {
                index: n,
                len: catalog.len(),
            })
        } else {
            Ok(n - 1)
        }
    };

    if let Ok(n) = token.parse::<usize>() {
        return Ok(vec![check(n)?]);
    }

    if let Some((lo, hi)) = token.split_once('-') {
        if let (Ok(lo), Ok(hi)) = (lo.trim().parse::<usize>(), hi.trim().parse::<usize>()) {
            let (lo, hi) = (check(lo.min(hi))?, check(lo.max(hi))?);
            return Ok((lo..=hi).collect());
        }
    }

    catalog
        .iter()
        .position(|item| item.name.eq_ignore_ascii_case(token))
        .map(|idx| vec![idx])
        .ok_or_else(|| SelectionInputError::UnknownName(token.to_string()))
}

/// Parse comma- or space-separated tokens into catalog indices.
///
/// A comma-delimited chunk is first tried whole, so names with spaces
/// ("Dan Heng") still resolve; otherwise it is split on whitespace.
pub fn parse_selection(input: &str, catalog: &[Item]) -> Result<BTreeSet<usize>, SelectionInputError> {
    let mut picked = BTreeSet::new();
    for chunk in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match resolve_token(chunk, catalog) {
            Ok(indices) => picked.extend(indices),
            Err(SelectionInputError::UnknownName(_)) if chunk.contains(char::is_whitespace) => {
                for token in chunk.split_whitespace() {
                    picked.extend(resolve_token(token, catalog)?);
                }
            }
            Err(e) => return Err(e),
        }
    }
    Ok(picked)
}

/// Build the selection from `--select` values, or the whole catalog with `all`.
pub fn select(catalog: &[Item], specs: &[String], all: bool) -> Result<Vec<Item>, SelectionInputError> {
    if all {
        return Ok(catalog.to_vec());
    }

    let mut picked = BTreeSet::new();
    for spec in specs {
        picked.extend(parse_selection(spec, catalog)?);
    }
    Ok(picked.into_iter().map(|idx| catalog[idx].clone()).collect())
}
