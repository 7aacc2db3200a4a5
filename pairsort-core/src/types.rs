use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::SelectionError;

/// A rankable entity. Identity within a session is the `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gender: String,
    /// Any other descriptive fields carried by the catalog record.
    #[cfg_attr(feature = "serde", serde(flatten, default))]
    pub attributes: BTreeMap<String, String>,
}

impl Item {
    pub fn new(name: impl Into<String>, gender: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            gender: gender.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Screen position of an item within a pair. Not a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// A left/right comparison unit, borrowed from the session's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'a> {
    pub left: &'a Item,
    pub right: &'a Item,
}

impl<'a> Pair<'a> {
    pub fn get(&self, side: Side) -> &'a Item {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.left.name == name || self.right.name == name
    }
}

/// One cast vote. Indices refer to positions in the session's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub pair: IndexedPair,
    pub winner: usize,
}

/// Votes cast so far against the size of the comparison set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`, or 0 when there is nothing to vote on.
    pub percent: u32,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            // floor(x + 0.5) in integer arithmetic
            ((200 * completed + total) / (2 * total)) as u32
        };
        Progress {
            completed,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    /// Progress bar label, e.g. `67%`.
    pub fn percent_text(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Progress bar hover label, e.g. `2 / 3`.
    pub fn count_text(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }
}

/// A ranked item with its final win count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItem {
    /// 1-based position.
    pub rank: usize,
    pub name: String,
    pub score: u32,
}

impl fmt::Display for RankedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.rank, self.name)
    }
}

/// Internal pair of selection indices, `(left, right)`.
pub type IndexedPair = (usize, usize);

/// Maps item names to internal 0..N selection indices.
#[derive(Debug, Clone)]
pub(crate) struct NameIndex {
    name_to_idx: HashMap<String, usize>,
}

impl NameIndex {
    pub fn from_items(items: &[Item]) -> Result<Self, SelectionError> {
        let mut name_to_idx = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if name_to_idx.insert(item.name.clone(), idx).is_some() {
                return Err(SelectionError::DuplicateName {
                    name: item.name.clone(),
                });
            }
        }
        Ok(NameIndex { name_to_idx })
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.name_to_idx.get(name).copied()
    }
}
