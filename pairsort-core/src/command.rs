/// Single command dispatch and post-transition snapshots.
///
/// Every input source (pointer, keyboard, script) maps to one of four commands.
/// After a transition, the presentation layer reads a `Snapshot` and renders it;
/// the engine never calls back into presentation.
use crate::engine::{Session, Transition};
use crate::types::{Item, Progress, RankedItem, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    ChooseLeft,
    ChooseRight,
    Undo,
    Restart,
}

/// What to show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<'a> {
    AwaitingVote { left: &'a Item, right: &'a Item },
    Complete { ranking: Vec<RankedItem> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub phase: Phase<'a>,
    pub progress: Progress,
    /// Whether an undo control should be offered. Hidden on the result screen.
    pub can_undo: bool,
}

impl Session {
    pub fn dispatch(&mut self, command: Command) -> Transition {
        match command {
            Command::ChooseLeft => self.choose(Side::Left),
            Command::ChooseRight => self.choose(Side::Right),
            Command::Undo => self.undo(),
            Command::Restart => self.restart(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let phase = match self.current_pair() {
            Some(pair) => Phase::AwaitingVote {
                left: pair.left,
                right: pair.right,
            },
            None => Phase::Complete {
                ranking: self.ranking().unwrap_or_default(),
            },
        };
        let can_undo = matches!(phase, Phase::AwaitingVote { .. }) && !self.history().is_empty();

        Snapshot {
            phase,
            progress: self.progress(),
            can_undo,
        }
    }
}
