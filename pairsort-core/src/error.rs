use thiserror::Error;

/// Reasons a selection cannot start a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Select at least 2 characters to rank (got {count})")]
    InsufficientSelection { count: usize },

    /// Two selected items share a name, so their scores would collide.
    #[error("Duplicate character name in selection: {name}")]
    DuplicateName { name: String },
}
