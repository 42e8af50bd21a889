//! Operation Error Taxonomy
//!
//! One kind per user-visible failure. Every repository operation converts
//! its own transport failure into one of these; nothing propagates raw.

use thiserror::Error;

/// Terminal, non-retried failure of a single user-facing operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    #[error("Unable to load tasks")]
    Load,

    #[error("Title should not be empty")]
    EmptyTitle,

    #[error("Unable to add a task")]
    Create,

    #[error("Unable to delete a task")]
    Delete,

    #[error("Unable to update a task")]
    Update,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_messages() {
        assert_eq!(TaskError::Load.to_string(), "Unable to load tasks");
        assert_eq!(TaskError::EmptyTitle.to_string(), "Title should not be empty");
        assert_eq!(TaskError::Delete.to_string(), "Unable to delete a task");
    }
}
