//! Board Errors
//!
//! Failures the store reducers can report. The UI logs and ignores them.

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    ListNotFound(String),
    TaskNotFound(String),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::ListNotFound(id) => write!(f, "List not found: {}", id),
            BoardError::TaskNotFound(id) => write!(f, "Task not found: {}", id),
        }
    }
}

impl std::error::Error for BoardError {}
