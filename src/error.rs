//! Error types for the board engine

use thiserror::Error;

/// Result type for board transitions
pub type Result<T> = std::result::Result<T, BoardError>;

/// Rejections and failures produced by board transitions.
///
/// Every variant is a pure value describing the violated rule; none are
/// fatal. A rejected transition leaves the prior board untouched, so the
/// caller keeps rendering the old state and may surface the message.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Column has tasks and cannot be deleted
    #[error("column '{id}' has {count} tasks and cannot be deleted")]
    ColumnNotEmpty { id: String, count: usize },

    /// Adding or moving a task would breach the column's WIP cap
    #[error("column '{column}' is at its WIP limit of {limit}")]
    WipLimitExceeded { column: String, limit: usize },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this is a capacity rejection the UI typically surfaces as a
    /// warning toast rather than an error dialog.
    pub fn is_wip_rejection(&self) -> bool {
        matches!(self, Self::WipLimitExceeded { .. })
    }
}
