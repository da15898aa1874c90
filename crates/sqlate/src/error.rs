//! Error types for sqlate

use thiserror::Error;

/// Result type alias for sqlate operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while building or rendering a [`Fragment`](crate::Fragment).
///
/// Every variant is a programmer error surfaced at the call that received the
/// bad input. Nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// A value expected to be an array was something else
    #[error("Not an array: {0}")]
    NotAnArray(String),

    /// A value expected to be SQL text was something else
    #[error("SQL should be a string: {0}")]
    NotText(String),

    /// Unknown placeholder style token
    #[error("Invalid placeholder format: {0:?}")]
    InvalidFormat(String),

    /// Template segments don't line up with the argument list
    #[error("Template has {segments} segments for {args} arguments")]
    TemplateArity { segments: usize, args: usize },

    /// Placeholder slots and bound parameters disagree
    #[error("Fragment has {slots} placeholders but {parameters} parameters")]
    ParameterMismatch { slots: usize, parameters: usize },
}

impl SqlError {
    /// Create a not-an-array error naming the offending value
    pub fn not_an_array(value: impl std::fmt::Display) -> Self {
        Self::NotAnArray(value.to_string())
    }

    /// Create a not-text error naming the offending value
    pub fn not_text(value: impl std::fmt::Display) -> Self {
        Self::NotText(value.to_string())
    }

    /// Check if this is a type error (wrong kind of input value)
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::NotAnArray(_) | Self::NotText(_))
    }

    /// Check if this is an invalid placeholder format error
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}
