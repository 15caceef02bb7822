//! Error type for values that are not strings.

use thiserror::Error;

/// A value handed to a string operation was not a string (or, for
/// sequences, not a string-or-null).
///
/// Raised before any work is done; nothing is coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input kind: expected {expected}, found {found}")]
pub struct InvalidInputKind {
    /// What the operation accepts (e.g. "string", "string or null").
    pub expected: &'static str,
    /// Runtime kind of the rejected value.
    pub found: String,
}

impl InvalidInputKind {
    pub fn new(expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            expected,
            found: found.into(),
        }
    }
}

/// Result type for operations that accept dynamically typed input.
pub type Result<T> = std::result::Result<T, InvalidInputKind>;
