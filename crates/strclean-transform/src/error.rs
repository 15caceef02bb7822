//! Error types for element-wise application.

use strclean_model::InvalidInputKind;
use thiserror::Error;

/// Errors that can occur while mapping over a sequence or column.
#[derive(Debug, Error)]
pub enum TransformError {
    /// An element (or the whole column) is neither a string nor a null.
    #[error(transparent)]
    InvalidInputKind(#[from] InvalidInputKind),

    /// Column not found in DataFrame.
    #[error("column '{0}' not found in DataFrame")]
    ColumnNotFound(String),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for element-wise operations.
pub type Result<T> = std::result::Result<T, TransformError>;
