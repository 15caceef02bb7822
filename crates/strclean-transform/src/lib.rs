//! Element-wise application of tokenization, detection and normalization.
//!
//! This crate is the adapter between the per-string operations and
//! externally supplied collections:
//!
//! - **elementwise**: slices of optional strings and of Polars `AnyValue`s
//! - **value**: single `AnyValue`s
//! - **frame**: Polars `Series` and `DataFrame` columns
//!
//! Every helper preserves length and position and passes nulls through
//! without calling the mapped function. Anything that is neither a string
//! nor a null fails the whole call with `InvalidInputKind`; nothing is
//! coerced.

mod error;

pub mod elementwise;
pub mod frame;
pub mod value;

pub use error::{Result, TransformError};

pub use elementwise::{detect_all, map_over, map_values, normalize_all};
pub use frame::{detect_column, detect_series, map_series, normalize_column, normalize_series};
pub use value::{detect_value, normalize_value};
