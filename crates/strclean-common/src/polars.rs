//! Strict Polars `AnyValue` and `Series` accessors.
//!
//! Unlike a display conversion, these never turn numbers or booleans into
//! strings: anything that is not a string or a null is an
//! [`InvalidInputKind`].

use polars::prelude::*;
use strclean_model::{InvalidInputKind, Result};

const STRING_OR_NULL: &str = "string or null";

/// Runtime type name of a value, used in error reports.
pub fn dtype_name(value: &AnyValue<'_>) -> String {
    value.dtype().to_string()
}

/// Borrow a string `AnyValue` as `&str`.
///
/// `Null` maps to `Ok(None)`; any other variant is rejected.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use strclean_common::any_to_nullable_str;
///
/// assert_eq!(any_to_nullable_str(&AnyValue::String("hi")).unwrap(), Some("hi"));
/// assert_eq!(any_to_nullable_str(&AnyValue::Null).unwrap(), None);
/// assert!(any_to_nullable_str(&AnyValue::Int32(1)).is_err());
/// ```
pub fn any_to_nullable_str<'a>(value: &'a AnyValue<'_>) -> Result<Option<&'a str>> {
    match value {
        AnyValue::Null => Ok(None),
        AnyValue::String(s) => Ok(Some(*s)),
        AnyValue::StringOwned(s) => Ok(Some(s.as_str())),
        other => Err(InvalidInputKind::new(STRING_OR_NULL, dtype_name(other))),
    }
}

/// View a series as string data.
///
/// A `String` series is returned as-is; an all-null series of dtype `Null`
/// becomes a null string column of the same length. Every other dtype is
/// rejected before any element is read.
pub fn string_chunked(series: &Series) -> Result<StringChunked> {
    match series.dtype() {
        DataType::String => series
            .str()
            .cloned()
            .map_err(|_| InvalidInputKind::new(STRING_OR_NULL, series.dtype().to_string())),
        DataType::Null => Ok(StringChunked::full_null(
            series.name().clone(),
            series.len(),
        )),
        other => Err(InvalidInputKind::new(STRING_OR_NULL, other.to_string())),
    }
}
