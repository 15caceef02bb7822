//! Single dynamically typed values.
//!
//! These are the scalar counterparts of the column helpers: a string is
//! processed, a null stays null, anything else is an
//! [`InvalidInputKind`](strclean_model::InvalidInputKind).

use polars::prelude::AnyValue;
use strclean_common::any_to_nullable_str;
use strclean_model::{Convention, Result};
use strclean_naming::detect_naming_convention;
use strclean_normalization::Pipeline;

/// Run `pipeline` over one value.
pub fn normalize_value(value: &AnyValue<'_>, pipeline: &Pipeline) -> Result<Option<String>> {
    Ok(any_to_nullable_str(value)?.map(|s| pipeline.apply(s)))
}

/// Detect the naming convention of one value.
pub fn detect_value(value: &AnyValue<'_>) -> Result<Option<Convention>> {
    Ok(any_to_nullable_str(value)?.map(detect_naming_convention))
}
