//! Text normalization pipelines.
//!
//! # Overview
//!
//! This crate provides:
//! - **Steps**: atomic, pure, idempotent transforms ([`Step`]): `trim`,
//!   `collapse_whitespace`, `strip_punctuation`, `normalize_unicode`,
//!   `fold_case`
//! - **Pipelines**: ordered, immutable step sequences that compose by
//!   concatenation ([`Pipeline`])
//! - **Configuration**: named pipelines loaded from JSON
//!   ([`NormalizationConfig`])
//!
//! # Example
//!
//! ```
//! use strclean_normalization::{CaseTarget, Pipeline, Step, normalize};
//!
//! assert_eq!(normalize("  Café   au  LAIT "), "café au lait");
//!
//! let shout = Pipeline::new([Step::Trim, Step::fold_case(CaseTarget::Upper)]);
//! assert_eq!(shout.apply("  hey "), "HEY");
//! ```
//!
//! Step order is significant and left to the caller. The recommended order
//! (`normalize_unicode → trim → collapse_whitespace → strip_punctuation →
//! fold_case`) is what [`Pipeline::recommended`] builds.

mod config;
mod error;
mod pipeline;
mod step;

pub use config::{DEFAULT_PIPELINE, NormalizationConfig};
pub use error::{ConfigError, Result};
pub use pipeline::{Pipeline, compose, normalize, normalize_with};
pub use step::{
    ASCII_PUNCTUATION, CaseTarget, PunctuationSet, Step, UnicodeForm, collapse_whitespace,
    fold_case, normalize_unicode, strip_punctuation, trim,
};
