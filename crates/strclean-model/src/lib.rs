//! Value types for identifier tokenization and naming-convention detection.
//!
//! Every type here is an immutable value created fresh per call:
//!
//! - [`Token`] and [`Casing`]: one word of an identifier and its letter case
//! - [`Separator`]: what sat between two adjacent tokens
//! - [`Tokens`]: the tokenizer output (tokens plus separator pattern)
//! - [`Convention`]: the closed set of recognised naming styles
//! - [`InvalidInputKind`]: the only error a caller can observe

pub mod convention;
pub mod error;
pub mod token;

pub use convention::Convention;
pub use error::{InvalidInputKind, Result};
pub use token::{Casing, Separator, Token, Tokens};
