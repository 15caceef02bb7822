//! Identifier tokenization and naming-convention detection.
//!
//! # Overview
//!
//! - **Tokenizer**: split a string into word tokens and record what
//!   separated them ([`tokenize`])
//! - **Classifier**: decide which [`Convention`] a token sequence follows,
//!   with a fixed priority order for ambiguous input ([`classify`])
//! - **Conversion**: re-render any identifier in a target convention
//!   ([`convert_case`])
//! - **Checks**: acronym detection and a combined [`NameReport`]
//!
//! # Example
//!
//! ```
//! use strclean_naming::{Convention, convert_case, detect_naming_convention};
//!
//! assert_eq!(detect_naming_convention("fooBar"), Convention::Camel);
//! assert_eq!(
//!     convert_case("fooBar", Convention::Snake).as_deref(),
//!     Some("foo_bar")
//! );
//! ```

mod acronym;
mod classifier;
mod convert;
mod report;
mod tokenizer;

pub use strclean_model::{Casing, Convention, Separator, Token, Tokens};

pub use acronym::contains_acronym;
pub use classifier::{classify, detect_naming_convention};
pub use convert::{
    convert_case, to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case,
    to_snake_case, to_title_case,
};
pub use report::{NameReport, check_name};
pub use tokenizer::tokenize;
