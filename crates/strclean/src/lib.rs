//! String cleaning for identifiers and labels.
//!
//! One entry point for the workspace crates:
//!
//! - [`tokenize`] and [`detect_naming_convention`] from `strclean-naming`
//! - [`normalize`] and [`Pipeline`] from `strclean-normalization`
//! - [`map_over`] and the Polars column helpers from `strclean-transform`
//!
//! # Example
//!
//! ```
//! use strclean::{Convention, detect_naming_convention, map_over, normalize};
//!
//! assert_eq!(detect_naming_convention("FOO_BAR"), Convention::ScreamingSnake);
//! assert_eq!(normalize("  a   b  "), "a b");
//!
//! let labels = map_over(&[Some("fooBar"), None], detect_naming_convention);
//! assert_eq!(labels, [Some(Convention::Camel), None]);
//! ```

pub use strclean_model::{Casing, Convention, InvalidInputKind, Separator, Token, Tokens};
pub use strclean_naming::{
    NameReport, check_name, classify, contains_acronym, convert_case, detect_naming_convention,
    to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case, to_snake_case,
    to_title_case, tokenize,
};
pub use strclean_normalization::{
    CaseTarget, ConfigError, NormalizationConfig, Pipeline, PunctuationSet, Step, UnicodeForm,
    compose, normalize, normalize_with,
};
pub use strclean_transform::{
    TransformError, detect_all, detect_column, detect_series, detect_value, map_over, map_series,
    map_values, normalize_all, normalize_column, normalize_series, normalize_value,
};

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::AnyValue;

    #[test]
    fn test_public_operations() {
        let tokens = tokenize("fooBar");
        assert_eq!(tokens.texts().collect::<Vec<_>>(), ["foo", "Bar"]);
        assert_eq!(detect_naming_convention("fooBar"), Convention::Camel);
        assert_eq!(normalize("  a   b  "), "a b");
        assert_eq!(
            normalize_all(&[Some(" X "), None], &Pipeline::default().with_step(Step::Trim)),
            [Some("X".to_string()), None]
        );
    }

    #[test]
    fn test_invalid_input_kind_surfaces() {
        let err = normalize_value(&AnyValue::Int16(3), &Pipeline::recommended()).unwrap_err();
        assert_eq!(err, InvalidInputKind::new("string or null", "i16"));
    }
}
