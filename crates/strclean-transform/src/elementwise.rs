//! Element-wise application over in-memory sequences.
//!
//! Output always has the input's length and order. A missing element at
//! position `i` stays missing at position `i` and the mapped function is
//! never called for it.

use polars::prelude::AnyValue;
use strclean_common::any_to_nullable_str;
use strclean_model::Convention;
use strclean_naming::detect_naming_convention;
use strclean_normalization::Pipeline;

use crate::error::Result;

/// Apply `f` to every present element of `values`.
///
/// # Examples
///
/// ```
/// use strclean_transform::map_over;
///
/// let out = map_over(&[Some("a"), None, Some("b")], str::to_uppercase);
/// assert_eq!(out, [Some("A".to_string()), None, Some("B".to_string())]);
/// ```
pub fn map_over<S, T, F>(values: &[Option<S>], mut f: F) -> Vec<Option<T>>
where
    S: AsRef<str>,
    F: FnMut(&str) -> T,
{
    values
        .iter()
        .map(|value| value.as_ref().map(|s| f(s.as_ref())))
        .collect()
}

/// Apply `f` to dynamically typed values.
///
/// Every element is checked before `f` runs for any of them: a single
/// non-string, non-null element fails the whole call and no partial output
/// is produced.
pub fn map_values<T, F>(values: &[AnyValue<'_>], f: F) -> Result<Vec<Option<T>>>
where
    F: FnMut(&str) -> T,
{
    let strings = values
        .iter()
        .map(any_to_nullable_str)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(map_over(&strings, f))
}

/// Run `pipeline` over every present element.
pub fn normalize_all<S: AsRef<str>>(values: &[Option<S>], pipeline: &Pipeline) -> Vec<Option<String>> {
    map_over(values, |s| pipeline.apply(s))
}

/// Detect the naming convention of every present element.
pub fn detect_all<S: AsRef<str>>(values: &[Option<S>]) -> Vec<Option<Convention>> {
    map_over(values, detect_naming_convention)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use strclean_normalization::{CaseTarget, Step};

    #[test]
    fn test_nulls_pass_through_in_place() {
        let values = [Some("a"), None, Some("b")];
        let out = map_over(&values, |s| format!("<{s}>"));
        assert_eq!(out, [Some("<a>".to_string()), None, Some("<b>".to_string())]);
    }

    #[test]
    fn test_function_not_called_for_nulls() {
        let calls = Cell::new(0);
        let values: Vec<Option<String>> = vec![None, Some("x".into()), None, None];
        let out = map_over(&values, |s| {
            calls.set(calls.get() + 1);
            s.len()
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(out, [None, Some(1), None, None]);
    }

    #[test]
    fn test_empty_sequence() {
        let values: [Option<&str>; 0] = [];
        assert!(map_over(&values, str::to_string).is_empty());
    }

    #[test]
    fn test_map_values_accepts_strings_and_nulls() {
        let values = [
            AnyValue::String("Foo"),
            AnyValue::Null,
            AnyValue::StringOwned("bar".into()),
        ];
        let out = map_values(&values, str::to_lowercase).unwrap();
        assert_eq!(out, [Some("foo".to_string()), None, Some("bar".to_string())]);
    }

    #[test]
    fn test_map_values_rejects_whole_call_without_partial_work() {
        let calls = Cell::new(0);
        let values = [AnyValue::String("a"), AnyValue::Int32(7), AnyValue::String("b")];
        let result = map_values(&values, |s| {
            calls.set(calls.get() + 1);
            s.to_string()
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_normalize_all() {
        let pipeline = Pipeline::new([Step::Trim, Step::fold_case(CaseTarget::Upper)]);
        let out = normalize_all(&[Some(" a "), None], &pipeline);
        assert_eq!(out, [Some("A".to_string()), None]);
    }

    #[test]
    fn test_detect_all() {
        let out = detect_all(&[Some("foo_bar"), None, Some("FooBar")]);
        assert_eq!(out, [Some(Convention::Snake), None, Some(Convention::Pascal)]);
    }
}
