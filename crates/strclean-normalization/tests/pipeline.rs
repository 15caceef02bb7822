//! Idempotence and composition properties of normalization steps.

use proptest::prelude::*;
use strclean_normalization::{
    CaseTarget, Pipeline, PunctuationSet, Step, UnicodeForm, collapse_whitespace, compose,
    fold_case, normalize, trim,
};

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Trim),
        Just(Step::CollapseWhitespace),
        Just(Step::strip_punctuation()),
        Just(Step::StripPunctuation {
            chars: PunctuationSet::new(['.', ' ', 'x']),
        }),
        Just(Step::normalize_unicode()),
        Just(Step::NormalizeUnicode {
            form: UnicodeForm::Nfkd,
        }),
        Just(Step::fold_case(CaseTarget::Lower)),
        Just(Step::fold_case(CaseTarget::Upper)),
    ]
}

#[test]
fn test_default_pipeline_scenario() {
    assert_eq!(normalize("  a   b  "), "a b");
}

#[test]
fn test_pipeline_of_idempotent_steps_need_not_be_idempotent() {
    // Stripping the dash leaves a double space that only a second
    // collapse_whitespace pass removes.
    let once = normalize("a - b");
    assert_eq!(once, "a  b");
    assert_eq!(normalize(&once), "a b");
}

#[test]
fn test_visually_identical_strings_compare_equal() {
    let composed = "Caf\u{00E9}";
    let decomposed = "Cafe\u{0301}";
    assert_ne!(composed, decomposed);
    assert_eq!(normalize(composed), normalize(decomposed));
}

proptest! {
    #[test]
    fn fold_case_is_idempotent(input in "\\PC{0,32}") {
        for target in [CaseTarget::Lower, CaseTarget::Upper] {
            let once = fold_case(&input, target);
            prop_assert_eq!(fold_case(&once, target), once);
        }
    }

    #[test]
    fn collapse_whitespace_is_idempotent(input in "[a-z \\t\\n\\u{00A0}]{0,32}") {
        let once = collapse_whitespace(&input);
        prop_assert_eq!(collapse_whitespace(&once), once.clone());
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn trim_is_idempotent(input in "\\PC{0,32}") {
        let once = trim(&input);
        prop_assert_eq!(trim(&once), once);
    }

    #[test]
    fn every_step_is_idempotent(step in any_step(), input in "\\PC{0,32}") {
        let once = step.apply(&input);
        prop_assert_eq!(step.apply(&once), once);
    }

    #[test]
    fn compose_matches_sequential_application(
        first in prop::collection::vec(any_step(), 0..4),
        second in prop::collection::vec(any_step(), 0..4),
        input in "\\PC{0,24}",
    ) {
        let a = Pipeline::new(first);
        let b = Pipeline::new(second);
        let ab = compose(&a, &b);
        prop_assert_eq!(ab.len(), a.len() + b.len());
        prop_assert_eq!(ab.apply(&input), b.apply(&a.apply(&input)));
    }
}
