//! Naming-convention classification.
//!
//! Each concrete [`Convention`] has a consistency predicate over the token
//! casings and the separator pattern. Predicates are evaluated in a fixed
//! priority order and the first one that holds wins:
//!
//! `lowercase`/`UPPERCASE` → `SCREAMING_SNAKE_CASE` → `snake_case` →
//! `kebab-case` → `Title Case` → `PascalCase` → `camelCase`
//!
//! Digit-only tokens and letter/digit boundaries are neutral: they never
//! make a predicate fail on their own.

use strclean_model::{Casing, Convention, Separator, Token};

use crate::tokenizer::tokenize;

type Predicate = fn(&Shape<'_>) -> bool;

const PRIORITY: [(Convention, Predicate); 8] = [
    (Convention::Lower, is_lower),
    (Convention::Upper, is_upper),
    (Convention::ScreamingSnake, is_screaming_snake),
    (Convention::Snake, is_snake),
    (Convention::Kebab, is_kebab),
    (Convention::Title, is_title),
    (Convention::Pascal, is_pascal),
    (Convention::Camel, is_camel),
];

/// Tokens and separators of one identifier, with the queries the
/// predicates share.
struct Shape<'a> {
    tokens: &'a [Token],
    separators: &'a [Separator],
}

impl Shape<'_> {
    fn cased(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_cased())
    }

    fn all_cased(&self, pred: impl Fn(&Token) -> bool) -> bool {
        self.cased().all(pred)
    }

    fn has_explicit(&self) -> bool {
        self.separators.iter().any(|s| s.is_explicit())
    }

    fn has_case_change(&self) -> bool {
        self.separators.contains(&Separator::CaseChange)
    }

    /// Every boundary is `kind` or a digit transition. Once two or more
    /// letter-bearing tokens exist, at least one `kind` separator must be
    /// present, otherwise `Foo2Bar` would pass as a separator style.
    fn separated_only_by(&self, kind: Separator) -> bool {
        let consistent = self
            .separators
            .iter()
            .all(|&s| s == kind || s == Separator::DigitChange);
        consistent && (self.cased().count() < 2 || self.separators.contains(&kind))
    }

    fn single_word(&self) -> bool {
        !self.has_explicit() && !self.has_case_change()
    }
}

fn casing_is(casing: Casing) -> impl Fn(&Token) -> bool {
    move |token: &Token| token.casing() == casing
}

fn capitalized_or_upper(token: &Token) -> bool {
    matches!(token.casing(), Casing::Capitalized | Casing::Upper)
}

fn is_lower(shape: &Shape<'_>) -> bool {
    shape.single_word() && shape.all_cased(casing_is(Casing::Lower))
}

fn is_upper(shape: &Shape<'_>) -> bool {
    shape.single_word() && shape.all_cased(casing_is(Casing::Upper))
}

fn is_screaming_snake(shape: &Shape<'_>) -> bool {
    shape.separated_only_by(Separator::Underscore) && shape.all_cased(casing_is(Casing::Upper))
}

fn is_snake(shape: &Shape<'_>) -> bool {
    shape.separated_only_by(Separator::Underscore) && shape.all_cased(casing_is(Casing::Lower))
}

fn is_kebab(shape: &Shape<'_>) -> bool {
    shape.separated_only_by(Separator::Hyphen) && shape.all_cased(casing_is(Casing::Lower))
}

fn is_title(shape: &Shape<'_>) -> bool {
    shape.separated_only_by(Separator::Space) && shape.all_cased(Token::is_capitalized)
}

fn is_pascal(shape: &Shape<'_>) -> bool {
    !shape.has_explicit() && shape.all_cased(capitalized_or_upper)
}

fn is_camel(shape: &Shape<'_>) -> bool {
    if shape.has_explicit() {
        return false;
    }
    let mut cased = shape.cased();
    cased
        .next()
        .is_some_and(|first| first.casing() == Casing::Lower)
        && cased.all(capitalized_or_upper)
}

/// Classify a token sequence and its separator pattern.
///
/// Pure: the result depends only on the arguments. Returns
/// [`Convention::Unknown`] when there is no token with a cased letter, and
/// [`Convention::Mixed`] when tokens exist but no predicate holds.
pub fn classify(tokens: &[Token], separators: &[Separator]) -> Convention {
    let shape = Shape { tokens, separators };
    if shape.cased().next().is_none() {
        return Convention::Unknown;
    }

    PRIORITY
        .iter()
        .find(|(_, holds)| holds(&shape))
        .map_or(Convention::Mixed, |(convention, _)| *convention)
}

/// Tokenize `input` and classify the result.
///
/// # Examples
///
/// ```
/// use strclean_naming::{Convention, detect_naming_convention};
///
/// assert_eq!(detect_naming_convention("foo_bar"), Convention::Snake);
/// assert_eq!(detect_naming_convention("FOO_BAR"), Convention::ScreamingSnake);
/// assert_eq!(detect_naming_convention("foo-bar"), Convention::Kebab);
/// assert_eq!(detect_naming_convention("FooBar"), Convention::Pascal);
/// assert_eq!(detect_naming_convention(""), Convention::Unknown);
/// ```
pub fn detect_naming_convention(input: &str) -> Convention {
    let tokens = tokenize(input);
    let convention = classify(tokens.tokens(), tokens.separators());
    tracing::trace!(
        tokens = tokens.len(),
        convention = %convention,
        "Classified identifier"
    );
    convention
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conventions() {
        assert_eq!(detect_naming_convention("foo_bar"), Convention::Snake);
        assert_eq!(detect_naming_convention("fooBar"), Convention::Camel);
        assert_eq!(detect_naming_convention("FooBar"), Convention::Pascal);
        assert_eq!(detect_naming_convention("FOO_BAR"), Convention::ScreamingSnake);
        assert_eq!(detect_naming_convention("foo-bar"), Convention::Kebab);
        assert_eq!(detect_naming_convention("Foo Bar"), Convention::Title);
    }

    #[test]
    fn test_single_word_conventions() {
        assert_eq!(detect_naming_convention("foo"), Convention::Lower);
        assert_eq!(detect_naming_convention("FOO"), Convention::Upper);
        assert_eq!(detect_naming_convention("x"), Convention::Lower);
        assert_eq!(detect_naming_convention("X"), Convention::Upper);
        assert_eq!(detect_naming_convention("foo2bar"), Convention::Lower);
        assert_eq!(detect_naming_convention("_foo_"), Convention::Lower);
    }

    #[test]
    fn test_single_capitalized_word_is_title() {
        // Separator rule holds vacuously and Title Case outranks PascalCase.
        assert_eq!(detect_naming_convention("Foo"), Convention::Title);
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(detect_naming_convention("parseHTTPResponse"), Convention::Camel);
        assert_eq!(detect_naming_convention("HTTPServer"), Convention::Pascal);
        assert_eq!(detect_naming_convention("getURL"), Convention::Camel);
    }

    #[test]
    fn test_digits_are_neutral() {
        assert_eq!(detect_naming_convention("version_2"), Convention::Snake);
        assert_eq!(detect_naming_convention("foo_bar2"), Convention::Snake);
        assert_eq!(detect_naming_convention("MAX_RETRIES_3"), Convention::ScreamingSnake);
        assert_eq!(detect_naming_convention("utf8Encode"), Convention::Camel);
        assert_eq!(detect_naming_convention("Foo2Bar"), Convention::Pascal);
        assert_eq!(detect_naming_convention("Chapter 2"), Convention::Title);
    }

    #[test]
    fn test_mixed() {
        assert_eq!(detect_naming_convention("foo_Bar"), Convention::Mixed);
        assert_eq!(detect_naming_convention("foo_bar-baz"), Convention::Mixed);
        assert_eq!(detect_naming_convention("foo bar"), Convention::Mixed);
        assert_eq!(detect_naming_convention("foo.bar"), Convention::Mixed);
        assert_eq!(detect_naming_convention("fooBar_baz"), Convention::Mixed);
        assert_eq!(detect_naming_convention("Foo-Bar"), Convention::Mixed);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detect_naming_convention(""), Convention::Unknown);
        assert_eq!(detect_naming_convention("   "), Convention::Unknown);
        assert_eq!(detect_naming_convention("--__"), Convention::Unknown);
        assert_eq!(detect_naming_convention("2024"), Convention::Unknown);
        assert_eq!(detect_naming_convention("12_34"), Convention::Unknown);
    }

    #[test]
    fn test_title_with_single_letter_words() {
        assert_eq!(detect_naming_convention("A Tale Of Two Cities"), Convention::Title);
    }

    #[test]
    fn test_classify_on_parts() {
        let tokens = tokenize("Foo Bar");
        assert_eq!(
            classify(tokens.tokens(), tokens.separators()),
            Convention::Title
        );
        assert_eq!(classify(&[], &[]), Convention::Unknown);
    }
}
