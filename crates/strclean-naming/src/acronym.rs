//! Acronym detection.

use std::sync::LazyLock;

use regex::Regex;

/// Two or more capitals as a whole word (`NASA`), the same wrapped in
/// parentheses (`(BMW)`), or dotted single capitals (`U.S.A`).
static ACRONYM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[A-Z]{2,}|\([A-Z]{2,}\)|[A-Z](?:\.[A-Z])+)\b")
        .expect("Invalid acronym regex")
});

/// Whether `name` contains an acronym at word boundaries.
///
/// Word boundaries follow regex rules, where `_` is a word character: the
/// capitals in `parse_HTTP` or `HTTPServer` are not standalone words and do
/// not count.
///
/// # Examples
///
/// ```
/// use strclean_naming::contains_acronym;
///
/// assert!(contains_acronym("NASA launch"));
/// assert!(contains_acronym("Made in the U.S.A"));
/// assert!(!contains_acronym("Nasa launch"));
/// ```
pub fn contains_acronym(name: &str) -> bool {
    ACRONYM_REGEX.is_match(name)
}
