//! Atomic text transforms.
//!
//! Every [`Step`] is a pure, total `&str -> String` function and is
//! idempotent: applying it twice gives the same result as applying it once.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Characters removed by [`Step::StripPunctuation`] unless configured.
pub const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Target case for [`Step::FoldCase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTarget {
    #[default]
    Lower,
    Upper,
}

/// Unicode normalization form for [`Step::NormalizeUnicode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeForm {
    /// Canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility composition (`ﬁ` → `fi`, full-width → ASCII).
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

/// Set of characters stripped by [`Step::StripPunctuation`].
///
/// Serialized as a plain string of the member characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PunctuationSet {
    chars: BTreeSet<char>,
}

impl PunctuationSet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Standard ASCII punctuation.
    pub fn ascii() -> Self {
        Self::new(ASCII_PUNCTUATION.chars())
    }

    /// Add a character to the set.
    #[must_use]
    pub fn with(mut self, ch: char) -> Self {
        self.chars.insert(ch);
        self
    }

    /// Keep a character that would otherwise be stripped.
    #[must_use]
    pub fn without(mut self, ch: char) -> Self {
        self.chars.remove(&ch);
        self
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::ascii()
    }
}

impl From<String> for PunctuationSet {
    fn from(value: String) -> Self {
        Self::new(value.chars())
    }
}

impl From<PunctuationSet> for String {
    fn from(value: PunctuationSet) -> Self {
        value.chars.into_iter().collect()
    }
}

/// One named text transform.
///
/// Every variant is idempotent: `apply(&apply(s)) == apply(s)`.
///
/// Configured from JSON with the step name as tag, e.g.
/// `{"step": "fold_case", "target": "upper"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Remove leading and trailing whitespace.
    Trim,
    /// Replace each maximal run of whitespace with a single `' '`.
    CollapseWhitespace,
    /// Remove every character in the set.
    StripPunctuation {
        #[serde(default)]
        chars: PunctuationSet,
    },
    /// Map to a Unicode normalization form so visually identical strings
    /// compare equal.
    NormalizeUnicode {
        #[serde(default)]
        form: UnicodeForm,
    },
    /// Map every character to one case.
    FoldCase {
        #[serde(default)]
        target: CaseTarget,
    },
}

impl Step {
    /// `strip_punctuation` with the ASCII punctuation set.
    pub fn strip_punctuation() -> Self {
        Self::StripPunctuation {
            chars: PunctuationSet::ascii(),
        }
    }

    /// `normalize_unicode` with canonical composition (NFC).
    pub fn normalize_unicode() -> Self {
        Self::NormalizeUnicode {
            form: UnicodeForm::Nfc,
        }
    }

    pub fn fold_case(target: CaseTarget) -> Self {
        Self::FoldCase { target }
    }

    /// Stable step name, identical to the configuration tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trim => "trim",
            Self::CollapseWhitespace => "collapse_whitespace",
            Self::StripPunctuation { .. } => "strip_punctuation",
            Self::NormalizeUnicode { .. } => "normalize_unicode",
            Self::FoldCase { .. } => "fold_case",
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::Trim => trim(input),
            Self::CollapseWhitespace => collapse_whitespace(input),
            Self::StripPunctuation { chars } => strip_punctuation(input, chars),
            Self::NormalizeUnicode { form } => normalize_unicode(input, *form),
            Self::FoldCase { target } => fold_case(input, *target),
        }
    }
}

/// Remove leading and trailing whitespace.
pub fn trim(input: &str) -> String {
    input.trim().to_string()
}

/// Replace each maximal run of whitespace with a single ordinary space.
///
/// Leading and trailing runs become one space each; combine with [`trim`]
/// to drop them.
///
/// ```
/// use strclean_normalization::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("a \t\n b"), "a b");
/// assert_eq!(collapse_whitespace("  a  "), " a ");
/// ```
pub fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Remove every character contained in `set`.
pub fn strip_punctuation(input: &str, set: &PunctuationSet) -> String {
    input.chars().filter(|&ch| !set.contains(ch)).collect()
}

pub fn normalize_unicode(input: &str, form: UnicodeForm) -> String {
    match form {
        UnicodeForm::Nfc => input.nfc().collect(),
        UnicodeForm::Nfd => input.nfd().collect(),
        UnicodeForm::Nfkc => input.nfkc().collect(),
        UnicodeForm::Nfkd => input.nfkd().collect(),
    }
}

pub fn fold_case(input: &str, target: CaseTarget) -> String {
    match target {
        CaseTarget::Lower => input.to_lowercase(),
        CaseTarget::Upper => input.to_uppercase(),
    }
}
