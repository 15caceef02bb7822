//! The closed set of naming conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A recognised naming style.
///
/// The string form (`Display`, serde) is the convention written in its own
/// style, e.g. `snake_case` or `Title Case`. It is part of the public
/// contract and does not change between versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Convention {
    #[serde(rename = "snake_case")]
    Snake,
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnake,
    #[serde(rename = "kebab-case")]
    Kebab,
    #[serde(rename = "camelCase")]
    Camel,
    #[serde(rename = "PascalCase")]
    Pascal,
    #[serde(rename = "Title Case")]
    Title,
    #[serde(rename = "lowercase")]
    Lower,
    #[serde(rename = "UPPERCASE")]
    Upper,
    /// Tokens found, but no single convention fits them.
    #[serde(rename = "mixed")]
    Mixed,
    /// Nothing to classify (empty, punctuation-only or caseless input).
    #[serde(rename = "unknown")]
    Unknown,
}

impl Convention {
    pub const ALL: [Convention; 10] = [
        Self::Snake,
        Self::ScreamingSnake,
        Self::Kebab,
        Self::Camel,
        Self::Pascal,
        Self::Title,
        Self::Lower,
        Self::Upper,
        Self::Mixed,
        Self::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snake => "snake_case",
            Self::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Self::Kebab => "kebab-case",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Title => "Title Case",
            Self::Lower => "lowercase",
            Self::Upper => "UPPERCASE",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown naming convention: {s}"))
    }
}
