//! Combined per-name report.

use serde::Serialize;
use strclean_model::Convention;

use crate::acronym::contains_acronym;
use crate::classifier::classify;
use crate::tokenizer::tokenize;

/// Everything the crate can tell about one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameReport {
    /// The name as given.
    pub input: String,
    pub convention: Convention,
    /// Token texts in order.
    pub tokens: Vec<String>,
    pub contains_acronym: bool,
}

/// Tokenize, classify and acronym-check `name` in one call.
pub fn check_name(name: &str) -> NameReport {
    let tokens = tokenize(name);
    NameReport {
        input: name.to_string(),
        convention: classify(tokens.tokens(), tokens.separators()),
        tokens: tokens.texts().map(str::to_string).collect(),
        contains_acronym: contains_acronym(name),
    }
}
