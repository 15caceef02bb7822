//! Re-render identifiers in another naming convention.
//!
//! Conversion tokenizes the input first, so the source style does not
//! matter: `fooBar`, `FooBar`, `foo_bar` and `Foo Bar` all convert the same.

use strclean_model::{Convention, Token, Tokens};

use crate::tokenizer::tokenize;

/// Convert `input` to the `target` convention.
///
/// Returns `None` for [`Convention::Mixed`] and [`Convention::Unknown`],
/// which describe inputs rather than styles that can be produced.
///
/// # Examples
///
/// ```
/// use strclean_naming::{Convention, convert_case};
///
/// assert_eq!(convert_case("Title To Camel", Convention::Camel).as_deref(), Some("titleToCamel"));
/// assert_eq!(convert_case("parseHTTPResponse", Convention::Kebab).as_deref(), Some("parse-http-response"));
/// assert_eq!(convert_case("foo", Convention::Mixed), None);
/// ```
pub fn convert_case(input: &str, target: Convention) -> Option<String> {
    render(&tokenize(input), target)
}

fn render(tokens: &Tokens, target: Convention) -> Option<String> {
    let words = tokens.tokens();
    let rendered = match target {
        Convention::Snake => join(words, "_", str::to_lowercase),
        Convention::ScreamingSnake => join(words, "_", str::to_uppercase),
        Convention::Kebab => join(words, "-", str::to_lowercase),
        Convention::Pascal => join(words, "", capitalize),
        Convention::Title => join(words, " ", capitalize),
        Convention::Lower => join(words, "", str::to_lowercase),
        Convention::Upper => join(words, "", str::to_uppercase),
        Convention::Camel => camel(words),
        Convention::Mixed | Convention::Unknown => return None,
    };
    Some(rendered)
}

fn join(words: &[Token], separator: &str, transform: impl Fn(&str) -> String) -> String {
    words
        .iter()
        .map(|word| transform(word.text()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Lowercase up to and including the first letter-bearing token, then
/// capitalize, so a leading digit run never swallows the lowercase head.
fn camel(words: &[Token]) -> String {
    let mut out = String::new();
    let mut head_done = false;
    for word in words {
        if head_done {
            out.push_str(&capitalize(word.text()));
        } else {
            out.push_str(&word.text().to_lowercase());
            head_done = word.is_cased();
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// `fooBar`, `Foo Bar`, `FOO_BAR` → `foo_bar`.
pub fn to_snake_case(input: &str) -> String {
    render(&tokenize(input), Convention::Snake).unwrap_or_default()
}

/// `fooBar`, `foo_bar` → `FOO_BAR`.
pub fn to_screaming_snake_case(input: &str) -> String {
    render(&tokenize(input), Convention::ScreamingSnake).unwrap_or_default()
}

/// `fooBar`, `foo_bar` → `foo-bar`.
pub fn to_kebab_case(input: &str) -> String {
    render(&tokenize(input), Convention::Kebab).unwrap_or_default()
}

/// `foo_bar`, `Foo Bar` → `fooBar`.
pub fn to_camel_case(input: &str) -> String {
    render(&tokenize(input), Convention::Camel).unwrap_or_default()
}

/// `foo_bar`, `Foo Bar` → `FooBar`.
pub fn to_pascal_case(input: &str) -> String {
    render(&tokenize(input), Convention::Pascal).unwrap_or_default()
}

/// `foo_bar`, `fooBar` → `Foo Bar`.
pub fn to_title_case(input: &str) -> String {
    render(&tokenize(input), Convention::Title).unwrap_or_default()
}
