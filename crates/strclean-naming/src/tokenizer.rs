//! Single-pass identifier tokenizer.

use strclean_model::{Separator, Token, Tokens};
use unicode_normalization::char::is_combining_mark;

/// Split `input` into word tokens and the separators between them.
///
/// A boundary occurs at every run of non-alphanumeric characters (consumed
/// and recorded as one explicit [`Separator`]) and at casing transitions:
/// lower to upper, the last capital of an acronym that runs into a
/// lowercase word (`HTTPServer`), and letter to digit or back. Leading and
/// trailing separators are dropped, so no token is ever empty.
///
/// Combining marks stay with the letter they follow, so decomposed (NFD)
/// and composed text split the same way.
///
/// # Examples
///
/// ```
/// use strclean_naming::{Separator, tokenize};
///
/// let tokens = tokenize("parseHTTP_response2");
/// let texts: Vec<&str> = tokens.texts().collect();
/// assert_eq!(texts, ["parse", "HTTP", "response", "2"]);
/// assert_eq!(
///     tokens.separators(),
///     [Separator::CaseChange, Separator::Underscore, Separator::DigitChange]
/// );
/// ```
pub fn tokenize(input: &str) -> Tokens {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Tokens::default();
    let mut current = String::new();
    // Boundary in front of `current`.
    let mut before: Option<Separator> = None;
    // Last character of `current` that is not a combining mark.
    let mut last_base: Option<char> = None;

    for (idx, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if is_combining_mark(ch) && !current.is_empty() {
                current.push(ch);
                continue;
            }
            flush(&mut current, &mut before, &mut tokens);
            last_base = None;

            let kind = Separator::from_char(ch);
            before = Some(match before {
                None => kind,
                Some(seen) if seen == kind => seen,
                Some(_) => Separator::Mixed,
            });
            continue;
        }

        if !current.is_empty()
            && !is_combining_mark(ch)
            && let Some(prev) = last_base
            && let Some(boundary) = implicit_boundary(prev, ch, next_base(&chars[idx + 1..]))
        {
            flush(&mut current, &mut before, &mut tokens);
            before = Some(boundary);
        }
        current.push(ch);
        if !is_combining_mark(ch) {
            last_base = Some(ch);
        }
    }
    flush(&mut current, &mut before, &mut tokens);

    tokens
}

fn flush(current: &mut String, before: &mut Option<Separator>, tokens: &mut Tokens) {
    if let Some(token) = Token::new(std::mem::take(current)) {
        tokens.push(before.take(), token);
    }
}

fn next_base(rest: &[char]) -> Option<char> {
    rest.iter().copied().find(|&c| !is_combining_mark(c))
}

/// Boundary between `prev` and `ch`, where `next` is the character after
/// `ch` (combining marks skipped).
fn implicit_boundary(prev: char, ch: char, next: Option<char>) -> Option<Separator> {
    if (prev.is_alphabetic() && ch.is_numeric()) || (prev.is_numeric() && ch.is_alphabetic()) {
        return Some(Separator::DigitChange);
    }
    if prev.is_lowercase() && ch.is_uppercase() {
        return Some(Separator::CaseChange);
    }
    if prev.is_uppercase() && ch.is_uppercase() && next.is_some_and(char::is_lowercase) {
        return Some(Separator::CaseChange);
    }
    None
}
