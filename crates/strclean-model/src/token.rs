//! Tokens, letter casing and separators.
//!
//! A [`Tokens`] value is what the tokenizer produces: an ordered list of
//! non-empty alphanumeric words and, between each adjacent pair, the
//! [`Separator`] that split them. The separator list is always exactly one
//! shorter than the token list.

use serde::Serialize;

/// Letter case of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    /// Every cased letter is lowercase (`foo`).
    Lower,
    /// Every cased letter is uppercase (`FOO`, `A`).
    Upper,
    /// First character uppercase, remaining cased letters lowercase (`Foo`).
    Capitalized,
    /// Any other mix of upper and lower letters.
    Mixed,
    /// No cased letter at all (digits, caseless scripts).
    Uncased,
}

impl Casing {
    /// Classify the casing of `text`.
    ///
    /// Titlecase letters such as `ǅ` count as uppercase.
    pub fn of(text: &str) -> Self {
        let mut cased = text.chars().filter(|&c| is_upper(c) || c.is_lowercase());

        let Some(first) = cased.next() else {
            return Self::Uncased;
        };
        let rest_lower = cased.clone().all(char::is_lowercase);
        let rest_upper = cased.all(is_upper);

        match (is_upper(first), rest_lower, rest_upper) {
            (false, true, _) => Self::Lower,
            (true, _, true) => Self::Upper,
            (true, true, false) if text.starts_with(first) => Self::Capitalized,
            _ => Self::Mixed,
        }
    }
}

/// Uppercase, or a titlecase letter (`ǅ`, `ǈ`, `ᾈ`): neither upper nor
/// lower, but changed by lowercasing.
fn is_upper(c: char) -> bool {
    c.is_uppercase() || (!c.is_lowercase() && c.to_lowercase().ne(std::iter::once(c)))
}

/// What separated two adjacent tokens in the original string.
///
/// The first three (plus [`Separator::Other`] and [`Separator::Mixed`]) are
/// explicit: characters that were consumed and are absent from every token.
/// [`Separator::CaseChange`] and [`Separator::DigitChange`] are implicit
/// boundaries with no separator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    Underscore,
    Hyphen,
    /// Any run of whitespace.
    Space,
    /// Lowercase to uppercase, or the end of an uppercase acronym
    /// (`HTTPServer` splits before `S`).
    CaseChange,
    /// Letter to digit or digit to letter.
    DigitChange,
    /// Some other non-alphanumeric character (`.`, `/`, `$`, ...).
    Other(char),
    /// A run of separator characters of more than one kind (`_-`).
    Mixed,
}

impl Separator {
    /// Explicit separator for a non-alphanumeric character.
    pub fn from_char(c: char) -> Self {
        match c {
            '_' => Self::Underscore,
            '-' => Self::Hyphen,
            c if c.is_whitespace() => Self::Space,
            c => Self::Other(c),
        }
    }

    /// Whether a separator character was consumed at this boundary.
    pub fn is_explicit(self) -> bool {
        !matches!(self, Self::CaseChange | Self::DigitChange)
    }
}

/// One semantic word of an identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    text: String,
    casing: Casing,
}

impl Token {
    /// Build a token, returning `None` for empty text.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        let casing = Casing::of(&text);
        Some(Self { text, casing })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn casing(&self) -> Casing {
        self.casing
    }

    /// True when the token has at least one cased letter.
    pub fn is_cased(&self) -> bool {
        self.casing != Casing::Uncased
    }

    /// Capitalized, or a lone capital letter such as the `A` in `A Tale`.
    pub fn is_capitalized(&self) -> bool {
        match self.casing {
            Casing::Capitalized => true,
            Casing::Upper => self.text.chars().filter(|&c| is_upper(c)).count() == 1,
            _ => false,
        }
    }

    fn joined(&self, next: &Token) -> Self {
        let text = format!("{}{}", self.text, next.text);
        let casing = Casing::of(&text);
        Self { text, casing }
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Tokenizer output: tokens plus the separator pattern between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokens {
    tokens: Vec<Token>,
    separators: Vec<Separator>,
}

impl Tokens {
    /// Append `token`, with `separator` as the boundary in front of it.
    ///
    /// The separator is dropped for the first token, the same way leading
    /// separators are. A later token pushed without a separator continues
    /// the previous token instead of starting a new one.
    pub fn push(&mut self, separator: Option<Separator>, token: Token) {
        if self.tokens.is_empty() {
            self.tokens.push(token);
            return;
        }
        match separator {
            Some(separator) => {
                self.separators.push(separator);
                self.tokens.push(token);
            }
            None => {
                if let Some(last) = self.tokens.last_mut() {
                    *last = last.joined(&token);
                }
            }
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(Token::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casing_of() {
        assert_eq!(Casing::of("foo"), Casing::Lower);
        assert_eq!(Casing::of("FOO"), Casing::Upper);
        assert_eq!(Casing::of("A"), Casing::Upper);
        assert_eq!(Casing::of("a"), Casing::Lower);
        assert_eq!(Casing::of("Foo"), Casing::Capitalized);
        assert_eq!(Casing::of("fOO"), Casing::Mixed);
        assert_eq!(Casing::of("FoO"), Casing::Mixed);
        assert_eq!(Casing::of("42"), Casing::Uncased);
        assert_eq!(Casing::of("Éclair"), Casing::Capitalized);
    }

    #[test]
    fn test_separator_from_char() {
        assert_eq!(Separator::from_char('_'), Separator::Underscore);
        assert_eq!(Separator::from_char('-'), Separator::Hyphen);
        assert_eq!(Separator::from_char('\t'), Separator::Space);
        assert_eq!(Separator::from_char('.'), Separator::Other('.'));
        assert!(Separator::Space.is_explicit());
        assert!(!Separator::CaseChange.is_explicit());
        assert!(!Separator::DigitChange.is_explicit());
    }

    #[test]
    fn test_token_rejects_empty() {
        assert!(Token::new("").is_none());
        let token = Token::new("Foo").unwrap();
        assert_eq!(token.text(), "Foo");
        assert!(token.is_capitalized());
    }

    #[test]
    fn test_single_capital_is_capitalized() {
        assert!(Token::new("A").unwrap().is_capitalized());
        assert!(!Token::new("AB").unwrap().is_capitalized());
        assert!(!Token::new("7").unwrap().is_capitalized());
    }

    #[test]
    fn test_titlecase_letters_count_as_upper() {
        assert_eq!(Casing::of("\u{01C5}emal"), Casing::Capitalized);
        assert_eq!(Casing::of("\u{01C8}"), Casing::Upper);
        assert_eq!(Casing::of("\u{01C5}EMAL"), Casing::Upper);
        assert_eq!(Casing::of("e\u{01C5}"), Casing::Mixed);
        assert!(Token::new("\u{01CB}").unwrap().is_capitalized());
    }

    #[test]
    fn test_push_keeps_one_separator_between_tokens() {
        let mut tokens = Tokens::default();
        tokens.push(Some(Separator::Underscore), Token::new("foo").unwrap());
        tokens.push(Some(Separator::Hyphen), Token::new("bar").unwrap());

        assert_eq!(tokens.texts().collect::<Vec<_>>(), ["foo", "bar"]);
        assert_eq!(tokens.separators(), [Separator::Hyphen]);
    }

    #[test]
    fn test_push_without_separator_continues_previous_token() {
        let mut tokens = Tokens::default();
        tokens.push(None, Token::new("foo").unwrap());
        tokens.push(None, Token::new("Bar").unwrap());

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.tokens()[0].text(), "fooBar");
        assert_eq!(tokens.tokens()[0].casing(), Casing::Mixed);
        assert!(tokens.separators().is_empty());
    }
}
