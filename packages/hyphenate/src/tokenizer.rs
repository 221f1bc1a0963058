//! Splitting text into alternating separator and word tokens.

use std::iter::FusedIterator;
use std::sync::LazyLock;

use regex::{Match, Matches, Regex};

/// Runs of non-word characters (Unicode-aware).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("valid regex"));

/// Runs of whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Characters between words; never hyphenated.
    Separator,
    /// A run of word characters.
    Word,
}

/// What counts as a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Split on whitespace only; punctuation stays inside words.
    #[default]
    Whitespace,
    /// Split on every non-word character.
    WordChar,
}

impl Granularity {
    fn separator_pattern(self) -> &'static Regex {
        match self {
            Self::Whitespace => &WHITESPACE_RUN,
            Self::WordChar => &NON_WORD_RUN,
        }
    }
}

/// A slice of the input classified as word or separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    pub kind: TokenKind,
    pub text: &'t str,
}

impl<'t> Token<'t> {
    #[must_use]
    pub fn separator(text: &'t str) -> Self {
        Self {
            kind: TokenKind::Separator,
            text,
        }
    }

    #[must_use]
    pub fn word(text: &'t str) -> Self {
        Self {
            kind: TokenKind::Word,
            text,
        }
    }

    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Lazy iterator over the tokens of a text.
///
/// Tokens alternate between separators and words and are never empty.
/// Concatenating their text yields the input unchanged.
#[derive(Debug)]
pub struct Tokens<'t> {
    text: &'t str,
    separators: Matches<'static, 't>,
    next_separator: Option<Match<'t>>,
    pos: usize,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        if self.next_separator.is_none() {
            self.next_separator = self.separators.next();
        }

        match self.next_separator {
            Some(sep) if sep.start() == self.pos => {
                self.next_separator = None;
                self.pos = sep.end();
                Some(Token::separator(sep.as_str()))
            }
            Some(sep) => {
                let word = &self.text[self.pos..sep.start()];
                self.pos = sep.start();
                Some(Token::word(word))
            }
            None => {
                let word = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Token::word(word))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Tokenize `text` at the given granularity.
///
/// # Examples
/// ```
/// use hyphenate::tokenizer::{tokenize, Granularity, TokenKind};
///
/// let tokens: Vec<_> = tokenize("e-mail me", Granularity::Whitespace).collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].text, "e-mail");
/// assert_eq!(tokens[1].kind, TokenKind::Separator);
/// ```
pub fn tokenize(text: &str, granularity: Granularity) -> Tokens<'_> {
    Tokens {
        text,
        separators: granularity.separator_pattern().find_iter(text),
        next_separator: None,
        pos: 0,
    }
}
