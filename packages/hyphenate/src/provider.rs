//! Break point providers.
//!
//! A provider answers one question: at which character offsets may a word
//! be broken? The pattern lookup itself lives in the `hyphenation` crate;
//! this module adapts it and validates what comes back.

use std::fmt;

use hyphenation::{Hyphenator, Language, Load, Standard};

use crate::config::normalize_language;
use crate::error::{HyphenateError, Result};

/// Character offsets where a word may be broken, in output coordinates.
///
/// The offsets are positions in the marked-up word: the `i`-th offset counts
/// the `i` markers inserted before it. For `"document"` broken as
/// `do-cum-ent` the offsets are `{2, 6}`. Use [`BreakPoints::from_word_offsets`]
/// to build them from plain offsets into the unmarked word.
///
/// Every break lies strictly inside the word (never at its start or end)
/// and no two breaks share a position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakPoints(Vec<usize>);

impl BreakPoints {
    /// Validate provider output against the word it was computed for.
    ///
    /// # Errors
    /// Returns `HyphenateError::InvalidBreakPoint` for an offset that, once
    /// the preceding markers are discounted, is zero, not before the end of
    /// the word, or not past the previous break.
    pub fn new(offsets: Vec<usize>, word: &str) -> Result<Self> {
        let len = word.chars().count();
        let mut previous = 0;
        for (index, &offset) in offsets.iter().enumerate() {
            let position = offset.checked_sub(index).unwrap_or(0);
            if position == 0 || position >= len || position <= previous {
                return Err(HyphenateError::InvalidBreakPoint {
                    word: word.to_string(),
                    offset,
                });
            }
            previous = position;
        }
        Ok(Self(offsets))
    }

    /// Build from character offsets into the unmarked word.
    ///
    /// # Errors
    /// Same as [`BreakPoints::new`].
    pub fn from_word_offsets(offsets: &[usize], word: &str) -> Result<Self> {
        let shifted = offsets
            .iter()
            .enumerate()
            .map(|(index, &offset)| offset + index)
            .collect();
        Self::new(shifted, word)
    }

    /// No break points.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Source of legal break offsets for one language.
pub trait BreakPointProvider {
    /// Normalized language tag this provider serves.
    fn language(&self) -> &str;

    /// Break points for a single word without separators.
    ///
    /// # Errors
    /// Fails when the provider's data is unavailable or returns offsets that
    /// violate the `BreakPoints` invariant.
    fn break_points(&self, word: &str) -> Result<BreakPoints>;
}

/// Provider backed by the embedded Knuth-Liang pattern dictionaries.
pub struct PatternProvider {
    language: String,
    dictionary: Standard,
}

impl fmt::Debug for PatternProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternProvider")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl PatternProvider {
    /// Load the dictionary for `language`.
    ///
    /// Tags are normalized first (`en_GB.UTF-8` becomes `en-gb`). When the
    /// full tag has no dictionary the primary subtag is tried (`nl-nl` falls
    /// back to `nl`).
    ///
    /// # Errors
    /// Returns `HyphenateError::UnknownLanguage` when no dictionary matches or
    /// the embedded data cannot be loaded.
    pub fn load(language: &str) -> Result<Self> {
        let normalized = normalize_language(language);
        let lang = lookup_language(&normalized).ok_or_else(|| HyphenateError::UnknownLanguage {
            language: language.to_string(),
            reason: "no hyphenation dictionary for this language".to_string(),
        })?;

        let dictionary =
            Standard::from_embedded(lang).map_err(|e| HyphenateError::UnknownLanguage {
                language: language.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(language = %lang.code(), "loaded hyphenation dictionary");

        Ok(Self {
            language: lang.code().to_string(),
            dictionary,
        })
    }
}

impl BreakPointProvider for PatternProvider {
    fn language(&self) -> &str {
        &self.language
    }

    fn break_points(&self, word: &str) -> Result<BreakPoints> {
        let hyphenated = self.dictionary.hyphenate(word);
        let offsets = byte_to_char_offsets(word, &hyphenated.breaks)?;
        BreakPoints::from_word_offsets(&offsets, word)
    }
}

/// Resolve a provider for `language`.
///
/// # Errors
/// Returns `HyphenateError::UnknownLanguage` if no dictionary is available.
pub fn provider_for(language: &str) -> Result<Box<dyn BreakPointProvider>> {
    Ok(Box::new(PatternProvider::load(language)?))
}

fn lookup_language(normalized: &str) -> Option<Language> {
    if normalized.is_empty() {
        return None;
    }
    Language::try_from_code(normalized).or_else(|| {
        let (primary, _) = normalized.split_once('-')?;
        Language::try_from_code(primary)
    })
}

/// Map byte indices reported by the dictionary to character offsets.
fn byte_to_char_offsets(word: &str, byte_breaks: &[usize]) -> Result<Vec<usize>> {
    byte_breaks
        .iter()
        .map(|&byte| {
            if word.is_char_boundary(byte) {
                Ok(word[..byte].chars().count())
            } else {
                Err(HyphenateError::InvalidBreakPoint {
                    word: word.to_string(),
                    offset: byte,
                })
            }
        })
        .collect()
}
