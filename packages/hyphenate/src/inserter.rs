//! Marker insertion at provider break points.

use crate::config::URI_SCHEME_DELIMITER;
use crate::error::Result;
use crate::provider::{BreakPointProvider, BreakPoints};
use crate::tokenizer::{tokenize, Granularity, TokenKind};

/// Inserts a marker character at every break point the provider reports.
pub struct HyphenationInserter<'p> {
    provider: &'p dyn BreakPointProvider,
    marker: char,
}

impl<'p> HyphenationInserter<'p> {
    #[must_use]
    pub fn new(provider: &'p dyn BreakPointProvider, marker: char) -> Self {
        Self { provider, marker }
    }

    #[must_use]
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Hyphenate a single whitespace-free word.
    ///
    /// Words containing `://` are returned unchanged. Punctuation inside the
    /// word is kept as is; only the runs of word characters between it are
    /// sent to the provider.
    ///
    /// # Errors
    /// Propagates provider failures unchanged.
    pub fn insert(&self, word: &str) -> Result<String> {
        if word.is_empty() || word.contains(URI_SCHEME_DELIMITER) {
            return Ok(word.to_string());
        }

        let mut out = String::with_capacity(word.len() + word.len() / 2);
        for token in tokenize(word, Granularity::WordChar) {
            match token.kind {
                TokenKind::Separator => out.push_str(token.text),
                TokenKind::Word => {
                    let points = self.provider.break_points(token.text)?;
                    push_with_markers(&mut out, token.text, &points, self.marker);
                }
            }
        }
        Ok(out)
    }

    /// Hyphenate every word of `text`, copying separators verbatim.
    ///
    /// # Errors
    /// Propagates provider failures unchanged.
    pub fn insert_text(&self, text: &str, granularity: Granularity) -> Result<String> {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        for token in tokenize(text, granularity) {
            if token.is_word() {
                out.push_str(&self.insert(token.text)?);
            } else {
                out.push_str(token.text);
            }
        }
        Ok(out)
    }
}

/// Insert `marker` at each offset of `points` in `word`.
///
/// Offsets count the markers already inserted to their left, so the
/// marker ends up at exactly that character position of the result.
///
/// # Examples
/// ```
/// use hyphenate::inserter::insert_markers;
/// use hyphenate::provider::BreakPoints;
///
/// let points = BreakPoints::new(vec![2, 6], "document").unwrap();
/// assert_eq!(insert_markers("document", &points, '§'), "do§cum§ent");
/// ```
#[must_use]
pub fn insert_markers(word: &str, points: &BreakPoints, marker: char) -> String {
    let mut out = String::with_capacity(word.len() + points.len() * marker.len_utf8());
    push_with_markers(&mut out, word, points, marker);
    out
}

fn push_with_markers(out: &mut String, word: &str, points: &BreakPoints, marker: char) {
    let mut offsets = points.as_slice().iter().peekable();
    // character position in the marked-up word
    let mut position = 0;
    for ch in word.chars() {
        if offsets.next_if_eq(&&position).is_some() {
            out.push(marker);
            position += 1;
        }
        out.push(ch);
        position += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HyphenateError;
    use crate::provider::fixed::FixedProvider;
    use pretty_assertions::assert_eq;

    fn provider() -> FixedProvider {
        FixedProvider::new([
            ("document", &[2, 6][..]),
            ("hyphenation", &[2, 7, 9][..]),
            ("well", &[][..]),
            ("known", &[2][..]),
            ("Übergröße", &[4, 7][..]),
        ])
    }

    #[test]
    fn test_insert_document_example() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '§');
        assert_eq!(inserter.insert("document").unwrap(), "do§cum§ent");
    }

    #[test]
    fn test_insert_markers_multibyte() {
        let points = BreakPoints::new(vec![4, 7], "Übergröße").unwrap();
        assert_eq!(insert_markers("Übergröße", &points, '-'), "Über-gr-öße");
    }

    #[test]
    fn test_markers_land_at_output_positions() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '§');
        let out = inserter.insert("hyphenation").unwrap();
        assert_eq!(out, "hy§phen§a§tion");
        let positions: Vec<_> = out
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == '§')
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions, [2, 7, 9]);
    }

    #[test]
    fn test_insert_url_unchanged() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '§');
        assert_eq!(
            inserter.insert("http://example.com/path").unwrap(),
            "http://example.com/path"
        );
    }

    #[test]
    fn test_insert_url_unchanged_even_when_provider_fails() {
        let provider = FixedProvider::failing();
        let inserter = HyphenationInserter::new(&provider, '§');
        assert_eq!(
            inserter.insert("https://document.org").unwrap(),
            "https://document.org"
        );
    }

    #[test]
    fn test_insert_empty_word() {
        let provider = FixedProvider::failing();
        let inserter = HyphenationInserter::new(&provider, '§');
        assert_eq!(inserter.insert("").unwrap(), "");
    }

    #[test]
    fn test_insert_no_break_points() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '§');
        assert_eq!(inserter.insert("well").unwrap(), "well");
        assert_eq!(inserter.insert("unlisted").unwrap(), "unlisted");
    }

    #[test]
    fn test_insert_skips_embedded_punctuation() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '§');
        assert_eq!(inserter.insert("well-known,").unwrap(), "well-kn§own,");
        assert_eq!(inserter.insert("(document)").unwrap(), "(do§cum§ent)");
    }

    #[test]
    fn test_insert_propagates_provider_failure() {
        let provider = FixedProvider::failing();
        let inserter = HyphenationInserter::new(&provider, '§');
        let err = inserter.insert("document").unwrap_err();
        assert!(matches!(err, HyphenateError::UnknownLanguage { .. }));
    }

    #[test]
    fn test_insert_rejects_out_of_range_offsets() {
        let provider = FixedProvider::new([("word", &[0, 2][..])]);
        let inserter = HyphenationInserter::new(&provider, '§');
        assert!(matches!(
            inserter.insert("word").unwrap_err(),
            HyphenateError::InvalidBreakPoint { offset: 0, .. }
        ));
    }

    #[test]
    fn test_marker_count_and_strip_back() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '\u{ad}');
        for word in ["document", "hyphenation", "well-known", "Übergröße", "x"] {
            let out = inserter.insert(word).unwrap();
            let expected: usize = tokenize(word, Granularity::WordChar)
                .filter(|t| t.is_word())
                .map(|t| provider.break_points(t.text).unwrap().len())
                .sum();
            assert_eq!(out.chars().filter(|&c| c == '\u{ad}').count(), expected);
            assert_eq!(out.replace('\u{ad}', ""), word);
        }
    }

    #[test]
    fn test_insert_text_preserves_separators() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '§');
        let text = "  A document,\tsee http://document.org  ";
        assert_eq!(
            inserter
                .insert_text(text, Granularity::Whitespace)
                .unwrap(),
            "  A do§cum§ent,\tsee http://document.org  "
        );
    }

    #[test]
    fn test_insert_text_word_char_granularity_loses_link_protection() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '§');
        assert_eq!(
            inserter
                .insert_text("http://document.org", Granularity::WordChar)
                .unwrap(),
            "http://do§cum§ent.org"
        );
    }

    #[test]
    fn test_second_pass_without_new_breaks_is_stable() {
        let provider = provider();
        let inserter = HyphenationInserter::new(&provider, '§');
        let once = inserter.insert_text("a document", Granularity::Whitespace).unwrap();
        let twice = inserter.insert_text(&once, Granularity::Whitespace).unwrap();
        assert_eq!(once, twice);
    }
}
