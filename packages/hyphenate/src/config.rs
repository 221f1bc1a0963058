//! Configuration constants and the run configuration.

use encoding_rs::Encoding;

use crate::error::{HyphenateError, Result};
use crate::tokenizer::Granularity;

/// Marker inserted at every break point (U+00AD SOFT HYPHEN).
pub const SOFT_HYPHEN: char = '\u{ad}';

/// Language used when none is given on the command line.
pub const DEFAULT_LANGUAGE: &str = "en-gb";

/// Encoding used when none is given on the command line.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Words containing this delimiter are treated as links and never hyphenated.
pub const URI_SCHEME_DELIMITER: &str = "://";

/// Local name of the content element in markup documents.
pub const CONTENT_ROOT: &str = "body";

/// How a file is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Line-oriented plain text.
    #[default]
    Text,
    /// XHTML-style markup.
    Markup,
}

/// Normalize a language tag to the lowercase, dash-separated form used by
/// the dictionaries.
///
/// Locale suffixes such as `.UTF-8` and `@euro` are dropped.
///
/// # Examples
/// ```
/// use hyphenate::config::normalize_language;
///
/// assert_eq!(normalize_language("en_GB.UTF-8"), "en-gb");
/// assert_eq!(normalize_language("de-1996"), "de-1996");
/// assert_eq!(normalize_language("nl_NL@euro"), "nl-nl");
/// ```
pub fn normalize_language(language: &str) -> String {
    let base = language
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    base.replace('_', "-").to_lowercase()
}

/// Resolve an encoding label (`utf-8`, `latin1`, `windows-1252`, ...).
///
/// # Errors
/// Returns `HyphenateError::UnknownEncoding` if the label is not recognised.
///
/// # Examples
/// ```
/// use hyphenate::config::resolve_encoding;
///
/// assert_eq!(resolve_encoding("UTF-8").unwrap().name(), "UTF-8");
/// assert!(resolve_encoding("klingon").is_err());
/// ```
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| HyphenateError::UnknownEncoding(label.to_string()))
}

/// Immutable settings for one run, built once at start-up.
#[derive(Debug, Clone)]
pub struct HyphenateConfig {
    /// Normalized language tag.
    pub language: String,
    /// Encoding used to read and write every file.
    pub encoding: &'static Encoding,
    /// How files are interpreted.
    pub mode: Mode,
    /// Line split used in text mode.
    pub granularity: Granularity,
    /// Character inserted at break points.
    pub marker: char,
}

impl HyphenateConfig {
    /// Build a configuration from a language tag and an encoding label.
    ///
    /// # Errors
    /// Returns `HyphenateError::UnknownEncoding` for unrecognised labels.
    pub fn new(language: &str, encoding: &str) -> Result<Self> {
        Ok(Self {
            language: normalize_language(language),
            encoding: resolve_encoding(encoding)?,
            mode: Mode::default(),
            granularity: Granularity::Whitespace,
            marker: SOFT_HYPHEN,
        })
    }

    /// Set the file mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the line split granularity for text mode.
    #[must_use]
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Use a different marker character.
    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }
}

impl Default for HyphenateConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            encoding: encoding_rs::UTF_8,
            mode: Mode::default(),
            granularity: Granularity::Whitespace,
            marker: SOFT_HYPHEN,
        }
    }
}
