//! Error types for hyphenation runs.
//!
//! Configuration errors (`UnknownLanguage`, `UnknownEncoding`) abort the whole
//! run; every other variant is scoped to the file being rewritten.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the hyphenate library.
#[derive(Debug, Error)]
pub enum HyphenateError {
    /// No hyphenation dictionary for the requested language.
    #[error("unknown language: {language} ({reason})")]
    UnknownLanguage { language: String, reason: String },

    /// Encoding label not recognised.
    #[error("unknown encoding: '{0}'")]
    UnknownEncoding(String),

    /// Open, read, write or rename failed.
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes could not be decoded or text could not be encoded.
    #[error("{} is not valid {encoding}: {message}", .path.display())]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
        message: String,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Element outside the capability table.
    #[error("Unsupported element <{tag}>{}", .context.as_ref().map(|c| format!(" in {c}")).unwrap_or_default())]
    UnsupportedMarkup {
        tag: String,
        context: Option<String>,
    },

    /// Break point provider returned an offset outside the word.
    #[error("invalid break point {offset} for word '{word}'")]
    InvalidBreakPoint { word: String, offset: usize },

    /// Some files of a run could not be processed.
    #[error("{failed} of {total} file(s) could not be hyphenated")]
    FilesFailed { failed: usize, total: usize },
}

impl HyphenateError {
    /// Whether the error invalidates the whole run rather than a single file.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnknownLanguage { .. } | Self::UnknownEncoding(_) | Self::InvalidBreakPoint { .. }
        )
    }
}

/// Result type alias for hyphenate operations.
pub type Result<T> = std::result::Result<T, HyphenateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_markup_with_context() {
        let err = HyphenateError::UnsupportedMarkup {
            tag: "script".to_string(),
            context: Some("<body>".to_string()),
        };
        assert_eq!(err.to_string(), "Unsupported element <script> in <body>");
    }

    #[test]
    fn test_unsupported_markup_without_context() {
        let err = HyphenateError::UnsupportedMarkup {
            tag: "script".to_string(),
            context: None,
        };
        assert_eq!(err.to_string(), "Unsupported element <script>");
    }

    #[test]
    fn test_unknown_language_display() {
        let err = HyphenateError::UnknownLanguage {
            language: "xx".to_string(),
            reason: "no dictionary".to_string(),
        };
        assert_eq!(err.to_string(), "unknown language: xx (no dictionary)");
    }

    #[test]
    fn test_file_access_names_path() {
        let err = HyphenateError::FileAccess {
            path: PathBuf::from("notes.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_is_fatal() {
        assert!(HyphenateError::UnknownEncoding("x".to_string()).is_fatal());
        assert!(!HyphenateError::MissingElement {
            element: "body".to_string(),
            context: "html".to_string(),
        }
        .is_fatal());
    }
}
