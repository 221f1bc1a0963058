//! Hyphenate - insert soft hyphens into text and XHTML files.
//!
//! This crate finds language-specific break points inside words and marks
//! them with U+00AD SOFT HYPHEN, so renderers can wrap long words without
//! showing a hyphen unless the break is taken. Files are rewritten in place
//! through a temporary file and an atomic rename.
//!
//! # Example
//!
//! ```
//! use hyphenate::tokenizer::{tokenize, Granularity};
//!
//! let text = "Long words, short lines.";
//! let words: Vec<_> = tokenize(text, Granularity::WordChar)
//!     .filter(|t| t.is_word())
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, ["Long", "words", "short", "lines"]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, language and encoding resolution
//! - [`error`]: Error types and Result alias
//! - [`tokenizer`]: Word/separator tokenization
//! - [`provider`]: Break point providers
//! - [`inserter`]: Marker insertion
//! - [`markup`]: Capability table, content tree and walker
//! - [`xml`]: XML utilities
//! - [`rewrite`]: Atomic file rewriting and transforms
//! - [`hyphenator`]: Per-run service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod hyphenator;
pub mod inserter;
pub mod markup;
pub mod provider;
pub mod rewrite;
pub mod tokenizer;
pub mod xml;

// Re-export commonly used items
pub use config::{HyphenateConfig, Mode, SOFT_HYPHEN};
pub use error::{HyphenateError, Result};
pub use hyphenator::{Hyphenator, RunSummary};
pub use inserter::HyphenationInserter;
pub use provider::{provider_for, BreakPointProvider, BreakPoints};
