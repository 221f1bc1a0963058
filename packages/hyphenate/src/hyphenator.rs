//! Main service that ties provider, transforms and rewriter together.

use std::path::{Path, PathBuf};

use crate::config::{HyphenateConfig, Mode};
use crate::error::{HyphenateError, Result};
use crate::inserter::HyphenationInserter;
use crate::markup::{create_xhtml_table, CapabilityTable};
use crate::provider::{provider_for, BreakPointProvider};
use crate::rewrite::{AtomicFileRewriter, MarkupTransform, TextTransform};

/// Outcome of a run over several files.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files rewritten successfully.
    pub rewritten: Vec<PathBuf>,
    /// Files left untouched, with the reason.
    pub failed: Vec<(PathBuf, HyphenateError)>,
}

impl RunSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.rewritten.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Hyphenates files according to a fixed configuration.
///
/// The provider is loaded once and reused for every file.
pub struct Hyphenator {
    config: HyphenateConfig,
    provider: Box<dyn BreakPointProvider>,
    table: CapabilityTable,
}

impl Hyphenator {
    /// Load the provider for the configured language.
    ///
    /// # Errors
    /// Returns `UnknownLanguage` if there is no dictionary for the language.
    pub fn new(config: HyphenateConfig) -> Result<Self> {
        let provider = provider_for(&config.language)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Use an already constructed provider.
    #[must_use]
    pub fn with_provider(config: HyphenateConfig, provider: Box<dyn BreakPointProvider>) -> Self {
        Self {
            config,
            provider,
            table: create_xhtml_table(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HyphenateConfig {
        &self.config
    }

    /// Hyphenate one file in place.
    ///
    /// # Errors
    /// Any error leaves the file unmodified.
    pub fn hyphenate_file(&self, path: &Path) -> Result<()> {
        let inserter = HyphenationInserter::new(&*self.provider, self.config.marker);
        let rewriter = AtomicFileRewriter::new(self.config.encoding);

        match self.config.mode {
            Mode::Text => {
                let transform = TextTransform::new(&inserter, self.config.granularity);
                rewriter.rewrite(path, &transform)
            }
            Mode::Markup => {
                let transform = MarkupTransform::new(&inserter, &self.table);
                rewriter.rewrite(path, &transform)
            }
        }
    }

    /// Hyphenate files in order.
    ///
    /// Per-file errors are recorded in the summary and the next file is
    /// attempted. `on_file` is called after each file with its error, if any.
    ///
    /// # Errors
    /// Stops at the first fatal error (see `HyphenateError::is_fatal`).
    pub fn hyphenate_files<P, F>(&self, paths: &[P], mut on_file: F) -> Result<RunSummary>
    where
        P: AsRef<Path>,
        F: FnMut(&Path, Option<&HyphenateError>),
    {
        let mut summary = RunSummary::default();

        for path in paths {
            let path = path.as_ref();
            match self.hyphenate_file(path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "hyphenated");
                    on_file(path, None);
                    summary.rewritten.push(path.to_path_buf());
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping file");
                    on_file(path, Some(&err));
                    summary.failed.push((path.to_path_buf(), err));
                }
            }
        }

        Ok(summary)
    }
}
