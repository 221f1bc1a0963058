//! Command-line interface for hyphenate.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{HyphenateConfig, Mode, DEFAULT_ENCODING, DEFAULT_LANGUAGE};
use crate::error::{HyphenateError, Result};
use crate::hyphenator::Hyphenator;
use crate::tokenizer::Granularity;

/// Hyphenate - insert soft hyphens into text files, in place.
#[derive(Debug, Parser)]
#[command(name = "hyphenate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Character encoding used to read and write the files
    #[arg(short, long, default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    /// Language to look up the hyphenation rules for (e.g. en-gb, de-1996, nl)
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Treat the files as plain text files (default)
    #[arg(short, long, conflicts_with = "markup")]
    pub text: bool,

    /// Treat the files as XHTML documents
    #[arg(short, long)]
    pub markup: bool,

    /// In text mode, also split lines on punctuation (links are no longer protected)
    #[arg(long)]
    pub split_punctuation: bool,

    /// Files to hyphenate in place
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Build the run configuration from the parsed arguments.
    ///
    /// # Errors
    /// Returns `UnknownEncoding` for an unrecognised encoding label.
    pub fn to_config(&self) -> Result<HyphenateConfig> {
        let mode = if self.markup { Mode::Markup } else { Mode::Text };
        let granularity = if self.split_punctuation {
            Granularity::WordChar
        } else {
            Granularity::Whitespace
        };
        Ok(HyphenateConfig::new(&self.language, &self.encoding)?
            .with_mode(mode)
            .with_granularity(granularity))
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config()?;

    // Fails before any file is opened when the language is unknown
    let hyphenator = Hyphenator::new(config)?;

    hyphenate_command(&hyphenator, &cli.files)
}

/// Execute the hyphenation over all files.
fn hyphenate_command(hyphenator: &Hyphenator, files: &[PathBuf]) -> Result<()> {
    let config = hyphenator.config();
    println!(
        "{} {} file(s) with {} rules, {}",
        style("Hyphenating").bold(),
        files.len(),
        style(&config.language).cyan(),
        style(config.encoding.name()).green()
    );

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let result = hyphenator.hyphenate_files(files, |path, err| {
        if let Some(err) = err {
            pb.suspend(|| eprintln!("  {} {err}", style("skipped").yellow()));
        }
        pb.set_message(path.display().to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    let summary = result?;

    println!(
        "{} {} file(s)",
        style("Hyphenated").green().bold(),
        summary.rewritten.len()
    );

    if summary.is_success() {
        Ok(())
    } else {
        Err(HyphenateError::FilesFailed {
            failed: summary.failed.len(),
            total: summary.total(),
        })
    }
}
