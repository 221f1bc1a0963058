//! Atomic in-place file rewriting.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use tempfile::{Builder, NamedTempFile};

use super::encoding::{decode, encode};
use super::transform::Transform;
use crate::error::{HyphenateError, Result};

/// Prefix of the temporary file created next to the target.
const TEMP_PREFIX: &str = ".hyphenate-";

/// Rewrites files through a temporary sibling and an atomic rename.
///
/// Readers of the target see either the old or the new contents. On every
/// failure the temporary file is removed and the target is left as it was.
#[derive(Debug, Clone, Copy)]
pub struct AtomicFileRewriter {
    encoding: &'static Encoding,
}

impl AtomicFileRewriter {
    #[must_use]
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// Read `path`, run `transform` on its contents and replace the file
    /// with the result.
    ///
    /// Symlinks are followed: the file they point to is replaced and the
    /// link is kept.
    ///
    /// # Errors
    /// Returns `FileAccess` for I/O failures, `Encoding` for contents that do
    /// not decode or encode, and whatever `transform` fails with.
    pub fn rewrite(&self, path: &Path, transform: &dyn Transform) -> Result<()> {
        let bytes = fs::read(path).map_err(|source| file_access(path, source))?;
        let input = decode(&bytes, self.encoding, path)?;

        let target = fs::canonicalize(path).map_err(|source| file_access(path, source))?;
        let dir = target.parent().unwrap_or_else(|| Path::new("."));

        // Dropping the temp file on any early return deletes it
        let mut temp = Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|source| file_access(dir, source))?;

        let output = transform.apply(&input)?;
        let encoded = encode(&output, self.encoding, path)?;

        write_contents(&mut temp, &encoded, &target).map_err(|source| file_access(path, source))?;

        temp.persist(&target)
            .map_err(|err| file_access(path, err.error))?;

        tracing::debug!(
            path = %path.display(),
            bytes_in = bytes.len(),
            bytes_out = encoded.len(),
            "rewrote file"
        );
        Ok(())
    }
}

fn write_contents(temp: &mut NamedTempFile, contents: &[u8], original: &Path) -> std::io::Result<()> {
    temp.write_all(contents)?;
    temp.flush()?;
    let permissions = fs::metadata(original)?.permissions();
    temp.as_file().set_permissions(permissions)?;
    temp.as_file().sync_all()
}

fn file_access(path: &Path, source: std::io::Error) -> HyphenateError {
    HyphenateError::FileAccess {
        path: PathBuf::from(path),
        source,
    }
}
