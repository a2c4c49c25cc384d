//! Read and compare-then-write of the config file
//!
//! A [`Snapshot`] holds the bytes of one read. The file is never decoded,
//! so bytes outside the edited declaration survive exactly, UTF-8 or not.
//! Saving compares against the snapshot and skips the write when nothing
//! changed. The write itself runs under an exclusive `fd-lock`; the lock
//! does not cover the read that preceded it.

use crate::error::{TransformerError, TransformerResult};
use fd_lock::RwLock;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Contents of the config file as last read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl Snapshot {
    /// Read the file at `path`
    ///
    /// # Errors
    /// - `TransformerError::EmptyFile` if the file no longer exists
    /// - `TransformerError::ReadFailure` on any other IO error
    pub fn read(path: impl AsRef<Path>) -> TransformerResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                TransformerError::EmptyFile {
                    path: path.to_path_buf(),
                }
            } else {
                TransformerError::read_failure(path, source)
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// File path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes as read
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the file was empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write `new_bytes` back unless they equal the snapshot
    ///
    /// Returns `false` without touching the file when nothing changed. The
    /// full content is written in one pass while holding the lock.
    ///
    /// # Errors
    /// Returns `TransformerError::WriteFailure` if opening, locking or writing fails
    pub fn save(&self, new_bytes: &[u8]) -> TransformerResult<bool> {
        if new_bytes == self.bytes.as_slice() {
            tracing::debug!(path = %self.path.display(), "content unchanged, skipping write");
            return Ok(false);
        }

        let fail = |source| TransformerError::write_failure(&self.path, source);

        let file = OpenOptions::new().write(true).open(&self.path).map_err(fail)?;
        let mut lock = RwLock::new(file);
        let mut guard = lock.write().map_err(fail)?;
        guard.set_len(0).map_err(fail)?;
        guard.write_all(new_bytes).map_err(fail)?;
        guard.flush().map_err(fail)?;

        tracing::info!(
            path = %self.path.display(),
            bytes = new_bytes.len(),
            "config file written"
        );
        Ok(true)
    }
}
