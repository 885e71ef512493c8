//! Atomic I/O operations and advisory lock files

use std::fs::{self, File, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file.
///
/// Uses a write-to-temp-then-rename strategy so that readers observe
/// either the previous content or the new content, never a truncated file.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    // Temp file lives in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let written = (|| {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(content)?;
        temp_file.sync_all()
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    fs::rename(&temp_path, &native_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(&native_path, e)
    })?;

    tracing::trace!(path = %path, bytes = content.len(), "atomic write complete");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// An exclusive advisory lock held on a sidecar lock file.
///
/// The lock is released when the guard is dropped, on every exit path.
/// The lock file itself is left in place; deleting it would let a second
/// process lock a fresh inode while the first still holds the old one.
#[derive(Debug)]
pub struct LockGuard {
    file: File,
    path: NormalizedPath,
}

impl LockGuard {
    /// Acquire an exclusive lock for `target`, blocking until available.
    ///
    /// The lock file is `.<file name>.lock` beside `target`.
    pub fn acquire(target: &NormalizedPath) -> Result<Self> {
        let path = lock_path_for(target);
        let native = path.to_native();

        if let Some(parent) = native.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&native)
            .map_err(|e| Error::io(&native, e))?;

        FileExt::lock_exclusive(&file)
            .map_err(|_| Error::LockFailed { path: native.clone() })?;

        tracing::debug!(lock = %path, "acquired lock");
        Ok(Self { file, path })
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(lock = %self.path, error = %e, "failed to release lock");
        }
    }
}

/// Sidecar lock file path for `target`.
pub fn lock_path_for(target: &NormalizedPath) -> NormalizedPath {
    let name = target.file_name().unwrap_or("ledger");
    let lock_name = format!(".{name}.lock");
    match target.parent() {
        Some(parent) => parent.join(lock_name),
        None => NormalizedPath::new(lock_name),
    }
}
