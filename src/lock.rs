//! Run locking
//!
//! The gallery-dl configuration file is per-user shared state; two fetcher
//! runs writing it concurrently would interleave. An exclusive file lock
//! keeps runs strictly sequential.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{Error, Result};

/// Lock guard that ensures exclusive access for one fetcher run.
pub struct RunLock {
    lock_file: Option<File>,
    path: PathBuf,
}

impl RunLock {
    /// Acquire an exclusive lock, failing fast if another run holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Error::LockError(format!("Failed to open lock file: {}", e)))?;

        match lock_file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                lock_file: Some(lock_file),
                path: path.to_path_buf(),
            }),
            Err(_) => {
                eprintln!(
                    "Another fetcher run is already in progress.\n\
                     The downloader configuration file is shared between runs, \
                     so only one download can be prepared at a time.\n\
                     Wait for the other run to finish and try again."
                );
                Err(Error::AlreadyRunning)
            }
        }
    }

    /// Release the lock manually
    pub fn release(&mut self) {
        if let Some(ref file) = self.lock_file {
            let _ = fs2::FileExt::unlock(file);
        }
        self.lock_file = None;
        let _ = std::fs::remove_file(&self.path);
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        self.release();
    }
}
