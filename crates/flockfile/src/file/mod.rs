//! Exclusively lockable file handle
//!
//! [`LockedFile`] wraps one open descriptor and lets the same handle be used
//! both as a POSIX advisory lock (`flock(2)`, exclusive mode only) and as a
//! seekable byte stream. Opening never locks; locking is an explicit, blocking
//! step.
//!
//! The lock belongs to the open file description, so two `LockedFile`s opened
//! on the same path exclude each other even inside one process, while
//! re-locking through the same handle is a no-op.

use crate::config::OpenConfig;
use crate::error::{FileLockError, Result};
use std::fs::{self, File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;

mod close;
mod lock;
mod stream;

pub use stream::Whence;


/// A file handle that is both a [`Locker`](crate::Locker) and a byte stream
///
/// No position or lock state is cached; every operation goes straight to the
/// descriptor. Methods are not synchronized: a `LockedFile` shared between
/// threads needs external mutual exclusion.
#[derive(Debug)]
pub struct LockedFile {
    file: File,
}

impl LockedFile {
    /// Opens `path` for reading and writing, creating it with mode `0700` if
    /// it does not exist. The lock is not taken.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use flockfile::{Closer, LockedFile, Locker};
    /// use std::io::Write;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut file = LockedFile::open("/tmp/t.lock")?;
    /// file.lock();
    /// file.write_all(b"ABC")?;
    /// file.unlock();
    /// file.close()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &OpenConfig::default())
    }

    /// Opens `path` with explicit [`OpenConfig`].
    pub fn open_with(path: impl AsRef<Path>, config: &OpenConfig) -> Result<Self> {
        let path = path.as_ref();
        config.validate()?;

        let open_err = |source| FileLockError::Open {
            path: path.to_path_buf(),
            source,
        };

        if config.create_parents {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(open_err)?;
            }
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .mode(config.mode)
            .open(path)
            .map_err(open_err)?;

        tracing::debug!(
            path = %path.display(),
            fd = file.as_raw_fd(),
            mode = config.mode,
            "opened locked file"
        );

        Ok(Self { file })
    }

    fn fd(&self) -> i32 {
        self.file.as_raw_fd()
    }
}
