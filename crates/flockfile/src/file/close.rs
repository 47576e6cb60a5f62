use super::LockedFile;
use crate::capability::Closer;
use crate::error::{FileLockError, Result};
use fs2::FileExt;
use std::io;
use std::os::unix::io::IntoRawFd;

impl Closer for LockedFile {
    /// Releases the lock, then the descriptor.
    ///
    /// An unlock failure is returned as [`FileLockError::Unlock`]; the
    /// descriptor is still released in that case, but a failure to do so is
    /// not reported. Otherwise a failing `close(2)` is returned as
    /// [`FileLockError::Close`].
    fn close(self) -> Result<()> {
        let fd = self.fd();
        let unlocked = FileExt::unlock(&self.file);
        let raw = self.file.into_raw_fd();

        if let Err(e) = unlocked {
            tracing::warn!(fd, error = %e, "unlock before close failed");
            // SAFETY: `raw` was detached from its `File`, so nobody else owns it.
            unsafe { libc::close(raw) };
            return Err(FileLockError::Unlock(e));
        }

        // SAFETY: as above.
        if unsafe { libc::close(raw) } != 0 {
            return Err(FileLockError::Close(io::Error::last_os_error()));
        }

        tracing::debug!(fd, "closed locked file");
        Ok(())
    }
}
