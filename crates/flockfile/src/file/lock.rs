use super::LockedFile;
use crate::capability::Locker;
use fs2::FileExt;
use std::io;

impl Locker for LockedFile {
    /// Takes the exclusive `flock(2)` lock, blocking while another open file
    /// description holds it.
    ///
    /// # Panics
    ///
    /// Panics if the lock primitive fails for any reason other than an
    /// interrupted wait (e.g. `EBADF`, `ENOLCK`, `EOPNOTSUPP`).
    fn lock(&self) {
        loop {
            match FileExt::lock_exclusive(&self.file) {
                Ok(()) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => fatal("lock", self.fd(), e),
            }
        }
        tracing::debug!(fd = self.fd(), "acquired exclusive lock");
    }

    /// Releases the lock. Releasing a lock that is not held is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the unlock primitive fails.
    fn unlock(&self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            fatal("unlock", self.fd(), e);
        }
        tracing::debug!(fd = self.fd(), "released exclusive lock");
    }
}

#[cold]
fn fatal(op: &str, fd: i32, err: io::Error) -> ! {
    tracing::error!(fd, error = %err, "{} failed on locked file", op);
    panic!("{} fd {}: {}", op, fd, err);
}
