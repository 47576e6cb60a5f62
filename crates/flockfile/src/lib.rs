//! Exclusive advisory file locks that are also byte streams
//!
//! A [`LockedFile`] is opened (and created if needed) on a path, then locked
//! and unlocked explicitly through [`Locker`], read/written/seeked through
//! `std::io`, and finally released through [`Closer`].
//!
//! Lock and unlock failures outside `close` are treated as broken invariants
//! and panic; every other failure is returned as a [`FileLockError`].
//!
//! ```no_run
//! use flockfile::{Closer, LockedFile, Locker, Whence};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut file = LockedFile::open("/tmp/t.lock")?;
//! file.lock();
//! file.write_from(&[0x41, 0x42, 0x43])?;
//! file.seek_to(0, Whence::Start)?;
//! let mut buf = [0u8; 3];
//! assert_eq!(file.read_into(&mut buf)?, 3);
//! file.unlock();
//! file.close()?;
//! # Ok(())
//! # }
//! ```

#[cfg(not(unix))]
compile_error!("flockfile only supports POSIX advisory locks (unix targets)");

pub mod capability;
pub mod config;
pub mod error;
mod file;
mod guard;

pub use capability::{Closer, LockedStream, Locker};
pub use config::OpenConfig;
pub use error::{FileLockError, Result};
pub use file::{LockedFile, Whence};
pub use guard::LockGuard;
