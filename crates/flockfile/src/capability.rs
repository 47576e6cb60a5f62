//! Capability traits implemented by [`LockedFile`](crate::LockedFile)
//!
//! Reading, writing and seeking use the standard `std::io::{Read, Write, Seek}`
//! traits. Locking and closing have no std counterpart and are defined here, so
//! that code which only needs "something lockable" or "something closable" can
//! accept any implementor.

use crate::error::Result;
use crate::guard::LockGuard;
use std::io::{Read, Seek, Write};

/// A mutual-exclusion primitive
///
/// Both methods are infallible from the caller's point of view: an
/// implementation that cannot acquire or release the lock panics.
pub trait Locker {
    /// Blocks until the lock is held.
    fn lock(&self);

    fn unlock(&self);

    /// Locks and returns a guard that unlocks when dropped.
    ///
    /// The guard borrows `self` mutably and dereferences to it, so the
    /// protected work can use the same value.
    fn lock_guard(&mut self) -> LockGuard<'_, Self>
    where
        Self: Sized,
    {
        LockGuard::new(self)
    }
}

/// A resource that is released explicitly and reports release failures
///
/// `close` consumes the value, so it can be called at most once.
pub trait Closer {
    fn close(self) -> Result<()>;
}

/// Everything a locked byte stream offers
pub trait LockedStream: Locker + Read + Write + Seek + Closer {}

impl<T: Locker + Read + Write + Seek + Closer> LockedStream for T {}
