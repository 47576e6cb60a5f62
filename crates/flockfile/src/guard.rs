//! RAII guard for a held lock

use crate::capability::Locker;
use std::ops::{Deref, DerefMut};

/// Guard for a held lock
///
/// Created by [`Locker::lock_guard`]. The lock is released when the guard is
/// dropped, including on early return or unwinding.
#[derive(Debug)]
pub struct LockGuard<'a, L: Locker> {
    inner: &'a mut L,
}

impl<'a, L: Locker> LockGuard<'a, L> {
    pub(crate) fn new(inner: &'a mut L) -> Self {
        inner.lock();
        Self { inner }
    }
}

impl<L: Locker> Deref for LockGuard<'_, L> {
    type Target = L;

    fn deref(&self) -> &L {
        self.inner
    }
}

impl<L: Locker> DerefMut for LockGuard<'_, L> {
    fn deref_mut(&mut self) -> &mut L {
        self.inner
    }
}

impl<L: Locker> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        self.inner.unlock();
    }
}
