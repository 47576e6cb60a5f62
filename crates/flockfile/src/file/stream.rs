//! Unbuffered byte-stream access
//!
//! Every call is a single `read(2)`, `write(2)` or `lseek(2)` on the
//! descriptor. Short reads and writes are returned as-is.

use super::LockedFile;
use crate::error::{FileLockError, Result};
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Origin of a seek
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// From byte 0 (`SEEK_SET`)
    Start,
    /// From the current position (`SEEK_CUR`)
    Current,
    /// From the end of the file (`SEEK_END`)
    End,
}

impl Whence {
    /// Combines an offset with this origin.
    ///
    /// A negative offset from [`Whence::Start`] is rejected here with
    /// `EINVAL`, the same error `lseek(2)` reports for a position before
    /// byte 0 from the other origins.
    pub fn seek_from(self, offset: i64) -> Result<SeekFrom> {
        match self {
            Whence::Start => u64::try_from(offset)
                .map(SeekFrom::Start)
                .map_err(|_| einval()),
            Whence::Current => Ok(SeekFrom::Current(offset)),
            Whence::End => Ok(SeekFrom::End(offset)),
        }
    }
}

impl TryFrom<i32> for Whence {
    type Error = FileLockError;

    /// Maps raw `SEEK_SET`/`SEEK_CUR`/`SEEK_END` values; anything else is an
    /// invalid origin.
    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            libc::SEEK_SET => Ok(Whence::Start),
            libc::SEEK_CUR => Ok(Whence::Current),
            libc::SEEK_END => Ok(Whence::End),
            _ => Err(einval()),
        }
    }
}

impl From<Whence> for i32 {
    fn from(whence: Whence) -> Self {
        match whence {
            Whence::Start => libc::SEEK_SET,
            Whence::Current => libc::SEEK_CUR,
            Whence::End => libc::SEEK_END,
        }
    }
}

fn einval() -> FileLockError {
    FileLockError::Seek(io::Error::from_raw_os_error(libc::EINVAL))
}

impl LockedFile {
    /// Reads into `buf` from the current position. Returns 0 at end of file.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        (&self.file).read(buf).map_err(FileLockError::Read)
    }

    /// Writes from `buf` at the current position; may write fewer bytes than
    /// `buf.len()`.
    pub fn write_from(&mut self, buf: &[u8]) -> Result<usize> {
        (&self.file).write(buf).map_err(FileLockError::Write)
    }

    /// Moves the position and returns it as an absolute offset from byte 0.
    pub fn seek_to(&mut self, offset: i64, whence: Whence) -> Result<u64> {
        let pos = whence.seek_from(offset)?;
        (&self.file).seek(pos).map_err(FileLockError::Seek)
    }
}

impl Read for LockedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf)?)
    }
}

impl Write for LockedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.write_from(buf)?)
    }

    // Nothing is buffered.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for LockedFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        (&self.file)
            .seek(pos)
            .map_err(|e| FileLockError::Seek(e).into())
    }
}
