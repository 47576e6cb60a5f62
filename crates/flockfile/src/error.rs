use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileLockError {
    // Construction
    #[error("OPEN_FAILED: open path '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Stream operations
    #[error("READ_FAILED: read fd: {0}")]
    Read(#[source] io::Error),

    #[error("WRITE_FAILED: write fd: {0}")]
    Write(#[source] io::Error),

    #[error("SEEK_FAILED: seek fd: {0}")]
    Seek(#[source] io::Error),

    // Teardown
    #[error("UNLOCK_FAILED: unlock fd: {0}")]
    Unlock(#[source] io::Error),

    #[error("CLOSE_FAILED: close fd: {0}")]
    Close(#[source] io::Error),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },
}

impl FileLockError {
    /// The wrapped OS error, if this error originated from a system call
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            FileLockError::Open { source, .. } => Some(source),
            FileLockError::Read(e)
            | FileLockError::Write(e)
            | FileLockError::Seek(e)
            | FileLockError::Unlock(e)
            | FileLockError::Close(e) => Some(e),
            FileLockError::ConfigParse(_) | FileLockError::ConfigInvalidValue { .. } => None,
        }
    }

    /// Kind of the wrapped OS error; `InvalidInput` for config errors
    pub fn kind(&self) -> io::ErrorKind {
        self.io_error()
            .map(io::Error::kind)
            .unwrap_or(io::ErrorKind::InvalidInput)
    }

    /// Raw errno of the wrapped OS error
    pub fn raw_os_error(&self) -> Option<i32> {
        self.io_error().and_then(io::Error::raw_os_error)
    }
}

impl From<FileLockError> for io::Error {
    fn from(err: FileLockError) -> Self {
        io::Error::new(err.kind(), err)
    }
}

pub type Result<T> = std::result::Result<T, FileLockError>;
