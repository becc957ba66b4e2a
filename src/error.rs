//! .

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate error
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("old content {0:?} does not exist")]
    OldMissing(PathBuf),
    #[error("new content {0:?} does not exist")]
    NewMissing(PathBuf),
    #[error("writing delta to {path:?} failed: {source}")]
    Write {
        path: PathBuf,
        /// The serialized delta. Computation succeeded, only persisting it failed.
        payload: String,
        #[source]
        source: std::io::Error,
    },
    #[error("chunk size must be positive, got {0}")]
    InvalidChunkSize(usize),
    #[error("{path:?} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("delta task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Numeric result code of a `build` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum Signal {
    OldMissing = 1,
    NewMissing = 2,
    WriteFailed = 3,
    Success = 10,
    /// Anything outside the three documented outcomes.
    Failed = -1,
}

impl Signal {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Error {
    pub fn signal(&self) -> Signal {
        match self {
            Error::OldMissing(_) => Signal::OldMissing,
            Error::NewMissing(_) => Signal::NewMissing,
            Error::Write { .. } => Signal::WriteFailed,
            _ => Signal::Failed,
        }
    }
}
