//! Error types for path and identity resolution.

use thiserror::Error;

/// Broad category of a [`LocateError`], for matching without formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    LookupFailure,
}

#[derive(Debug, Error)]
pub enum LocateError {
    /// The caller passed an unusable argument (empty home directory, bad uid).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A user, group, or directory does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The user/group database could not be queried.
    #[error("lookup failed: {0}")]
    LookupFailure(String),
}

impl LocateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LocateError::InvalidInput(_) => ErrorKind::InvalidInput,
            LocateError::NotFound(_) => ErrorKind::NotFound,
            LocateError::LookupFailure(_) => ErrorKind::LookupFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocateError>;
