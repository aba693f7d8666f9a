//! Error types for ContactDB
//!
//! This module defines the error taxonomy shared by every crate in the
//! workspace. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! # Categories
//!
//! | Category | Variants | Effect |
//! |----------|----------|--------|
//! | Validation | `InvalidField`, `NameTooLong`, `InvalidPath` | Operation aborted, directory unchanged |
//! | Resource | `Allocation`, `Io` | Operation aborted, partial state released |
//! | Persisted data | `Parse`, `CorruptData` | Load aborted, no directory returned |
//! | Session | `AlreadyActive`, `NoActiveDirectory` | No state change |
//! | Setup | `Config` | Config file rejected |
//!
//! No error is fatal to the process.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ContactDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ContactDB
#[derive(Debug, Error)]
pub enum Error {
    /// A field is outside its allowed domain (phone, zip or name shape)
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Which field was rejected
        field: &'static str,
        /// Human-readable explanation
        reason: String,
    },

    /// Name exceeds the record's capacity under `NamePolicy::Reject`
    #[error("name too long: {len} bytes exceeds maximum of {max}")]
    NameTooLong {
        /// Length of the rejected name in bytes
        len: usize,
        /// Configured capacity in bytes
        max: usize,
    },

    /// Memory reservation failed
    #[error("allocation failed: {reason}")]
    Allocation {
        /// What was being allocated
        reason: String,
    },

    /// I/O error (file open, read or write)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed text file
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number where parsing failed
        line: usize,
        /// Human-readable explanation
        reason: String,
    },

    /// Malformed binary file
    #[error("corrupt data at byte {offset}: {reason}")]
    CorruptData {
        /// Byte offset where decoding failed
        offset: u64,
        /// Human-readable explanation
        reason: String,
    },

    /// File name cannot be used to derive a directory name or codec
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path
        path: PathBuf,
        /// Human-readable explanation
        reason: String,
    },

    /// A directory is already loaded in the session
    #[error("contacts log '{name}' is already active; clear it first")]
    AlreadyActive {
        /// Name of the active directory
        name: String,
    },

    /// No directory is loaded in the session
    #[error("no active contacts log; create or load one first")]
    NoActiveDirectory,

    /// Configuration file could not be read or is invalid
    #[error("config error: {reason}")]
    Config {
        /// Human-readable explanation
        reason: String,
    },
}

impl Error {
    /// Create an `InvalidField` error
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Create a `Parse` error
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Create a `CorruptData` error
    pub fn corrupt(offset: u64, reason: impl Into<String>) -> Self {
        Error::CorruptData {
            offset,
            reason: reason.into(),
        }
    }

    /// Create an `InvalidPath` error
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a `Config` error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Error::Allocation {
            reason: e.to_string(),
        }
    }
}
