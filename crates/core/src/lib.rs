//! Core types for ContactDB
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: error taxonomy shared by every crate
//! - ContactRecord, PhoneNumber, ZipCode: validated record types
//! - Limits, NamePolicy: table geometry and name capacity
//! - hash: djb2 bucket hashing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hash;
pub mod limits;
pub mod types;

pub use error::{Error, Result};
pub use hash::{bucket_index, djb2};
pub use limits::{FittedName, Limits, NamePolicy, DEFAULT_BUCKET_COUNT, DEFAULT_MAX_NAME_BYTES};
pub use types::{ContactRecord, PhoneNumber, ZipCode};
