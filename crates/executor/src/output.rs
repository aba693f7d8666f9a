//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant.

use std::path::PathBuf;

use contactdb_core::ContactRecord;
use serde::{Deserialize, Serialize};

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// A new empty log is active
    Created {
        /// Log name
        name: String,
    },

    /// Name of the active log
    LogName(String),

    /// A contact was stored
    Added {
        /// Record count after the insert
        size: usize,
    },

    /// Lookup result; `phone` is `None` when no contact matched
    Phone {
        /// Name that was looked up
        name: String,
        /// Phone number of the first match
        phone: Option<u64>,
    },

    /// The active log was released
    Cleared {
        /// Log name
        name: String,
        /// Number of records released
        released: usize,
    },

    /// All contacts of the active log
    Contacts {
        /// Log name
        name: String,
        /// Records in bucket order, then chain order
        records: Vec<ContactRecord>,
    },

    /// A file was written
    Written {
        /// Path written
        path: PathBuf,
    },

    /// A file was loaded and is now the active log
    Loaded {
        /// Log name derived from the file name
        name: String,
        /// Records loaded
        records: usize,
        /// Codec that read the file, `"text"` or `"binary"`
        format: String,
    },
}
