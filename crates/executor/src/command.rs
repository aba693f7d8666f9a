//! Command enum defining all session operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A self-contained, serializable session operation.
///
/// # Command Categories
///
/// | Category | Commands | Requires |
/// |----------|----------|----------|
/// | Lifecycle | `CreateLog`, `ReadText`, `ReadBinary`, `Open` | no active log |
/// | Query | `LogName`, `Lookup`, `PrintAll` | active log |
/// | Mutation | `AddContact`, `Clear` | active log |
/// | Persistence | `WriteText`, `WriteBinary` | active log |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Create an empty contacts log.
    /// Returns: `Output::Created`
    CreateLog {
        /// Log name, also the base file name
        name: String,
    },

    /// Name of the active log.
    /// Returns: `Output::LogName`
    LogName,

    /// Add one contact.
    /// Returns: `Output::Added`
    AddContact {
        /// Contact name
        name: String,
        /// 10-digit phone number
        phone: u64,
        /// 5-digit zip code
        zip: u32,
    },

    /// Find a phone number by exact name.
    /// Returns: `Output::Phone`
    Lookup {
        /// Contact name
        name: String,
    },

    /// Release the active log.
    /// Returns: `Output::Cleared`
    Clear,

    /// Every contact in bucket order.
    /// Returns: `Output::Contacts`
    PrintAll,

    /// Write `<name>.txt`.
    /// Returns: `Output::Written`
    WriteText,

    /// Load a `.txt` file.
    /// Returns: `Output::Loaded`
    ReadText {
        /// Path of the file
        path: PathBuf,
    },

    /// Write `<name>.bin`.
    /// Returns: `Output::Written`
    WriteBinary,

    /// Load a `.bin` file.
    /// Returns: `Output::Loaded`
    ReadBinary {
        /// Path of the file
        path: PathBuf,
    },

    /// Load a file, picking the format from its extension.
    /// Returns: `Output::Loaded`
    Open {
        /// Path of the file
        path: PathBuf,
    },
}

impl Command {
    /// Short command name as typed at the prompt
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateLog { .. } => "create",
            Command::LogName => "log",
            Command::AddContact { .. } => "add",
            Command::Lookup { .. } => "lookup",
            Command::Clear => "clear",
            Command::PrintAll => "print",
            Command::WriteText => "write_text",
            Command::ReadText { .. } => "read_text",
            Command::WriteBinary => "write_bin",
            Command::ReadBinary { .. } => "read_bin",
            Command::Open { .. } => "open",
        }
    }
}
