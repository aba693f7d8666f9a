//! Directory codec trait definitions.

use contactdb_core::{Limits, Result};

use crate::directory::Directory;

/// Directory codec trait.
///
/// A codec turns a [`Directory`] into the bytes of one file and back. The
/// file name is always `<directory name>.<extension>`, and decoding derives
/// the directory name from it.
///
/// # Atomic decode
///
/// `decode` builds a fresh directory and returns it only when every record
/// has been read. On error the partial directory is dropped.
pub trait DirectoryCodec: Send + Sync {
    /// Encode a directory to file bytes.
    fn encode(&self, directory: &Directory) -> Result<Vec<u8>>;

    /// Decode file bytes into a new directory called `name`.
    fn decode(&self, name: &str, data: &[u8], limits: &Limits) -> Result<Directory>;

    /// File extension without the dot (e.g. `"txt"`).
    fn extension(&self) -> &'static str;

    /// Unique codec identifier.
    fn codec_id(&self) -> &'static str;
}
