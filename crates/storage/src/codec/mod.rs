//! Directory codecs.
//!
//! Two codecs sit behind the [`DirectoryCodec`] seam:
//!
//! - [`TextCodec`] (`.txt`): line-oriented, human-readable, byte-for-byte
//!   round trip
//! - [`BinaryCodec`] (`.bin`): length-prefixed little-endian records,
//!   field-for-field round trip
//!
//! # Usage
//!
//! ```
//! use contactdb_core::Limits;
//! use contactdb_storage::codec::{DirectoryCodec, TextCodec};
//! use contactdb_storage::Directory;
//!
//! let mut dir = Directory::create("friends").unwrap();
//! dir.add("Bob", 6125551234, 55414).unwrap();
//!
//! let bytes = TextCodec.encode(&dir).unwrap();
//! let reloaded = TextCodec.decode("friends", &bytes, &Limits::default()).unwrap();
//! assert_eq!(reloaded.lookup("Bob"), dir.lookup("Bob"));
//! ```

mod binary;
mod text;
mod traits;

use std::path::Path;

use contactdb_core::{Error, Result};

pub use binary::{BinaryCodec, BINARY_HEADER_SIZE, MIN_RECORD_SIZE};
pub use text::TextCodec;
pub use traits::DirectoryCodec;

/// Pick a codec from a file's extension (`.txt` or `.bin`).
pub fn codec_for_path(path: &Path) -> Result<Box<dyn DirectoryCodec>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Ok(Box::new(TextCodec)),
        Some("bin") => Ok(Box::new(BinaryCodec)),
        _ => Err(Error::invalid_path(
            path,
            "unknown contacts log file extension, expected .txt or .bin",
        )),
    }
}
