//! Binary codec
//!
//! # Format
//!
//! ```text
//! +---------------------+
//! | Record Count        | 4 bytes (u32 LE)
//! +---------------------+  repeated Record Count times:
//! | Name Length         | 4 bytes (u32 LE)
//! | Name                | Name Length bytes, UTF-8, no terminator
//! | Phone Number        | 8 bytes (u64 LE)
//! | Zip Code            | 4 bytes (u32 LE)
//! +---------------------+
//! ```
//!
//! Fields are packed with no padding. Byte order is fixed little-endian so
//! files move between hosts.
//!
//! ## Insertion order on load
//!
//! Decoded records are inserted at the head of their bucket chain, so a
//! chain read back from a binary file is in reverse of its written order.
//! Records in different buckets keep their relative positions.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use contactdb_core::{ContactRecord, Error, Limits, PhoneNumber, Result, ZipCode};
use tracing::{debug, warn};

use super::traits::DirectoryCodec;
use crate::directory::Directory;

/// Size of the record count header
pub const BINARY_HEADER_SIZE: usize = 4;

/// Smallest possible encoded record: length prefix, one name byte, phone, zip
pub const MIN_RECORD_SIZE: usize = 4 + 1 + 8 + 4;

/// Compact, length-prefixed codec
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl DirectoryCodec for BinaryCodec {
    fn encode(&self, directory: &Directory) -> Result<Vec<u8>> {
        let count = u32::try_from(directory.len()).map_err(|_| {
            Error::invalid_field(
                "record count",
                format!("{} records do not fit a 4-byte count", directory.len()),
            )
        })?;

        let mut out = Vec::new();
        let estimate = directory.len().saturating_mul(MIN_RECORD_SIZE);
        out.try_reserve(BINARY_HEADER_SIZE.saturating_add(estimate))?;
        out.write_u32::<LittleEndian>(count)?;

        for record in directory.list() {
            // Names are bounded by Limits::max_name_bytes, far below u32::MAX
            out.write_u32::<LittleEndian>(record.name.len() as u32)?;
            out.extend_from_slice(record.name.as_bytes());
            out.write_u64::<LittleEndian>(record.phone_number.get())?;
            out.write_u32::<LittleEndian>(record.zip_code.get())?;
        }

        Ok(out)
    }

    fn decode(&self, name: &str, data: &[u8], limits: &Limits) -> Result<Directory> {
        let mut reader = Reader::new(data);
        let count = reader.u32("record count")?;

        let remaining = data.len().saturating_sub(BINARY_HEADER_SIZE);
        if (count as usize).saturating_mul(MIN_RECORD_SIZE) > remaining {
            return Err(Error::corrupt(
                0,
                format!(
                    "header declares {} records but only {} bytes follow",
                    count, remaining
                ),
            ));
        }

        let mut directory = Directory::with_limits(name, *limits)?;
        for index in 0..count {
            let record = reader.record(index, limits)?;
            directory.insert_front(record)?;
        }

        if reader.remaining() > 0 {
            warn!(
                directory = name,
                trailing = reader.remaining(),
                "ignoring bytes after the last record"
            );
        }

        debug!(directory = name, records = directory.len(), "binary decoded");
        Ok(directory)
    }

    fn extension(&self) -> &'static str {
        "bin"
    }

    fn codec_id(&self) -> &'static str {
        "binary"
    }
}

/// Cursor that reports truncation as `CorruptData` at the failing offset
struct Reader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader {
            cursor: Cursor::new(data),
        }
    }

    fn offset(&self) -> u64 {
        self.cursor.position()
    }

    fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len() as u64;
        len.saturating_sub(self.cursor.position()) as usize
    }

    fn truncated(&self, offset: u64, what: &str) -> Error {
        Error::corrupt(offset, format!("unexpected end of data reading {}", what))
    }

    fn u32(&mut self, what: &str) -> Result<u32> {
        let offset = self.offset();
        self.cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| self.truncated(offset, what))
    }

    fn u64(&mut self, what: &str) -> Result<u64> {
        let offset = self.offset();
        self.cursor
            .read_u64::<LittleEndian>()
            .map_err(|_| self.truncated(offset, what))
    }

    fn record(&mut self, index: u32, limits: &Limits) -> Result<ContactRecord> {
        let len_offset = self.offset();
        let name_len = self.u32("name length")? as usize;
        if name_len == 0 {
            return Err(Error::corrupt(
                len_offset,
                format!("record {} has an empty name", index),
            ));
        }
        if name_len > limits.max_name_bytes {
            return Err(Error::corrupt(
                len_offset,
                format!(
                    "record {} name length {} exceeds maximum of {}",
                    index, name_len, limits.max_name_bytes
                ),
            ));
        }

        let name_offset = self.offset();
        let mut name_bytes = vec![0u8; name_len];
        self.cursor
            .read_exact(&mut name_bytes)
            .map_err(|_| self.truncated(name_offset, "name"))?;
        let name = String::from_utf8(name_bytes).map_err(|_| {
            Error::corrupt(name_offset, format!("record {} name is not UTF-8", index))
        })?;
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::corrupt(
                name_offset,
                format!("record {} name contains whitespace", index),
            ));
        }

        let phone_offset = self.offset();
        let phone_number = PhoneNumber::new(self.u64("phone number")?)
            .map_err(|e| Error::corrupt(phone_offset, format!("record {}: {}", index, e)))?;

        let zip_offset = self.offset();
        let zip_code = ZipCode::new(self.u32("zip code")?)
            .map_err(|e| Error::corrupt(zip_offset, format!("record {}: {}", index, e)))?;

        Ok(ContactRecord::new(name, phone_number, zip_code))
    }
}
