//! Text codec
//!
//! # Format
//!
//! ```text
//! <size>
//! <name> <phone> <zip>
//! <name> <phone> <zip>
//! ...
//! ```
//!
//! Records are written in bucket-index order, then chain order. On read,
//! tokens are whitespace-delimited across lines: after the count, exactly
//! `size` triples are consumed and each goes through [`Directory::add`], so
//! validation, name fitting and tail insertion match interactive adds.

use std::io::Write;
use std::str::FromStr;

use contactdb_core::{Error, Limits, Result};
use tracing::{debug, warn};

use super::traits::DirectoryCodec;
use crate::directory::Directory;

/// Line-oriented, human-readable codec
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl DirectoryCodec for TextCodec {
    fn encode(&self, directory: &Directory) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        writeln!(out, "{}", directory.len())?;
        for record in directory.list() {
            writeln!(
                out,
                "{} {} {}",
                record.name, record.phone_number, record.zip_code
            )?;
        }
        Ok(out)
    }

    fn decode(&self, name: &str, data: &[u8], limits: &Limits) -> Result<Directory> {
        let text = std::str::from_utf8(data).map_err(|e| {
            let line = 1 + data[..e.valid_up_to()].iter().filter(|&&b| b == b'\n').count();
            Error::parse(line, "file is not valid UTF-8")
        })?;

        let mut tokens = Tokens::new(text);
        let declared: u32 = tokens.parse("record count")?;

        let mut directory = Directory::with_limits(name, *limits)?;
        for _ in 0..declared {
            let (line, contact) = tokens.next_token("contact name")?;
            let phone: u64 = tokens.parse("phone number")?;
            let zip: u32 = tokens.parse("zip code")?;
            directory.add(contact, phone, zip).map_err(|e| {
                warn!(directory = name, line, error = %e, "rejected record in text file");
                e
            })?;
        }

        if let Some((line, _)) = tokens.inner.next() {
            warn!(
                directory = name,
                line,
                declared,
                "ignoring data after the declared record count"
            );
        }

        debug!(directory = name, records = directory.len(), "text decoded");
        Ok(directory)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn codec_id(&self) -> &'static str {
        "text"
    }
}

/// Whitespace tokens tagged with their 1-based line number
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens {
            inner: Box::new(text.lines().enumerate().flat_map(|(i, line)| {
                line.split_whitespace().map(move |token| (i + 1, token))
            })),
            last_line: text.lines().count().max(1),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<(usize, &'a str)> {
        let line = self.last_line;
        self.inner
            .next()
            .ok_or_else(|| Error::parse(line, format!("unexpected end of file, expected {}", what)))
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let (line, token) = self.next_token(what)?;
        token
            .parse()
            .map_err(|_| Error::parse(line, format!("'{}' is not a valid {}", token, what)))
    }
}
