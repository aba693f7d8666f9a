//! Session facade for ContactDB
//!
//! This crate ties the storage engine to a single-user workflow:
//! - [`Session`]: holds at most one active contacts log
//! - [`Command`] / [`Output`]: serializable requests and results for
//!   front ends such as the CLI
//! - [`ContactDbConfig`]: `contactdb.toml` settings
//!
//! # Example
//!
//! ```no_run
//! use contactdb_executor::{Command, ContactDbConfig, Output, Session};
//!
//! let mut session = Session::new(ContactDbConfig::default());
//! session.execute(Command::CreateLog { name: "friends".into() })?;
//! session.execute(Command::AddContact {
//!     name: "Bob".into(),
//!     phone: 6125551234,
//!     zip: 55414,
//! })?;
//!
//! match session.execute(Command::Lookup { name: "Bob".into() })? {
//!     Output::Phone { phone: Some(p), .. } => println!("Bob: {}", p),
//!     _ => println!("not found"),
//! }
//! # Ok::<(), contactdb_executor::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
pub mod config;
mod output;
mod session;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use config::{ContactDbConfig, CONFIG_FILE_NAME};
pub use output::Output;
pub use session::Session;

pub use contactdb_core::{
    ContactRecord, Error, Limits, NamePolicy, PhoneNumber, Result, ZipCode,
    DEFAULT_BUCKET_COUNT, DEFAULT_MAX_NAME_BYTES,
};
pub use contactdb_storage::{BinaryCodec, Directory, DirectoryCodec, TextCodec};
