//! ContactDB - in-memory contact directory with text and binary persistence
//!
//! A directory is a fixed-size hash table of chained buckets keyed by contact
//! name. One directory is active per session; it can be created empty or
//! loaded from a `.txt` or `.bin` file and written back in either format.
//!
//! # Quick Start
//!
//! ```no_run
//! use contactdb::{ContactDbConfig, Session};
//!
//! let mut session = Session::new(ContactDbConfig::default());
//! session.create_log("friends")?;
//! session.add_contact("Bob", 6125551234, 55414)?;
//!
//! assert_eq!(session.lookup("Bob")?.map(|p| p.get()), Some(6125551234));
//! session.write_text()?;
//! # Ok::<(), contactdb::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Session`], which enforces the
//! single-active-directory rule. Storage and codec internals live in
//! `contactdb-storage` and are re-exported for callers that want to drive a
//! [`Directory`] directly.

pub use contactdb_executor::*;
