//! Storage layer for ContactDB
//!
//! This crate implements the hash-table storage engine and its file formats:
//! - BucketStore: fixed array of `Option<Chain>` collision chains
//! - Directory: named bucket store with an incrementally maintained size
//! - TextCodec / BinaryCodec: the two on-disk formats behind `DirectoryCodec`
//! - persist: atomic file writes and whole-file loads

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bucket;
pub mod codec;
pub mod directory;
pub mod persist;

pub use bucket::{BucketStore, Chain};
pub use codec::{codec_for_path, BinaryCodec, DirectoryCodec, TextCodec};
pub use directory::Directory;
pub use persist::{load, persist};
