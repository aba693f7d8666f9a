//! Directory: a named bucket store with a live record count
//!
//! The directory is the unit of creation, load and persistence. `size` is
//! maintained incrementally on every insertion path and always equals the
//! sum of chain lengths.

use contactdb_core::{ContactRecord, Error, Limits, PhoneNumber, Result, ZipCode};
use tracing::{debug, info, warn};

use crate::bucket::{BucketStore, Chain};

/// Named, in-memory contact directory
#[derive(Debug, Clone)]
pub struct Directory {
    name: String,
    limits: Limits,
    store: BucketStore,
    size: usize,
}

impl Directory {
    /// Create an empty directory with default limits
    pub fn create(name: &str) -> Result<Self> {
        Self::with_limits(name, Limits::default())
    }

    /// Create an empty directory with explicit limits
    pub fn with_limits(name: &str, limits: Limits) -> Result<Self> {
        limits.validate()?;
        limits.validate_directory_name(name)?;
        let store = BucketStore::with_buckets(limits.bucket_count)?;
        debug!(directory = name, buckets = limits.bucket_count, "directory created");
        Ok(Directory {
            name: name.to_string(),
            limits,
            store,
            size: 0,
        })
    }

    /// Directory name (also the base file name)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Limits this directory was built with
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the directory holds no records
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of hash buckets
    pub fn bucket_count(&self) -> usize {
        self.store.bucket_count()
    }

    /// Add a contact at the tail of its bucket chain.
    ///
    /// Phone and zip are validated before anything is touched; on error the
    /// directory is unchanged. Overlong names follow the directory's
    /// [`NamePolicy`](contactdb_core::NamePolicy).
    pub fn add(&mut self, name: &str, phone: u64, zip: u32) -> Result<()> {
        let phone_number = PhoneNumber::new(phone)?;
        let zip_code = ZipCode::new(zip)?;
        let fitted = self.limits.fit_name(name)?;

        if let Some(original) = fitted.truncated_from {
            warn!(
                directory = %self.name,
                stored = %fitted.name,
                original_len = original,
                max = self.limits.max_name_bytes,
                "contact name truncated"
            );
        }

        let record = ContactRecord::new(fitted.name.into_owned(), phone_number, zip_code);
        let bucket = self.store.push_back(record)?;
        self.size += 1;
        debug!(directory = %self.name, bucket, size = self.size, "contact added");
        Ok(())
    }

    /// Insert an already validated record at the head of its chain.
    ///
    /// Used by the binary loader.
    pub(crate) fn insert_front(&mut self, record: ContactRecord) -> Result<()> {
        if record.name.len() > self.limits.max_name_bytes {
            return Err(Error::NameTooLong {
                len: record.name.len(),
                max: self.limits.max_name_bytes,
            });
        }
        self.store.push_front(record)?;
        self.size += 1;
        Ok(())
    }

    /// Phone number of the first contact named exactly `name`
    pub fn lookup(&self, name: &str) -> Option<PhoneNumber> {
        self.get(name).map(|record| record.phone_number)
    }

    /// First record named exactly `name`
    pub fn get(&self, name: &str) -> Option<&ContactRecord> {
        self.store.find(name)
    }

    /// All records in bucket-index order, then chain order
    pub fn list(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.store.iter()
    }

    /// Chain at a bucket index, `None` when the bucket is empty
    pub fn chain(&self, index: usize) -> Option<&Chain> {
        self.store.chain(index)
    }

    /// Bucket index a name hashes to
    pub fn bucket_of(&self, name: &str) -> usize {
        self.store.index_of(name)
    }

    /// Count records by walking the chains rather than reading `size`
    pub fn recount(&self) -> usize {
        self.store.record_count()
    }

    /// Release every chain and the directory itself.
    ///
    /// Returns the number of records released.
    pub fn clear(mut self) -> usize {
        let released = self.store.clear();
        info!(directory = %self.name, released, "directory cleared");
        released
    }
}
