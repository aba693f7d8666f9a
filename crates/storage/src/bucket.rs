//! Bucket store: a fixed array of collision chains
//!
//! Each slot holds `Option<Chain>`; an empty bucket is `None` rather than an
//! empty deque. Records are placed by djb2 of their name. Two insertion
//! points exist:
//!
//! - `push_back`: append to the chain tail (the `add` and text-load path)
//! - `push_front`: insert before the current head (the binary-load path)
//!
//! All growth goes through `try_reserve` so exhaustion surfaces as
//! `Error::Allocation` instead of aborting.

use std::collections::VecDeque;

use contactdb_core::{bucket_index, ContactRecord, Error, Result};

/// Records sharing one bucket, in chain order
pub type Chain = VecDeque<ContactRecord>;

/// Fixed-size array of chains
#[derive(Debug, Clone)]
pub struct BucketStore {
    buckets: Vec<Option<Chain>>,
}

impl BucketStore {
    /// Allocate `bucket_count` empty buckets. `bucket_count` must be non-zero.
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::config("bucket_count must be greater than zero"));
        }
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize_with(bucket_count, || None);
        Ok(BucketStore { buckets })
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index for a name
    pub fn index_of(&self, name: &str) -> usize {
        bucket_index(name, self.buckets.len())
    }

    /// Append a record to the tail of its chain. Returns the bucket index.
    pub fn push_back(&mut self, record: ContactRecord) -> Result<usize> {
        let index = self.index_of(&record.name);
        self.reserve_slot(index)?.push_back(record);
        Ok(index)
    }

    /// Insert a record before the head of its chain. Returns the bucket index.
    pub fn push_front(&mut self, record: ContactRecord) -> Result<usize> {
        let index = self.index_of(&record.name);
        self.reserve_slot(index)?.push_front(record);
        Ok(index)
    }

    /// Chain at `index` with room for one more record.
    ///
    /// An empty bucket only becomes `Some` once the reservation succeeded.
    fn reserve_slot(&mut self, index: usize) -> Result<&mut Chain> {
        let slot = &mut self.buckets[index];
        match slot {
            Some(chain) => chain.try_reserve(1)?,
            None => {
                let mut chain = Chain::new();
                chain.try_reserve(1)?;
                *slot = Some(chain);
            }
        }
        Ok(slot.get_or_insert_with(Chain::new))
    }

    /// First record in the name's chain with an exact, case-sensitive match
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.buckets[self.index_of(name)]
            .as_ref()?
            .iter()
            .find(|record| record.name == name)
    }

    /// The chain at `index`, or `None` if the bucket is empty or out of range
    pub fn chain(&self, index: usize) -> Option<&Chain> {
        self.buckets.get(index)?.as_ref()
    }

    /// All records in bucket-index order, then chain order
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.buckets.iter().flatten().flat_map(|chain| chain.iter())
    }

    /// Count records by walking every chain
    pub fn record_count(&self) -> usize {
        self.buckets.iter().flatten().map(|chain| chain.len()).sum()
    }

    /// Release every chain. Returns the number of records dropped.
    pub fn clear(&mut self) -> usize {
        self.buckets
            .iter_mut()
            .filter_map(Option::take)
            .map(|chain| chain.len())
            .sum()
    }
}
