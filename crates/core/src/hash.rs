//! Bucket hashing
//!
//! Names are mapped to buckets with djb2 (seed 5381, multiplier 33) over
//! their UTF-8 bytes, using wrapping 32-bit arithmetic. Lookup correctness
//! depends on this being a pure function of the bytes.

/// djb2 seed value
pub const DJB2_SEED: u32 = 5381;

/// Raw djb2 accumulator over `bytes`.
///
/// `acc = acc * 33 + byte`, computed as `(acc << 5) + acc + byte` with
/// 32-bit wraparound. Bytes are treated as unsigned.
#[inline]
pub fn djb2(bytes: &[u8]) -> u32 {
    bytes.iter().fold(DJB2_SEED, |acc, &b| {
        (acc << 5).wrapping_add(acc).wrapping_add(u32::from(b))
    })
}

/// Bucket index for `name` in a table of `bucket_count` buckets.
///
/// # Panics
///
/// Panics if `bucket_count` is zero. `Limits` never allows that.
#[inline]
pub fn bucket_index(name: &str, bucket_count: usize) -> usize {
    (djb2(name.as_bytes()) as usize) % bucket_count
}
