//! djb2 string hashing and bucket selection.
//!
//! The accumulator starts at 5381 and absorbs each byte as
//! `acc * 33 + byte`, spelled `(acc << 5) + acc + byte`. All arithmetic
//! wraps on `u64`; overflow is part of the function, not an error.

/// Seed of the djb2 accumulator.
pub const DJB2_SEED: u64 = 5381;

/// Hash `bytes` with djb2.
#[inline]
pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |acc, &c| {
        (acc << 5).wrapping_add(acc).wrapping_add(u64::from(c))
    })
}

/// Bucket index of `key` in a table with `buckets` buckets.
///
/// `buckets` must be non-zero. The index depends on the bucket count, so
/// every entry has to be re-placed whenever the count changes.
#[inline]
pub fn bucket_index(key: &str, buckets: usize) -> usize {
    debug_assert!(buckets > 0, "bucket count must be non-zero");
    // The remainder is < buckets, which already fits in usize.
    (djb2(key.as_bytes()) % buckets as u64) as usize
}
