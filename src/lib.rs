//! chain-table: a string-to-string hash table with separate chaining and
//! automatic growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small dictionary primitive whose structure can be reasoned
//!   about directly: a bucket array, one collision chain per bucket.
//! - Layers:
//!   - `hash`: djb2 over the key bytes, reduced modulo the bucket count.
//!   - `chain`: entries live in a `SlotMap` arena; a bucket is an
//!     `Option<DefaultKey>` head and each entry links to the next one in
//!     its chain.
//!   - `ChainTable`: public API (`put`, `get`, `delete`) plus growth.
//!
//! Constraints
//! - Keys and values are `str`; the table stores its own copies.
//! - Keys are unique across all chains.
//! - Every entry reachable from bucket `i` hashes to `i` under the current
//!   bucket count.
//! - Capacity only grows, by doubling, and only on insert.
//!
//! Growth
//! - After an insert, if `len / capacity >= max_load_factor` (0.75 by
//!   default), a new bucket array twice the size is allocated and every
//!   entry is relinked into it. Entries are never copied: relinking only
//!   rewrites `next` keys inside the arena.
//! - If the new array cannot be allocated the table is left untouched and
//!   `put` reports `PutOutcome::Degraded`. The entry is stored; the next
//!   insert tries again.
//!
//! Allocation failure
//! - Bucket arrays, arena slots and key/value copies are reserved with
//!   `try_reserve`, so refusal surfaces as `AllocError` and leaves the
//!   table as it was.
//! - An update copies the new value before the old one is released, so a
//!   failed update keeps the previous value.
//!
//! Notes and non-goals
//! - Single-threaded: no internal locking. `&`/`&mut` already rule out
//!   mutation during a read; share across threads behind your own lock.
//! - No iteration API, no shrinking, no persistence.
//! - Destruction is `Drop`; [`ChainTable::destroy`] spells it out.

mod chain;
mod config;
mod error;
pub mod hash;
mod table;

mod table_proptest;

// Public surface
pub use config::{Config, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR, GROWTH_FACTOR};
pub use error::{AllocError, AllocErrorKind, Result};
pub use table::{ChainTable, PutOutcome};
