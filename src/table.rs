//! ChainTable: bucket array of collision chains over a slot arena.

use crate::chain::{self, Arena, Bucket, Entry};
use crate::config::Config;
use crate::error::{AllocError, Result};
use crate::hash::bucket_index;

/// Result of a successful [`ChainTable::put`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum PutOutcome {
    /// A new entry was stored. Growth, if the load factor was reached,
    /// succeeded.
    Inserted,
    /// The key existed; its value was replaced.
    Updated,
    /// A new entry was stored, but growing the bucket array afterwards
    /// failed. The table keeps its old capacity and runs above its load
    /// factor; the next insert tries to grow again.
    Degraded(AllocError),
}

impl PutOutcome {
    /// True when the put created a new entry (`Inserted` or `Degraded`).
    pub fn is_insert(&self) -> bool {
        !matches!(self, PutOutcome::Updated)
    }
}

/// A string-to-string hash table with separate chaining.
///
/// Keys hash with djb2 into a bucket array; each bucket heads a singly
/// linked chain of entries, newest first. When an insert brings
/// `len / capacity` to the configured load factor, the bucket array
/// doubles and every entry is relinked into its new bucket.
pub struct ChainTable {
    buckets: Vec<Bucket>,
    slots: Arena,
    config: Config,
}

impl ChainTable {
    /// Empty table with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) buckets.
    ///
    /// # Panics
    ///
    /// Panics if the default bucket array cannot be allocated. Use
    /// [`ChainTable::with_capacity`] to handle that case.
    pub fn new() -> Self {
        let mut buckets = Vec::new();
        buckets.resize(crate::DEFAULT_CAPACITY, None);
        Self::from_parts(buckets, Config::default())
    }

    /// Empty table with `buckets` buckets; 0 selects the default.
    pub fn with_capacity(buckets: usize) -> Result<Self> {
        Self::with_config(Config::new().initial_capacity(buckets))
    }

    /// Empty table built from `config`.
    pub fn with_config(config: Config) -> Result<Self> {
        let capacity = config.initial_capacity;
        if !config.admits(capacity) {
            return Err(AllocError::capacity_overflow());
        }
        let buckets = empty_buckets(capacity)?;
        Ok(Self::from_parts(buckets, config))
    }

    fn from_parts(buckets: Vec<Bucket>, config: Config) -> Self {
        log::trace!("Creating table with {} buckets", buckets.len());
        Self {
            buckets,
            slots: Arena::new(),
            config,
        }
    }

    /// Drops the table, releasing every entry and the bucket array.
    pub fn destroy(self) {
        drop(self);
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn head(&self, key: &str) -> Bucket {
        self.buckets[bucket_index(key, self.buckets.len())]
    }

    /// Value stored under `key`, borrowed from the table.
    pub fn get(&self, key: &str) -> Option<&str> {
        let id = chain::find(&self.slots, self.head(key), key)?;
        self.slots.get(id).map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        chain::find(&self.slots, self.head(key), key).is_some()
    }

    /// Inserts `key -> value`, or replaces the value if `key` is present.
    ///
    /// Both strings are copied. On `Err` the table is unchanged: a failed
    /// update keeps the previous value, since the new copy is made before
    /// the old value is released.
    pub fn put(&mut self, key: &str, value: &str) -> Result<PutOutcome> {
        let index = bucket_index(key, self.buckets.len());

        if let Some(id) = chain::find(&self.slots, self.buckets[index], key) {
            let value = chain::try_copy(value)?;
            if let Some(entry) = self.slots.get_mut(id) {
                entry.value = value;
            }
            return Ok(PutOutcome::Updated);
        }

        self.slots.try_reserve(1)?;
        let key = chain::try_copy(key)?.into_boxed_str();
        let value = chain::try_copy(value)?;
        let id = self.slots.insert(Entry {
            key,
            value,
            next: self.buckets[index],
        });
        self.buckets[index] = Some(id);

        if !self.over_threshold() {
            return Ok(PutOutcome::Inserted);
        }
        match self.grow() {
            Ok(()) => Ok(PutOutcome::Inserted),
            Err(e) => {
                log::debug!(
                    "Could not grow table past {} buckets ({} entries): {e}",
                    self.capacity(),
                    self.len()
                );
                Ok(PutOutcome::Degraded(e))
            }
        }
    }

    /// Removes `key`, handing back the owned key and value.
    pub fn delete(&mut self, key: &str) -> Option<(String, String)> {
        let index = bucket_index(key, self.buckets.len());

        let mut prev = None;
        let mut cursor = self.buckets[index];
        while let Some(id) = cursor {
            let entry = self.slots.get(id)?;
            if &*entry.key == key {
                let next = entry.next;
                match prev {
                    None => self.buckets[index] = next,
                    Some(p) => self.slots.get_mut(p)?.next = next,
                }
                let entry = self.slots.remove(id)?;
                return Some((entry.key.into_string(), entry.value));
            }
            prev = Some(id);
            cursor = entry.next;
        }
        None
    }

    /// Exact ratio `len / capacity >= max_load_factor`, so a 4-bucket table
    /// grows on its 3rd insert (integer division would wait for the 4th).
    fn over_threshold(&self) -> bool {
        self.len() as f64 >= self.capacity() as f64 * self.config.max_load_factor
    }

    /// Doubles the bucket array and relinks every entry.
    ///
    /// On error nothing has changed.
    fn grow(&mut self) -> Result<()> {
        let old_capacity = self.capacity();
        let new_capacity = self
            .config
            .next_capacity(old_capacity)
            .ok_or_else(AllocError::capacity_overflow)?;
        let mut buckets = empty_buckets(new_capacity)?;

        log::trace!(
            "Growing table from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.len()
        );

        for head in &mut self.buckets {
            let mut cursor = head.take();
            while let Some(id) = cursor {
                let Some(entry) = self.slots.get_mut(id) else {
                    break;
                };
                cursor = entry.next;
                let slot = &mut buckets[bucket_index(&entry.key, new_capacity)];
                entry.next = *slot;
                *slot = Some(id);
            }
        }

        self.buckets = buckets;
        Ok(())
    }

    /// Checks the structural invariants; used by tests after every step.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        assert!(!self.buckets.is_empty(), "bucket array must be non-empty");
        let mut seen = HashSet::new();
        for (i, &head) in self.buckets.iter().enumerate() {
            for (id, entry) in chain::Chain::new(&self.slots, head) {
                assert_eq!(
                    bucket_index(&entry.key, self.buckets.len()),
                    i,
                    "entry {:?} linked from the wrong bucket",
                    entry.key
                );
                assert!(seen.insert(id), "entry reachable twice");
                assert!(
                    seen.len() <= self.slots.len(),
                    "chain longer than the arena (cycle?)"
                );
            }
        }
        assert_eq!(seen.len(), self.slots.len(), "unreachable entries in arena");

        let keys: HashSet<&str> = self.slots.values().map(|e| &*e.key).collect();
        assert_eq!(keys.len(), self.slots.len(), "duplicate keys");
    }

    /// Keys of bucket `index`, in chain order.
    #[cfg(test)]
    pub(crate) fn chain_keys(&self, index: usize) -> Vec<&str> {
        chain::Chain::new(&self.slots, self.buckets[index])
            .map(|(_, e)| &*e.key)
            .collect()
    }
}

impl Default for ChainTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChainTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainTable")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Bucket array of `n` empty chains, allocated fallibly.
fn empty_buckets(n: usize) -> Result<Vec<Bucket>> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(n)?;
    buckets.resize(n, None);
    Ok(buckets)
}
