//! Table construction parameters.

use crate::{ChainTable, Result};

/// Bucket count used when a table is created with capacity 0.
pub const DEFAULT_CAPACITY: usize = 256;

/// Load factor (`len / capacity`) at which an insert grows the table.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Each growth multiplies the bucket count by this.
pub const GROWTH_FACTOR: usize = 2;

/// Builder for [`ChainTable`].
///
/// ```
/// use chain_table::Config;
///
/// let table = Config::new().initial_capacity(16).max_load_factor(0.5).build()?;
/// assert_eq!(table.capacity(), 16);
/// # Ok::<(), chain_table::AllocError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub(crate) initial_capacity: usize,
    pub(crate) max_load_factor: f64,
    pub(crate) max_buckets: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            max_buckets: None,
        }
    }
}

impl Config {
    /// Default configuration: 256 buckets, load factor 0.75, unbounded growth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial bucket count. 0 selects [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn initial_capacity(mut self, buckets: usize) -> Self {
        self.initial_capacity = if buckets == 0 {
            DEFAULT_CAPACITY
        } else {
            buckets
        };
        self
    }

    /// Sets the load factor that triggers growth after an insert.
    ///
    /// # Panics
    ///
    /// Panics if `lf` is not a finite number greater than zero.
    #[must_use]
    pub fn max_load_factor(mut self, lf: f64) -> Self {
        assert!(lf.is_finite() && lf > 0.0, "load factor must be > 0");
        self.max_load_factor = lf;
        self
    }

    /// Caps the bucket count. Growth past the cap fails with
    /// [`AllocErrorKind::CapacityOverflow`](crate::AllocErrorKind::CapacityOverflow).
    #[must_use]
    pub fn max_buckets(mut self, buckets: usize) -> Self {
        self.max_buckets = Some(buckets);
        self
    }

    /// Bucket count a new table starts with.
    pub fn get_initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Load factor that triggers growth.
    pub fn get_max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Bucket cap, if any.
    pub fn get_max_buckets(&self) -> Option<usize> {
        self.max_buckets
    }

    /// Creates an empty table with this configuration.
    pub fn build(self) -> Result<ChainTable> {
        ChainTable::with_config(self)
    }

    /// Bucket count that follows `current`, or `None` if it would overflow
    /// or pass the cap.
    pub(crate) fn next_capacity(&self, current: usize) -> Option<usize> {
        let next = current.checked_mul(GROWTH_FACTOR)?;
        self.admits(next).then_some(next)
    }

    pub(crate) fn admits(&self, buckets: usize) -> bool {
        self.max_buckets.map_or(true, |max| buckets <= max)
    }
}
