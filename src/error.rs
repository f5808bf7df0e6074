use std::collections::TryReserveError;

/// What kind of allocation could not be satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocErrorKind {
    /// The allocator refused a reservation (bucket array, key or value copy)
    Reserve(TryReserveError),

    /// The requested bucket count is not representable or exceeds the
    /// configured `max_buckets`
    CapacityOverflow,
}

/// An allocation needed by a table operation failed.
///
/// The table is left in its last consistent state, except when returned
/// inside [`PutOutcome::Degraded`](crate::PutOutcome::Degraded): then the
/// entry was stored and only the growth step failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocError {
    kind: AllocErrorKind,
}

impl AllocError {
    pub(crate) fn capacity_overflow() -> Self {
        Self {
            kind: AllocErrorKind::CapacityOverflow,
        }
    }

    /// The failure cause.
    pub fn kind(&self) -> &AllocErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AllocErrorKind::Reserve(e) => write!(f, "allocation failed: {e}"),
            AllocErrorKind::CapacityOverflow => f.write_str("bucket count overflow"),
        }
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AllocErrorKind::Reserve(e) => Some(e),
            AllocErrorKind::CapacityOverflow => None,
        }
    }
}

impl From<TryReserveError> for AllocError {
    fn from(value: TryReserveError) -> Self {
        Self {
            kind: AllocErrorKind::Reserve(value),
        }
    }
}

/// Table result
pub type Result<T> = std::result::Result<T, AllocError>;
