//! Error types reported by the table and its configuration.

use thiserror::Error;

/// Failure of a keyed table operation. Carries the offending key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError<K> {
    /// `insert` of a key that is already present. The stored value is kept.
    #[error("duplicate key {0}")]
    DuplicateKey(K),
    /// `remove` or a lookup of a key that is not present.
    #[error("key {0} not found")]
    KeyNotFound(K),
}

impl<K: Copy> TableError<K> {
    /// The key the failed operation was called with.
    pub fn key(&self) -> K {
        match *self {
            TableError::DuplicateKey(k) | TableError::KeyNotFound(k) => k,
        }
    }
}

/// Rejected construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial table size must be greater than zero")]
    ZeroTableSize,
    #[error("max load factor must be finite and greater than zero, got {0}")]
    InvalidMaxLoadFactor(f64),
    #[error("growth factor must be finite and greater than one, got {0}")]
    InvalidGrowthFactor(f64),
}
