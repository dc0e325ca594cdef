//! chain-table: a separately chained hash table over unsigned integer keys,
//! with a load-factor growth policy and probe/expansion/allocation counters.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, fully instrumented chaining table whose every probe and
//!   allocation can be observed, for studying load factor and growth.
//! - Layers:
//!   - Chain: one bucket, a singly linked list of nodes. Prepend insert,
//!     linear find, unlink by key, and node detach/adopt for rehashing.
//!   - ChainedHashTable<K, V>: the bucket array plus growth policy,
//!     statistics and the public API. Selects a chain with
//!     `key mod table_size` and delegates.
//!
//! Constraints
//! - Single-threaded: statistics use `Cell`, so the table is `!Sync`.
//! - Keys are fixed-width unsigned integers (`TableKey`); the hash is a
//!   plain modulo reduction with no mixing.
//! - Duplicate inserts fail; nothing is overwritten.
//! - The table grows, never shrinks.
//!
//! Node storage
//! - All nodes of a table live in one `SlotMap`. A chain owns a head index
//!   and a length; a node owns its successor index. Unlinking never leaves
//!   a dangling reference, and a removed node's slot is generation-bumped
//!   before reuse.
//!
//! Growth
//! - Insert computes the load factor as if the new entry were already
//!   present. Above `max_load_factor`, the table allocates
//!   `ceil(table_size * growth_factor)` empty chains, drains every old chain
//!   head-first into them, and swaps the arrays. Values never move in
//!   memory and no node is allocated or freed during growth.
//!
//! Duplicate inserts and counters
//! - A duplicate insert is rejected before anything is mutated: no count
//!   change, no probes recorded, no expansion, no allocation.
//!
//! Probe accounting
//! - Insert adds the destination chain length (the scan that proves the
//!   key absent). Lookup, `contains_key` and remove add the number of nodes
//!   visited, whether or not the key is found.
//!
//! Notes and non-goals
//! - No custom hashers, no shrinking on removal, no ordering guarantee
//!   beyond "most recent first within a bucket".
//! - Dumps are data (`TableDump`, `TableStats`); their `Display` impls are
//!   the text rendering.

mod chain;
mod chained_hash_table;
mod chained_hash_table_proptest;
mod config;
mod dump;
mod error;
#[cfg(test)]
mod invariants;
mod key;
mod stats;

// Public surface
pub use chained_hash_table::{ChainedHashTable, Iter};
pub use config::{TableConfig, DEFAULT_GROWTH_FACTOR, DEFAULT_MAX_LOAD_FACTOR};
pub use dump::TableDump;
pub use error::{ConfigError, TableError};
pub use key::TableKey;
pub use stats::TableStats;
