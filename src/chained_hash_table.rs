//! ChainedHashTable: bucket array, growth policy and statistics over chains.

use crate::chain::{Arena, Chain, ChainIter, NodeKey};
use crate::config::TableConfig;
use crate::dump::TableDump;
use crate::error::{ConfigError, TableError};
use crate::key::TableKey;
use crate::stats::{Counters, TableStats};
use core::ops::Index;
use log::{debug, trace};
use slotmap::SlotMap;

/// Separately chained hash table keyed by unsigned integers.
///
/// An entry lives in chain `key mod table_size()`. Inserts that would push
/// `len / table_size` above the configured maximum first rebuild the table
/// at `ceil(table_size * growth_factor)` chains. The table never shrinks.
///
/// References returned by [`get`](Self::get) borrow the table, so they
/// cannot be held across `insert`, `remove`, `clear` or an expansion; the
/// borrow checker rejects such code.
///
/// ```
/// use chain_table::{ChainedHashTable, TableConfig, TableError};
///
/// let config = TableConfig::default().with_max_load_factor(1.0);
/// let mut t = ChainedHashTable::with_config(4, config).unwrap();
/// for (k, v) in (1u32..=5).zip(["a", "b", "c", "d", "e"]) {
///     t.insert(k, v).unwrap();
/// }
/// assert_eq!(t.table_size(), 8);
/// assert_eq!(t.get(5), Ok(&"e"));
/// assert_eq!(t.insert(5, "z"), Err(TableError::DuplicateKey(5)));
/// ```
pub struct ChainedHashTable<K, V> {
    buckets: Vec<Chain>,
    nodes: Arena<K, V>,
    len: usize,
    initial_table_size: usize,
    config: TableConfig,
    counters: Counters,
}

fn empty_buckets(n: usize) -> Vec<Chain> {
    core::iter::repeat_with(Chain::new).take(n).collect()
}

impl<K, V> ChainedHashTable<K, V>
where
    K: TableKey,
{
    /// Table of `initial_table_size` chains with the default growth policy.
    pub fn new(initial_table_size: usize) -> Result<Self, ConfigError> {
        Self::with_config(initial_table_size, TableConfig::default())
    }

    pub fn with_config(initial_table_size: usize, config: TableConfig) -> Result<Self, ConfigError> {
        if initial_table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        config.validate()?;
        Ok(Self {
            buckets: empty_buckets(initial_table_size),
            nodes: SlotMap::with_key(),
            len: 0,
            initial_table_size,
            config,
            counters: Counters::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of chains.
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    pub fn initial_table_size(&self) -> usize {
        self.initial_table_size
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn slot(&self, key: K) -> usize {
        key.slot(self.buckets.len())
    }

    /// Inserts `key -> value` at the head of its chain.
    ///
    /// Fails with `DuplicateKey` if the key is already present; the failed
    /// call changes nothing, counters included, and never expands the table.
    /// Otherwise, if `(len + 1) / table_size` exceeds the max load factor,
    /// the table expands before the new entry is linked.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), TableError<K>> {
        let probed = if self
            .config
            .exceeds_max_load(self.len + 1, self.buckets.len())
        {
            // The duplicate check must run before the table grows.
            if self.buckets[self.slot(key)]
                .find(&self.nodes, key)
                .found
                .is_some()
            {
                return Err(TableError::DuplicateKey(key));
            }
            self.expand();
            let slot = self.slot(key);
            let chain = &mut self.buckets[slot];
            let probed = chain.len();
            chain.push_front(&mut self.nodes, key, value);
            probed
        } else {
            let slot = self.slot(key);
            let chain = &mut self.buckets[slot];
            let probed = chain.len();
            chain.insert_front(&mut self.nodes, key, value)?;
            probed
        };

        // Probes count the destination chain as it stood before linking.
        self.counters.add_probes(probed);
        self.len += 1;
        self.counters.record_allocation();
        Ok(())
    }

    /// Rebuilds the bucket array at the grown size. Nodes are relinked into
    /// their new chains in place; the new array is fully allocated before
    /// the first node moves.
    fn expand(&mut self) {
        let old_size = self.buckets.len();
        let new_size = self.config.grown_size(old_size);
        let mut grown = empty_buckets(new_size);

        for chain in self.buckets.iter_mut() {
            while let Some(node) = chain.detach_front(&mut self.nodes) {
                let slot = self.nodes[node].key.slot(new_size);
                grown[slot].adopt(&mut self.nodes, node);
            }
        }
        self.buckets = grown;
        self.counters.record_expansion();

        debug_assert_eq!(
            self.buckets.iter().map(Chain::len).sum::<usize>(),
            self.len
        );
        debug!(
            "expanded chained hash table from {} to {} buckets ({} entries)",
            old_size, new_size, self.len
        );
    }

    /// Removes `key` and returns its value. Every node visited counts as a probe.
    pub fn remove(&mut self, key: K) -> Result<V, TableError<K>> {
        let slot = self.slot(key);
        let scan = self.buckets[slot].delete(&mut self.nodes, key);
        self.counters.add_probes(scan.visited);
        let value = scan.found.ok_or(TableError::KeyNotFound(key))?;
        self.len -= 1;
        Ok(value)
    }

    fn probe(&self, key: K) -> Option<NodeKey> {
        let scan = self.buckets[self.slot(key)].find(&self.nodes, key);
        self.counters.add_probes(scan.visited);
        scan.found
    }

    /// Looks up `key`, most recently inserted entry of its chain first.
    /// Only the probe counter changes.
    pub fn get(&self, key: K) -> Result<&V, TableError<K>> {
        let node = self.probe(key).ok_or(TableError::KeyNotFound(key))?;
        Ok(&self.nodes[node].value)
    }

    pub fn get_mut(&mut self, key: K) -> Result<&mut V, TableError<K>> {
        let node = self.probe(key).ok_or(TableError::KeyNotFound(key))?;
        Ok(&mut self.nodes[node].value)
    }

    /// Counts probes the same way `get` does.
    pub fn contains_key(&self, key: K) -> bool {
        self.probe(key).is_some()
    }

    /// Drops every entry. The bucket array keeps its current size.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear(&mut self.nodes);
            debug_assert!(chain.is_empty());
        }
        debug_assert!(self.nodes.is_empty());
        self.len = 0;
        trace!(
            "cleared chained hash table, {} buckets retained",
            self.buckets.len()
        );
    }

    /// Keys of every chain in chain order, plus the construction parameters.
    pub fn dump_table(&self) -> TableDump<K> {
        TableDump {
            initial_table_size: self.initial_table_size,
            max_load_factor: self.config.max_load_factor(),
            growth_factor: self.config.growth_factor(),
            buckets: self
                .buckets
                .iter()
                .map(|c| c.iter(&self.nodes).map(|n| n.key).collect())
                .collect(),
        }
    }

    pub fn stats(&self) -> TableStats {
        self.counters.snapshot(self.len, self.buckets.len())
    }

    /// Entries in bucket order; within a bucket, most recently inserted first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    #[cfg(test)]
    pub(crate) fn chains(&self) -> &[Chain] {
        &self.buckets
    }

    #[cfg(test)]
    pub(crate) fn arena(&self) -> &Arena<K, V> {
        &self.nodes
    }
}

impl<K: TableKey, V> Index<K> for ChainedHashTable<K, V> {
    type Output = V;

    /// Panics if `key` is not present.
    fn index(&self, key: K) -> &V {
        match self.get(key) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<K: TableKey, V: core::fmt::Debug> core::fmt::Debug for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K: TableKey, V> IntoIterator for &'a ChainedHashTable<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a `ChainedHashTable`.
pub struct Iter<'a, K, V> {
    nodes: &'a Arena<K, V>,
    buckets: core::slice::Iter<'a, Chain>,
    chain: Option<ChainIter<'a, K, V>>,
    remaining: usize,
}

impl<'a, K: Copy, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((node.key, &node.value));
            }
            self.chain = Some(self.buckets.next()?.iter(self.nodes));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Copy, V> ExactSizeIterator for Iter<'a, K, V> {}
