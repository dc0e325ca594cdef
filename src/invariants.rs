//! Structural checks over a table, recomputed by traversal.

use crate::chained_hash_table::ChainedHashTable;
use crate::key::TableKey;
use std::collections::HashSet;

pub(crate) fn table_invariants<K: TableKey, V>(t: &ChainedHashTable<K, V>) -> bool {
    count_matches_chain_sizes(t)
        && chain_sizes_match_traversal(t)
        && keys_live_in_their_slot(t)
        && keys_are_unique(t)
        && arena_holds_exactly_live_nodes(t)
        && size_never_below_initial(t)
}

fn count_matches_chain_sizes<K: TableKey, V>(t: &ChainedHashTable<K, V>) -> bool {
    t.chains().iter().map(|c| c.len()).sum::<usize>() == t.len()
}

fn chain_sizes_match_traversal<K: TableKey, V>(t: &ChainedHashTable<K, V>) -> bool {
    t.chains()
        .iter()
        .all(|c| c.iter(t.arena()).count() == c.len())
}

fn keys_live_in_their_slot<K: TableKey, V>(t: &ChainedHashTable<K, V>) -> bool {
    let size = t.table_size();
    t.chains()
        .iter()
        .enumerate()
        .all(|(i, c)| c.iter(t.arena()).all(|n| n.key.slot(size) == i))
}

fn keys_are_unique<K: TableKey, V>(t: &ChainedHashTable<K, V>) -> bool {
    let mut seen = HashSet::with_capacity(t.len());
    t.chains()
        .iter()
        .all(|c| c.iter(t.arena()).all(|n| seen.insert(n.key)))
}

fn arena_holds_exactly_live_nodes<K: TableKey, V>(t: &ChainedHashTable<K, V>) -> bool {
    t.arena().len() == t.len()
}

fn size_never_below_initial<K: TableKey, V>(t: &ChainedHashTable<K, V>) -> bool {
    t.table_size() >= t.initial_table_size()
}
