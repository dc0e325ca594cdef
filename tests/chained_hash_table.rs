// ChainedHashTable integration tests (public API only).
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Growth: an insert whose projected load exceeds the maximum expands the
//   table first; the table never shrinks.
// - Round-trip: a live key always yields the value of its first insert.
// - Failure isolation: failed operations leave entries and sizes unchanged.
// - Clear: drops entries, keeps the bucket array.
// - Dumps: read-only, and consistent with the live entries.
use chain_table::{ChainedHashTable, ConfigError, TableConfig, TableError, TableStats};

fn letters_table() -> ChainedHashTable<u32, &'static str> {
    let config = TableConfig::default()
        .with_max_load_factor(1.0)
        .with_growth_factor(2.0);
    let mut t = ChainedHashTable::with_config(4, config).expect("valid config");
    for (k, v) in (1u32..=5).zip(["a", "b", "c", "d", "e"]) {
        t.insert(k, v).expect("fresh key");
    }
    t
}

// Test: growth before insertion.
// Assumes: size 4, max load 1.0, growth 2.0; keys 1..=5.
// Verifies: the fifth insert (projected 5/4) doubles the table to 8 and
// every key stays reachable.
#[test]
fn fifth_insert_doubles_table() {
    let t = letters_table();
    assert_eq!(t.table_size(), 8);
    assert_eq!(t.len(), 5);
    assert_eq!(t.get(5), Ok(&"e"));
    assert_eq!(t.get(1), Ok(&"a"));
    assert_eq!(t[3], "c");
    assert_eq!(t.stats().expansions, 1);
}

// Test: remove and repeated remove.
// Assumes: the letters table above.
// Verifies: first remove returns the value and decrements len; the second
// reports KeyNotFound with the key.
#[test]
fn remove_twice_reports_missing_key() {
    let mut t = letters_table();
    assert_eq!(t.remove(3), Ok("c"));
    assert_eq!(t.len(), 4);

    let err = t.remove(3).unwrap_err();
    assert_eq!(err, TableError::KeyNotFound(3));
    assert_eq!(err.key(), 3);
    assert_eq!(t.len(), 4);
}

// Test: clear.
// Assumes: a table that has already grown.
// Verifies: len drops to 0, table size is kept, and every old key misses.
#[test]
fn clear_keeps_table_size() {
    let mut t = letters_table();
    let size = t.table_size();
    t.clear();
    assert_eq!(t.len(), 0);
    assert!(t.is_empty());
    assert_eq!(t.table_size(), size);
    for k in 1u32..=5 {
        assert_eq!(t.get(k), Err(TableError::KeyNotFound(k)));
    }
    // Clearing an empty table is a no-op.
    t.clear();
    assert_eq!(t.table_size(), size);
}

// Test: duplicate rejection.
// Assumes: default configuration.
// Verifies: the second insert fails with DuplicateKey and the first value
// survives.
#[test]
fn duplicate_keeps_first_value() {
    let mut t: ChainedHashTable<u32, String> = ChainedHashTable::new(16).unwrap();
    t.insert(42, "first".to_string()).unwrap();
    assert_eq!(
        t.insert(42, "second".to_string()),
        Err(TableError::DuplicateKey(42))
    );
    assert_eq!(t.get(42).map(String::as_str), Ok("first"));
    assert_eq!(t.len(), 1);
}

// Test: failures on absent keys.
// Assumes: keys never inserted.
// Verifies: len, table size and stored values are unchanged; only probes move.
#[test]
fn missing_key_operations_change_nothing_but_probes() {
    let mut t = letters_table();
    let before = t.stats();
    let dump = t.dump_table();

    for k in [0u32, 6, 100, u32::MAX] {
        assert!(t.get(k).is_err());
        assert!(!t.contains_key(k));
        assert_eq!(t.remove(k), Err(TableError::KeyNotFound(k)));
    }

    let after = t.stats();
    assert_eq!(
        (after.count, after.table_size, after.expansions, after.allocations),
        (before.count, before.table_size, before.expansions, before.allocations)
    );
    assert_eq!(t.dump_table(), dump);
}

// Test: no data loss under repeated growth.
// Assumes: tiny initial table and default policy, many sequential keys.
// Verifies: every key is found with its value after several expansions,
// and table size only went up.
#[test]
fn many_expansions_lose_nothing() {
    let mut t: ChainedHashTable<u64, u64> = ChainedHashTable::new(1).unwrap();
    let mut last_size = t.table_size();
    for k in 0..10_000u64 {
        t.insert(k, k.wrapping_mul(31)).unwrap();
        assert!(t.table_size() >= last_size);
        last_size = t.table_size();
    }
    assert!(t.stats().expansions >= 10);
    for k in 0..10_000u64 {
        assert_eq!(t.get(k), Ok(&k.wrapping_mul(31)));
    }
    assert_eq!(t.iter().count(), 10_000);
}

// Test: statistics snapshot.
// Assumes: keys 0, 4, 8 collide in a 4-bucket table.
// Verifies: probe totals and the rendered text.
#[test]
fn stats_render_counters() {
    let mut t: ChainedHashTable<u32, ()> = ChainedHashTable::new(4).unwrap();
    for k in [0, 4, 8] {
        t.insert(k, ()).unwrap();
    }
    t.get(0).unwrap();
    let s: TableStats = t.stats();
    assert_eq!(s.probes, 6);
    assert_eq!(s.allocations, 3);
    assert_eq!(s.expansions, 0);
    assert_eq!(
        s.to_string(),
        "Number of probes: 6\n\
         Number of expansions: 0\n\
         Items: 3, TableSize: 4\n\
         Load factor: 0.75\n\
         Nodes created: 3"
    );
}

// Test: table dump.
// Assumes: the letters table after growth to 8.
// Verifies: one key per occupied slot and the header values.
#[test]
fn dump_renders_slots() {
    let t = letters_table();
    let d = t.dump_table();
    assert_eq!(d.table_size(), 8);
    for k in 1..=5usize {
        assert_eq!(d.bucket(k), [k as u32].as_slice());
    }
    assert!(d.bucket(0).is_empty());
    let text = d.to_string();
    assert!(text.starts_with("Initial size: 4\nMax load factor: 1\nGrowth factor: 2\n"));
    assert!(text.contains("Slot:   1 --> 1\n"));
    assert!(text.ends_with("Slot:   7"));
}

// Test: construction parameters.
// Verifies: each invalid argument is reported at construction.
#[test]
fn construction_rejects_bad_parameters() {
    assert_eq!(
        ChainedHashTable::<u32, ()>::new(0).unwrap_err(),
        ConfigError::ZeroTableSize
    );
    let zero_load = TableConfig::default().with_max_load_factor(0.0);
    assert_eq!(
        ChainedHashTable::<u32, ()>::with_config(4, zero_load).unwrap_err(),
        ConfigError::InvalidMaxLoadFactor(0.0)
    );
    let no_growth = TableConfig::default().with_growth_factor(1.0);
    assert_eq!(
        ChainedHashTable::<u32, ()>::with_config(4, no_growth).unwrap_err(),
        ConfigError::InvalidGrowthFactor(1.0)
    );
}

// Test: narrow and wide key types.
// Verifies: u8 and usize keys chain and grow the same way u32 keys do.
#[test]
fn other_unsigned_key_types() {
    let mut small: ChainedHashTable<u8, u8> = ChainedHashTable::new(2).unwrap();
    for k in 0..=u8::MAX {
        small.insert(k, k.wrapping_add(1)).unwrap();
    }
    assert_eq!(small.len(), 256);
    assert_eq!(small.get(255), Ok(&0));

    let mut wide: ChainedHashTable<usize, &str> = ChainedHashTable::new(3).unwrap();
    wide.insert(usize::MAX, "max").unwrap();
    wide.insert(0, "zero").unwrap();
    assert_eq!(wide[usize::MAX], "max");
    assert_eq!(wide.remove(0), Ok("zero"));
}
