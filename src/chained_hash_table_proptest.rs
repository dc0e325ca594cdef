#![cfg(test)]

// Property tests for ChainedHashTable kept inside the crate so they can run
// the traversal-based invariant checks on private chain structure.

use crate::chained_hash_table::ChainedHashTable;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::invariants::table_invariants;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug)]
enum Op {
    Insert(u32, i32),
    Remove(u32),
    Get(u32),
    Mutate(u32, i32),
    Clear,
    Iterate,
}

// Small key range so chains collide and removes hit present keys often.
fn arb_op() -> impl Strategy<Value = Op> {
    let key = 0u32..48;
    prop_oneof![
        6 => (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => key.clone().prop_map(Op::Remove),
        3 => key.clone().prop_map(Op::Get),
        1 => (key, any::<i32>()).prop_map(|(k, d)| Op::Mutate(k, d)),
        1 => Just(Op::Clear),
        1 => Just(Op::Iterate),
    ]
}

fn arb_config() -> impl Strategy<Value = (usize, TableConfig)> {
    (1usize..8, 0.25f64..4.0, 1.05f64..3.0).prop_map(|(size, load, growth)| {
        let config = TableConfig::default()
            .with_max_load_factor(load)
            .with_growth_factor(growth);
        (size, config)
    })
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised after every operation:
// - len == sum of chain sizes == live arena nodes; each key sits in slot
//   `key mod table_size` and appears once.
// - Lookups return the value of the first successful insert (duplicates rejected).
// - table_size never decreases and only changes on a successful insert.
// - Counters are monotone; expansions and allocations only move on insert.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((size, config) in arb_config(), ops in proptest::collection::vec(arb_op(), 1..120)) {
        let mut sut: ChainedHashTable<u32, i32> = ChainedHashTable::with_config(size, config).unwrap();
        let mut model: HashMap<u32, i32> = HashMap::new();

        for op in ops {
            let before = sut.stats();
            let mut may_grow = false;

            match op {
                Op::Insert(k, v) => {
                    let already = model.contains_key(&k);
                    match sut.insert(k, v) {
                        Ok(()) => {
                            prop_assert!(!already, "insert must fail on duplicate");
                            model.insert(k, v);
                            may_grow = true;
                            prop_assert_eq!(sut.stats().allocations, before.allocations + 1);
                        }
                        Err(TableError::DuplicateKey(dk)) => {
                            prop_assert!(already, "duplicate error only when key exists");
                            prop_assert_eq!(dk, k);
                            prop_assert_eq!(sut.stats(), before);
                        }
                        Err(e) => prop_assert!(false, "unexpected error {:?}", e),
                    }
                }
                Op::Remove(k) => match sut.remove(k) {
                    Ok(v) => {
                        prop_assert_eq!(Some(v), model.remove(&k));
                    }
                    Err(e) => {
                        prop_assert_eq!(e, TableError::KeyNotFound(k));
                        prop_assert!(!model.contains_key(&k));
                    }
                },
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(k).ok(), model.get(&k));
                }
                Op::Mutate(k, d) => {
                    if let Ok(v) = sut.get_mut(k) {
                        *v = v.wrapping_add(d);
                        let mv = model.get_mut(&k).expect("present in model");
                        *mv = mv.wrapping_add(d);
                    } else {
                        prop_assert!(!model.contains_key(&k));
                    }
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
                Op::Iterate => {
                    let seen: BTreeMap<u32, i32> = sut.iter().map(|(k, v)| (k, *v)).collect();
                    let expected: BTreeMap<u32, i32> = model.iter().map(|(k, v)| (*k, *v)).collect();
                    prop_assert_eq!(seen, expected);
                }
            }

            let after = sut.stats();
            prop_assert!(table_invariants(&sut));
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(after.probes >= before.probes);
            prop_assert!(after.expansions >= before.expansions);
            if may_grow {
                prop_assert!(after.table_size >= before.table_size);
                prop_assert_eq!(
                    after.table_size != before.table_size,
                    after.expansions == before.expansions + 1
                );
            } else {
                prop_assert_eq!(after.table_size, before.table_size);
                prop_assert_eq!(after.expansions, before.expansions);
                prop_assert_eq!(after.allocations, before.allocations);
            }
        }
    }
}

// Property: after any sequence of distinct inserts, every key is still
// reachable with its value. Growth is one step per insert, so the load
// factor may trail a small maximum; only reachability is asserted.
proptest! {
    #[test]
    fn prop_growth_loses_nothing((size, config) in arb_config(), keys in proptest::collection::btree_set(any::<u32>(), 0..300)) {
        let mut t: ChainedHashTable<u32, u64> = ChainedHashTable::with_config(size, config).unwrap();
        for &k in &keys {
            t.insert(k, u64::from(k) * 3).unwrap();
        }
        prop_assert!(table_invariants(&t));
        prop_assert_eq!(t.len(), keys.len());
        for &k in &keys {
            prop_assert_eq!(t.get(k), Ok(&(u64::from(k) * 3)));
        }
    }
}
