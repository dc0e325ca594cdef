//! Chain: one bucket of the table, kept as an arena-indexed singly linked list.
//!
//! Nodes live in a `SlotMap` owned by the table. A chain records only its
//! head and its length; each node records its successor. Moving a node to
//! another chain rewrites links, never the payload.

use crate::error::TableError;
use crate::key::TableKey;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Arena index of a chain node.
    pub(crate) struct NodeKey;
}

#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    next: Option<NodeKey>,
}

/// Storage shared by every chain of one table.
pub(crate) type Arena<K, V> = SlotMap<NodeKey, Node<K, V>>;

/// Result of a linear scan: what was found, and how many nodes were visited.
#[derive(Debug)]
pub(crate) struct Scan<T> {
    pub(crate) found: Option<T>,
    pub(crate) visited: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Chain {
    head: Option<NodeKey>,
    len: usize,
}

impl Chain {
    pub(crate) const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Scans from the most recently inserted node; stops at the first match.
    pub(crate) fn find<K: TableKey, V>(&self, arena: &Arena<K, V>, key: K) -> Scan<NodeKey> {
        let mut visited = 0;
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = &arena[k];
            visited += 1;
            if node.key == key {
                return Scan {
                    found: Some(k),
                    visited,
                };
            }
            cur = node.next;
        }
        Scan {
            found: None,
            visited,
        }
    }

    /// Allocates a node for `key` and links it at the head.
    pub(crate) fn insert_front<K: TableKey, V>(
        &mut self,
        arena: &mut Arena<K, V>,
        key: K,
        value: V,
    ) -> Result<NodeKey, TableError<K>> {
        if self.find(arena, key).found.is_some() {
            return Err(TableError::DuplicateKey(key));
        }
        Ok(self.push_front(arena, key, value))
    }

    /// Allocates and links a node without scanning; the caller has already
    /// established that `key` is absent from this chain.
    pub(crate) fn push_front<K, V>(
        &mut self,
        arena: &mut Arena<K, V>,
        key: K,
        value: V,
    ) -> NodeKey {
        let node = arena.insert(Node {
            key,
            value,
            next: self.head,
        });
        self.head = Some(node);
        self.len += 1;
        node
    }

    /// Links an existing node at the head. No allocation and no duplicate
    /// check: the caller moves nodes out of a chain that was already unique.
    pub(crate) fn adopt<K, V>(&mut self, arena: &mut Arena<K, V>, node: NodeKey) {
        arena[node].next = self.head;
        self.head = Some(node);
        self.len += 1;
    }

    /// Unlinks the head node and hands it back without freeing it.
    pub(crate) fn detach_front<K, V>(&mut self, arena: &mut Arena<K, V>) -> Option<NodeKey> {
        let head = self.head?;
        self.head = arena[head].next.take();
        self.len -= 1;
        Some(head)
    }

    /// Unlinks and frees the node holding `key`, returning its value.
    pub(crate) fn delete<K: TableKey, V>(&mut self, arena: &mut Arena<K, V>, key: K) -> Scan<V> {
        let mut visited = 0;
        let mut prev: Option<NodeKey> = None;
        let mut cur = self.head;
        while let Some(k) = cur {
            let (node_key, next) = {
                let node = &arena[k];
                (node.key, node.next)
            };
            visited += 1;
            if node_key == key {
                match prev {
                    None => self.head = next,
                    Some(p) => arena[p].next = next,
                }
                self.len -= 1;
                return Scan {
                    found: arena.remove(k).map(|n| n.value),
                    visited,
                };
            }
            prev = Some(k);
            cur = next;
        }
        Scan {
            found: None,
            visited,
        }
    }

    /// Frees every node of this chain.
    pub(crate) fn clear<K, V>(&mut self, arena: &mut Arena<K, V>) {
        while let Some(k) = self.detach_front(arena) {
            arena.remove(k);
        }
    }

    pub(crate) fn iter<'a, K, V>(&self, arena: &'a Arena<K, V>) -> ChainIter<'a, K, V> {
        ChainIter {
            arena,
            cur: self.head,
        }
    }
}

/// Walks one chain head to tail.
pub(crate) struct ChainIter<'a, K, V> {
    arena: &'a Arena<K, V>,
    cur: Option<NodeKey>,
}

impl<'a, K, V> Iterator for ChainIter<'a, K, V> {
    type Item = &'a Node<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.arena[self.cur?];
        self.cur = node.next;
        Some(node)
    }
}
