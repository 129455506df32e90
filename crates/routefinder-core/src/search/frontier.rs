//! Frontier and explored-set bookkeeping shared by both strategies

use std::collections::{HashMap, HashSet, VecDeque};

use crate::node::Node;

/// Position on the depth-first path of the village that pushed an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    pub depth: usize,
    pub node: Node,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: Node,
    /// Set by depth-first expansion; the start entry and breadth-first entries have none
    pub parent: Option<Parent>,
}

impl FrontierEntry {
    pub fn root(node: Node) -> Self {
        Self { node, parent: None }
    }
}

/// Ordered frontier with O(1) membership and O(1) "remove every occurrence".
///
/// Removal tombstones a node by dropping it from `pending`; entries whose node
/// is no longer pending are skipped when popping and hidden from `nodes()`.
/// A removed node never re-enters the frontier because it is explored by then.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: VecDeque<FrontierEntry>,
    /// Live occurrences per node
    pending: HashMap<Node, usize>,
    live: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(node: Node) -> Self {
        let mut frontier = Self::new();
        frontier.push(FrontierEntry::root(node));
        frontier
    }

    /// Append an entry; duplicates of a pending node are allowed
    pub fn push(&mut self, entry: FrontierEntry) {
        *self.pending.entry(entry.node.clone()).or_insert(0) += 1;
        self.live += 1;
        self.entries.push_back(entry);
    }

    /// Append only if the node is not already pending. Returns whether it was added.
    pub fn push_unique(&mut self, entry: FrontierEntry) -> bool {
        if self.is_pending(&entry.node) {
            return false;
        }
        self.push(entry);
        true
    }

    pub fn is_pending(&self, node: &Node) -> bool {
        self.pending.contains_key(node)
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of live entries, duplicates included
    pub fn len(&self) -> usize {
        self.live
    }

    fn is_live(&self, entry: &FrontierEntry) -> bool {
        self.pending.contains_key(&entry.node)
    }

    /// Remove and return the most recently pushed live entry
    pub fn pop_back(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.entries.pop_back() {
            if self.is_live(&entry) {
                self.release_one(&entry.node);
                return Some(entry);
            }
        }
        None
    }

    /// The oldest live entry, without removing it
    pub fn front(&mut self) -> Option<&FrontierEntry> {
        while let Some(entry) = self.entries.front() {
            if self.is_live(entry) {
                break;
            }
            self.entries.pop_front();
        }
        self.entries.front()
    }

    /// Drop every occurrence of `node`
    pub fn remove_all(&mut self, node: &Node) {
        if let Some(count) = self.pending.remove(node) {
            self.live -= count;
        }
        if self.entries.len() > 2 * self.live + 16 {
            self.compact();
        }
    }

    /// Live nodes in queue order (oldest first), duplicates included
    pub fn nodes(&self) -> Vec<Node> {
        self.entries
            .iter()
            .filter(|entry| self.is_live(entry))
            .map(|entry| entry.node.clone())
            .collect()
    }

    fn release_one(&mut self, node: &Node) {
        if let Some(count) = self.pending.get_mut(node) {
            *count -= 1;
            self.live -= 1;
            if *count == 0 {
                self.pending.remove(node);
            }
        }
    }

    fn compact(&mut self) {
        let pending = &self.pending;
        self.entries.retain(|entry| pending.contains_key(&entry.node));
    }
}

/// Explored villages: set for membership, list for visitation order
#[derive(Debug, Clone, Default)]
pub struct Explored {
    order: Vec<Node>,
    seen: HashSet<Node>,
}

impl Explored {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit; returns `false` if the node was already explored
    pub fn insert(&mut self, node: Node) -> bool {
        if self.seen.insert(node.clone()) {
            self.order.push(node);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.seen.contains(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.order
    }
}
