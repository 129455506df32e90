//! Village identifiers and the registry of known villages

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, RouteError};

/// A village name, normalized to uppercase so lookups are case-insensitive
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Node(String);

impl Node {
    /// Normalize a raw name. Returns `None` for names that are empty after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Node(trimmed.to_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Every distinct village in first-seen order.
///
/// Used to validate user-supplied start/end names and as the exhaustion bound
/// for a search (a search that has explored `len()` villages has nothing left).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NodeRegistry {
    order: Vec<Node>,
    #[serde(skip)]
    members: HashSet<Node>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node; returns `true` if it was not seen before
    pub fn insert(&mut self, node: Node) -> bool {
        if self.members.insert(node.clone()) {
            self.order.push(node);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.members.contains(node)
    }

    /// Resolve a user-supplied name against the registry (case-insensitive)
    pub fn resolve(&self, name: &str) -> Result<Node> {
        Node::new(name)
            .filter(|node| self.contains(node))
            .ok_or_else(|| RouteError::unknown_node(name.trim()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.order
    }
}

impl<'a> IntoIterator for &'a NodeRegistry {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
