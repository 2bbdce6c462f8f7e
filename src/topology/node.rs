//! Per-simplex node records.
//!
//! A node at dimension `k` stores its payload, exactly `k` boundary links
//! (for `k ≥ 1`) and any number of coboundary links. Boundary links carry
//! the per-edge payload and the edge orientation; both link lists are kept
//! sorted by key so names read off in ascending order and lookups are
//! binary searches over short vectors.

use crate::topology::key::{NodeId, SimplexName, VertexKey};

/// One boundary link: the edge from this node down to the face obtained
/// by dropping `key`.
#[derive(Clone, Debug)]
pub(crate) struct DownLink<ED> {
    pub(crate) key: VertexKey,
    pub(crate) node: NodeId,
    pub(crate) data: ED,
    /// Signed boundary-operator parity; 0 until initialized.
    pub(crate) orientation: i8,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<ND, ED> {
    pub(crate) data: ND,
    /// Facet orientation flag; meaningful at the top dimension only.
    pub(crate) orientation: i8,
    /// Sorted by key; length equals the node's dimension.
    pub(crate) down: Vec<DownLink<ED>>,
    /// Sorted by key; empty at the top dimension.
    pub(crate) up: Vec<(VertexKey, NodeId)>,
}

impl<ND, ED> Node<ND, ED> {
    pub(crate) fn new(data: ND) -> Self {
        Node {
            data,
            orientation: 0,
            down: Vec::new(),
            up: Vec::new(),
        }
    }

    pub(crate) fn name(&self) -> SimplexName {
        self.down.iter().map(|l| l.key).collect()
    }

    pub(crate) fn down_get(&self, key: VertexKey) -> Option<NodeId> {
        self.down_link(key).map(|l| l.node)
    }

    pub(crate) fn down_link(&self, key: VertexKey) -> Option<&DownLink<ED>> {
        self.down
            .binary_search_by_key(&key, |l| l.key)
            .ok()
            .map(|i| &self.down[i])
    }

    pub(crate) fn down_link_mut(&mut self, key: VertexKey) -> Option<&mut DownLink<ED>> {
        self.down
            .binary_search_by_key(&key, |l| l.key)
            .ok()
            .map(|i| &mut self.down[i])
    }

    pub(crate) fn down_insert(&mut self, key: VertexKey, node: NodeId, data: ED) {
        match self.down.binary_search_by_key(&key, |l| l.key) {
            Ok(_) => debug_assert!(false, "duplicate boundary key {key}"),
            Err(i) => self.down.insert(
                i,
                DownLink {
                    key,
                    node,
                    data,
                    orientation: 0,
                },
            ),
        }
    }

    pub(crate) fn down_remove(&mut self, key: VertexKey) {
        if let Ok(i) = self.down.binary_search_by_key(&key, |l| l.key) {
            self.down.remove(i);
        }
    }

    pub(crate) fn up_get(&self, key: VertexKey) -> Option<NodeId> {
        self.up
            .binary_search_by_key(&key, |&(k, _)| k)
            .ok()
            .map(|i| self.up[i].1)
    }

    pub(crate) fn up_insert(&mut self, key: VertexKey, node: NodeId) {
        match self.up.binary_search_by_key(&key, |&(k, _)| k) {
            Ok(i) => self.up[i].1 = node,
            Err(i) => self.up.insert(i, (key, node)),
        }
    }

    pub(crate) fn up_remove(&mut self, key: VertexKey) {
        if let Ok(i) = self.up.binary_search_by_key(&key, |&(k, _)| k) {
            self.up.remove(i);
        }
    }
}
