//! Strong, zero-cost handle types for the complex.
//!
//! Every simplex is addressed by an opaque [`SimplexId`]; every vertex is
//! named by a [`VertexKey`]. Keys are the only user-visible identifiers:
//! the *name* of a k-simplex is the strictly ascending k-tuple of the
//! vertex keys reachable along its boundary. Handles are cheap to copy,
//! totally ordered, and hashable so they can live in sets and maps.
//!
//! Handles borrow from the complex only logically. A handle obtained
//! before a removal that deletes its node dangles; the library does not
//! detect use-after-remove.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// An integer vertex identifier, drawn from the complex's key allocator.
///
/// # Memory layout
/// `repr(transparent)` over `u64`: same ABI and alignment as the raw
/// integer, so keys can be bulk-copied and hashed at full speed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct VertexKey(u64);

impl VertexKey {
    /// Wraps a raw key value. Any `u64` below `u64::MAX` is a valid key;
    /// whether it is currently *used* is a property of the complex.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        VertexKey(raw)
    }

    /// Returns the underlying raw value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexKey {
    #[inline]
    fn from(raw: u64) -> Self {
        VertexKey(raw)
    }
}

impl From<VertexKey> for u64 {
    #[inline]
    fn from(k: VertexKey) -> Self {
        k.0
    }
}

impl fmt::Debug for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexKey").field(&self.0).finish()
    }
}

/// Prints the numeric key without any wrapper text.
impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simplex name: the strictly ascending tuple of its vertex keys.
///
/// Names up to four keys long (tetrahedra) stay inline.
pub type SimplexName = SmallVec<[VertexKey; 4]>;

/// Internal node identifier, stable for the lifetime of the node.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub(crate) struct NodeId(pub(crate) u64);

/// A handle to a simplex in the complex.
///
/// Ordered by `(dimension, internal id)`; two handles are equal exactly
/// when they address the same node. Dereference payloads through the
/// complex (`complex[id]`), never through the handle alone.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimplexId {
    dim: u32,
    id: NodeId,
}

impl SimplexId {
    #[inline]
    pub(crate) fn new(dim: usize, id: NodeId) -> Self {
        SimplexId { dim: dim as u32, id }
    }

    /// Dimension of the simplex: the number of vertices in its name.
    /// The root has dimension 0.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim as usize
    }

    #[inline]
    pub(crate) fn id(&self) -> NodeId {
        self.id
    }
}

impl fmt::Debug for SimplexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimplexId(dim={}, id={})", self.dim, self.id.0)
    }
}

/// A handle to a single parent→child incidence edge.
///
/// The edge from a k-simplex down to the (k−1)-face obtained by dropping
/// `key`. Identified by its upper endpoint plus the dropped key; compares
/// lexicographically by `(up, key)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct EdgeId {
    up: SimplexId,
    key: VertexKey,
}

impl EdgeId {
    #[inline]
    pub(crate) fn new(up: SimplexId, key: VertexKey) -> Self {
        EdgeId { up, key }
    }

    /// The upper (higher-dimensional) endpoint.
    #[inline]
    pub fn up(&self) -> SimplexId {
        self.up
    }

    /// The key dropped when walking this edge downward.
    #[inline]
    pub fn key(&self) -> VertexKey {
        self.key
    }

    /// Dimension of the upper endpoint.
    #[inline]
    pub fn level(&self) -> usize {
        self.up.dim()
    }
}
