//! The dimension-indexed Hasse-diagram store.
//!
//! [`SimplicialComplex`] keeps one table of nodes per dimension, doubly
//! linked so that a k-simplex reaches each of its (k−1)-faces and each of
//! its (k+1)-cofaces in O(1). Insertion materializes the full subsimplex
//! closure and back-fills every missing incidence link; removal cascades
//! upward through all cofaces. Vertex keys are recycled through an
//! interval allocator.
//!
//! The complex is single-threaded: mutators take `&mut self`, queries
//! take `&self`, and nothing blocks or suspends.

use crate::data::LevelData;
use crate::error::CascError;
use crate::topology::index_tracker::IndexTracker;
use crate::topology::invariants::debug_invariants;
use crate::topology::key::{EdgeId, NodeId, SimplexId, SimplexName, VertexKey};
use crate::topology::node::Node;
use hashbrown::{HashMap, HashSet};
use std::ops::{Index, IndexMut};

/// A colored abstract simplicial complex of fixed top dimension.
///
/// Level `k` holds the simplices of `k` vertices; level 0 is the single
/// root (the empty simplex). `ND` is the per-simplex payload, `ED` the
/// per-incidence-edge payload; both are defaulted level-wise when faces
/// are materialized implicitly.
///
/// # Example
/// ```rust
/// use casc_sieve::topology::{SimplicialComplex, VertexKey};
///
/// let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
/// let tri = mesh
///     .insert_with(&[VertexKey::new(1), VertexKey::new(2), VertexKey::new(3)], 7)
///     .unwrap();
/// assert_eq!(mesh.size(1), 3); // vertices materialized implicitly
/// assert_eq!(mesh.size(2), 3); // edges too
/// assert_eq!(mesh[tri], 7);
/// ```
#[derive(Clone, Debug)]
pub struct SimplicialComplex<ND, ED = ()>
where
    ND: LevelData,
    ED: LevelData,
{
    dim: usize,
    levels: Vec<HashMap<NodeId, Node<ND, ED>>>,
    root: NodeId,
    next_node: u64,
    tracker: IndexTracker,
}

impl<ND, ED> SimplicialComplex<ND, ED>
where
    ND: LevelData,
    ED: LevelData,
{
    /// Creates an empty complex of top dimension `dim ≥ 1` containing
    /// only the root.
    ///
    /// # Panics
    /// Panics if `dim == 0`.
    pub fn new(dim: usize) -> Self {
        assert!(dim >= 1, "complex dimension must be at least 1");
        let mut c = SimplicialComplex {
            dim,
            levels: std::iter::repeat_with(HashMap::new).take(dim + 1).collect(),
            root: NodeId(0),
            next_node: 0,
            tracker: IndexTracker::new(),
        };
        c.root = c.create_node(0);
        c
    }

    /// Top dimension: the maximum number of vertices in a simplex.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Handle of the root (empty) simplex.
    #[inline]
    pub fn root(&self) -> SimplexId {
        SimplexId::new(0, self.root)
    }

    /// Number of simplices at dimension `k` (`size(0)` is always 1).
    #[inline]
    pub fn size(&self, k: usize) -> usize {
        self.levels.get(k).map_or(0, HashMap::len)
    }

    /// Total number of nodes across all dimensions, root included.
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(HashMap::len).sum()
    }

    /// Iterates over all simplex handles at dimension `k`.
    ///
    /// Order is unspecified.
    pub fn simplices(&self, k: usize) -> impl Iterator<Item = SimplexId> + '_ {
        self.levels
            .get(k)
            .into_iter()
            .flat_map(move |m| m.keys().map(move |&id| SimplexId::new(k, id)))
    }

    /// Iterates over the payloads of all simplices at dimension `k`.
    pub fn iter_data(&self, k: usize) -> impl Iterator<Item = &ND> + '_ {
        self.levels
            .get(k)
            .into_iter()
            .flat_map(|m| m.values().map(|n| &n.data))
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Inserts the simplex named by `name` together with every non-empty
    /// subset, back-filling all incidence links. Returns the handle of
    /// the top node.
    ///
    /// Keys must be strictly ascending and `name.len() ≤ dim()`. Keys in
    /// `name` are marked used in the allocator. Re-inserting an existing
    /// simplex is a no-op that returns its handle; payloads of existing
    /// nodes are never touched (use [`insert_with`](Self::insert_with) to
    /// overwrite the top payload).
    pub fn insert(&mut self, name: &[VertexKey]) -> Result<SimplexId, CascError> {
        self.validate_name(name)?;
        for &k in name {
            self.tracker.remove(k.get());
        }
        let id = self.insert_closure(self.root, 0, name);
        debug_invariants!(self);
        Ok(SimplexId::new(name.len(), id))
    }

    /// Like [`insert`](Self::insert), but stores `data` on the top
    /// simplex, overwriting any payload it already had. Subsimplex
    /// payloads are default-initialized on creation and left untouched on
    /// re-insertion.
    pub fn insert_with(&mut self, name: &[VertexKey], data: ND) -> Result<SimplexId, CascError> {
        let s = self.insert(name)?;
        self.node_mut(s.dim(), s.id()).data = data;
        Ok(s)
    }

    /// Claims the smallest free key and inserts it as a vertex.
    pub fn add_vertex(&mut self) -> Result<VertexKey, CascError> {
        let key = self.claim_vertex_key()?;
        self.insert(&[key])?;
        Ok(key)
    }

    /// Claims the smallest free key and inserts it as a vertex carrying
    /// `data`.
    pub fn add_vertex_with(&mut self, data: ND) -> Result<VertexKey, CascError> {
        let key = self.claim_vertex_key()?;
        self.insert_with(&[key], data)?;
        Ok(key)
    }

    /// Removes `s` and every simplex that has it as a face, sweeping
    /// upward dimension by dimension. Returns the number of simplices
    /// removed. Removing a vertex returns its key to the allocator.
    ///
    /// The root is never removed; passing it (or an already-removed
    /// handle) returns 0.
    pub fn remove(&mut self, s: SimplexId) -> usize {
        if s.dim() == 0 || !self.contains_node(s) {
            return 0;
        }
        let mut count = 0usize;
        let mut frontier: HashSet<NodeId> = HashSet::new();
        frontier.insert(s.id());
        let mut dim = s.dim();
        while !frontier.is_empty() {
            let mut next = HashSet::new();
            for id in frontier {
                // Cofaces first, the node's links go away with it.
                next.extend(self.levels[dim][&id].up.iter().map(|&(_, n)| n));
                self.remove_node(dim, id);
                count += 1;
            }
            frontier = next;
            dim += 1;
        }
        tracing::trace!(dim = s.dim(), removed = count, "cascading removal");
        debug_invariants!(self);
        count
    }

    /// Removes the simplex named by `name`, if present. See
    /// [`remove`](Self::remove).
    pub fn remove_named(&mut self, name: &[VertexKey]) -> usize {
        match self.get(name) {
            Some(s) => self.remove(s),
            None => 0,
        }
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Resolves a name to a handle by walking up from the root.
    pub fn get(&self, name: &[VertexKey]) -> Option<SimplexId> {
        self.get_up(self.root(), name)
    }

    /// Walks up from `from` adding the keys of `tail` one at a time.
    /// Returns the simplex named `name(from) ∪ tail`, if present.
    pub fn get_up(&self, from: SimplexId, tail: &[VertexKey]) -> Option<SimplexId> {
        let mut cur = from;
        for &k in tail {
            let node = self.levels.get(cur.dim())?.get(&cur.id())?;
            cur = SimplexId::new(cur.dim() + 1, node.up_get(k)?);
        }
        Some(cur)
    }

    /// Walks down from `from` dropping the keys of `drop` one at a time.
    /// Returns the simplex named `name(from) \ drop`, if present.
    pub fn get_down(&self, from: SimplexId, drop: &[VertexKey]) -> Option<SimplexId> {
        let mut cur = from;
        for &k in drop {
            let node = self.levels.get(cur.dim())?.get(&cur.id())?;
            let face = node.down_get(k)?;
            cur = SimplexId::new(cur.dim() - 1, face);
        }
        Some(cur)
    }

    /// True if a simplex with this name is present.
    pub fn exists(&self, name: &[VertexKey]) -> bool {
        self.get(name).is_some()
    }

    /// The name of `s`: its strictly ascending tuple of vertex keys.
    /// The root's name is empty.
    pub fn name(&self, s: SimplexId) -> SimplexName {
        self.node(s.dim(), s.id()).name()
    }

    /// The coboundary keys of `s`: every key `b` such that
    /// `name(s) ∪ {b}` is present.
    pub fn cover(&self, s: SimplexId) -> Vec<VertexKey> {
        self.node(s.dim(), s.id()).up.iter().map(|&(k, _)| k).collect()
    }

    /// The (k−1)-faces of `s`, in key order.
    pub fn boundary(&self, s: SimplexId) -> Vec<SimplexId> {
        self.node(s.dim(), s.id())
            .down
            .iter()
            .map(|l| SimplexId::new(s.dim() - 1, l.node))
            .collect()
    }

    /// The (k+1)-cofaces of `s`, in key order.
    pub fn coboundary(&self, s: SimplexId) -> Vec<SimplexId> {
        self.node(s.dim(), s.id())
            .up
            .iter()
            .map(|&(_, n)| SimplexId::new(s.dim() + 1, n))
            .collect()
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// The incidence edge from the coface `name(s) ∪ {key}` down to `s`.
    pub fn edge_up(&self, s: SimplexId, key: VertexKey) -> Option<EdgeId> {
        let up = self.node(s.dim(), s.id()).up_get(key)?;
        Some(EdgeId::new(SimplexId::new(s.dim() + 1, up), key))
    }

    /// The incidence edge from `s` down to the face dropping `key`.
    pub fn edge_down(&self, s: SimplexId, key: VertexKey) -> Option<EdgeId> {
        self.node(s.dim(), s.id()).down_get(key)?;
        Some(EdgeId::new(s, key))
    }

    /// The lower endpoint of `e`.
    pub fn edge_down_simplex(&self, e: EdgeId) -> Option<SimplexId> {
        let up = e.up();
        let node = self.node(up.dim(), up.id()).down_get(e.key())?;
        Some(SimplexId::new(up.dim() - 1, node))
    }

    /// Payload stored on `e`.
    pub fn edge_data(&self, e: EdgeId) -> Option<&ED> {
        self.node(e.up().dim(), e.up().id())
            .down_link(e.key())
            .map(|l| &l.data)
    }

    /// Mutable payload access for `e`.
    pub fn edge_data_mut(&mut self, e: EdgeId) -> Option<&mut ED> {
        self.node_mut(e.up().dim(), e.up().id())
            .down_link_mut(e.key())
            .map(|l| &mut l.data)
    }

    /// Orientation parity stored on `e` (0 until initialized).
    pub fn edge_orientation(&self, e: EdgeId) -> Option<i8> {
        self.node(e.up().dim(), e.up().id())
            .down_link(e.key())
            .map(|l| l.orientation)
    }

    /// Sets the orientation parity of `e`.
    pub fn set_edge_orientation(&mut self, e: EdgeId, orientation: i8) {
        if let Some(l) = self
            .node_mut(e.up().dim(), e.up().id())
            .down_link_mut(e.key())
        {
            l.orientation = orientation;
        }
    }

    /// Orientation flag of `s` (meaningful on facets).
    pub fn facet_orientation(&self, s: SimplexId) -> i8 {
        self.node(s.dim(), s.id()).orientation
    }

    /// Sets the orientation flag of `s`.
    pub fn set_facet_orientation(&mut self, s: SimplexId, orientation: i8) {
        self.node_mut(s.dim(), s.id()).orientation = orientation;
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// True if `s` lies on the boundary of the complex.
    ///
    /// A (D−1)-simplex is on the boundary iff it has fewer than two
    /// cofacets; a facet iff one of its faces is; anything lower iff some
    /// coface at dimension D−1 is.
    pub fn on_boundary(&self, s: SimplexId) -> bool {
        let bdry = self.dim - 1;
        if s.dim() == bdry {
            return self.node(s.dim(), s.id()).up.len() < 2;
        }
        if s.dim() == self.dim {
            return self
                .boundary(s)
                .into_iter()
                .any(|f| self.node(f.dim(), f.id()).up.len() < 2);
        }
        // BFS up to the (D-1)-stratum.
        let mut frontier: HashSet<NodeId> = HashSet::new();
        frontier.insert(s.id());
        let mut dim = s.dim();
        while dim < bdry {
            let mut next = HashSet::new();
            for id in frontier {
                next.extend(self.levels[dim][&id].up.iter().map(|&(_, n)| n));
            }
            frontier = next;
            dim += 1;
        }
        frontier.into_iter().any(|id| self.levels[bdry][&id].up.len() < 2)
    }

    /// True if any subsimplex of `s` is on the boundary; equivalently,
    /// any of its vertices is.
    pub fn near_boundary(&self, s: SimplexId) -> bool {
        if s.dim() <= 1 {
            return s.dim() == 1 && self.on_boundary(s);
        }
        self.name(s).iter().any(|&v| {
            let vertex = self.get(&[v]).expect("vertex of a live simplex is present");
            self.on_boundary(vertex)
        })
    }

    /// True if `a` is `b` or a face of `b` (name inclusion).
    pub fn leq(&self, a: SimplexId, b: SimplexId) -> bool {
        let na = self.name(a);
        let nb = self.name(b);
        let mut i = 0;
        for &y in nb.iter() {
            if i < na.len() && na[i] == y {
                i += 1;
            }
        }
        i == na.len()
    }

    /// True if `a` is a proper face of `b`.
    pub fn lt(&self, a: SimplexId, b: SimplexId) -> bool {
        a.dim() < b.dim() && self.leq(a, b)
    }

    /// True if `a` and `b` name the same simplex.
    pub fn eq(&self, a: SimplexId, b: SimplexId) -> bool {
        a.dim() == b.dim() && self.name(a) == self.name(b)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    pub(crate) fn claim_vertex_key(&mut self) -> Result<VertexKey, CascError> {
        self.tracker.pop().map(VertexKey::new)
    }

    /// Allocator view (read-only; tests and invariant checks).
    pub fn key_tracker(&self) -> &IndexTracker {
        &self.tracker
    }

    fn contains_node(&self, s: SimplexId) -> bool {
        self.levels
            .get(s.dim())
            .is_some_and(|m| m.contains_key(&s.id()))
    }

    fn node(&self, dim: usize, id: NodeId) -> &Node<ND, ED> {
        self.levels[dim].get(&id).expect("dangling simplex handle")
    }

    fn node_mut(&mut self, dim: usize, id: NodeId) -> &mut Node<ND, ED> {
        self.levels[dim]
            .get_mut(&id)
            .expect("dangling simplex handle")
    }

    fn create_node(&mut self, dim: usize) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.levels[dim].insert(id, Node::new(ND::default_for(dim)));
        id
    }

    fn validate_name(&self, name: &[VertexKey]) -> Result<(), CascError> {
        if name.is_empty() {
            return Err(CascError::EmptyName);
        }
        if name.len() > self.dim {
            return Err(CascError::DimensionOverflow {
                got: name.len(),
                max: self.dim,
            });
        }
        for i in 1..name.len() {
            if name[i - 1] >= name[i] {
                return Err(CascError::UnsortedName(i));
            }
        }
        Ok(())
    }

    /// Inserts under `at` (dimension `at_dim`) every simplex
    /// `name(at) ∪ X` for non-empty `X ⊆ keys`, returning the node for
    /// the full union. Processing keys in ascending order guarantees
    /// every sibling needed by back-fill already exists.
    fn insert_closure(&mut self, at: NodeId, at_dim: usize, keys: &[VertexKey]) -> NodeId {
        let mut last = at;
        for j in 0..keys.len() {
            let child = self.insert_raw(at, at_dim, keys[j]);
            last = self.insert_closure(child, at_dim + 1, &keys[..j]);
        }
        last
    }

    /// Gets or creates the child `name(parent) ∪ {v}`, wiring the direct
    /// link and back-filling all remaining boundary links.
    fn insert_raw(&mut self, parent: NodeId, parent_dim: usize, v: VertexKey) -> NodeId {
        if let Some(existing) = self.levels[parent_dim][&parent].up_get(v) {
            return existing;
        }
        let child_dim = parent_dim + 1;
        let child = self.create_node(child_dim);
        self.node_mut(child_dim, child)
            .down_insert(v, parent, ED::default_for(child_dim));
        self.node_mut(parent_dim, parent).up_insert(v, child);
        self.backfill(parent, parent_dim, child, v);
        child
    }

    /// Connects the fresh node `child = name(parent) ∪ {v}` to every
    /// sibling besides `parent`: for each boundary link `(w, p)` of the
    /// parent, the sibling named `name(parent) \ {w} ∪ {v}` is `p.up[v]`
    /// and must already exist.
    fn backfill(&mut self, parent: NodeId, parent_dim: usize, child: NodeId, v: VertexKey) {
        if parent_dim == 0 {
            return;
        }
        let grand: Vec<(VertexKey, NodeId)> = self.levels[parent_dim][&parent]
            .down
            .iter()
            .map(|l| (l.key, l.node))
            .collect();
        for (w, p) in grand {
            let sibling = self.levels[parent_dim - 1][&p].up_get(v).unwrap_or_else(|| {
                panic!(
                    "back-fill: sibling missing for key {v} under face dropping {w} \
                     (internal inconsistency)"
                )
            });
            self.node_mut(parent_dim + 1, child).down_insert(
                w,
                sibling,
                ED::default_for(parent_dim + 1),
            );
            self.node_mut(parent_dim, sibling).up_insert(w, child);
        }
    }

    /// Detaches and drops one node. Vertex keys go back to the allocator.
    fn remove_node(&mut self, dim: usize, id: NodeId) {
        let node = self.levels[dim]
            .remove(&id)
            .expect("removal frontier holds live nodes");
        for l in &node.down {
            if let Some(p) = self.levels[dim - 1].get_mut(&l.node) {
                p.up_remove(l.key);
            }
            if dim == 1 {
                self.tracker.insert(l.key.get());
            }
        }
        for &(k, c) in &node.up {
            if let Some(ch) = self.levels[dim + 1].get_mut(&c) {
                ch.down_remove(k);
            }
        }
    }

    // ------------------------------------------------------------------
    // Invariant checks
    // ------------------------------------------------------------------

    /// Walks the whole diagram verifying the structural invariants:
    /// mirror consistency of down/up links, sorted distinct names of the
    /// right length, presence of every face, and allocator coherence.
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.size(0) != 1 {
            return Err(format!("expected exactly one root, found {}", self.size(0)));
        }
        for (dim, level) in self.levels.iter().enumerate() {
            for (&id, node) in level {
                if dim >= 1 && node.down.len() != dim {
                    return Err(format!(
                        "node {id:?} at dim {dim} has {} boundary links",
                        node.down.len()
                    ));
                }
                for w in node.down.windows(2) {
                    if w[0].key >= w[1].key {
                        return Err(format!("node {id:?} has unsorted boundary keys"));
                    }
                }
                for l in &node.down {
                    let Some(parent) = self.levels[dim - 1].get(&l.node) else {
                        return Err(format!("node {id:?} points down to a missing node"));
                    };
                    if parent.up_get(l.key) != Some(id) {
                        return Err(format!(
                            "mirror broken: {id:?}.down[{}] not reflected upward",
                            l.key
                        ));
                    }
                    if parent.name().contains(&l.key) {
                        return Err(format!(
                            "face of {id:?} contains its own dropped key {}",
                            l.key
                        ));
                    }
                }
                for &(k, c) in &node.up {
                    let Some(child) = self.levels.get(dim + 1).and_then(|m| m.get(&c)) else {
                        return Err(format!("node {id:?} points up to a missing node"));
                    };
                    if child.down_get(k) != Some(id) {
                        return Err(format!(
                            "mirror broken: {id:?}.up[{k}] not reflected downward"
                        ));
                    }
                }
            }
        }
        for (&id, node) in &self.levels[1] {
            let key = node.down[0].key;
            if self.tracker.contains(key.get()) {
                return Err(format!("vertex {id:?} key {key} still marked free"));
            }
        }
        Ok(())
    }

    #[cfg(any(debug_assertions, feature = "strict-invariants"))]
    pub(crate) fn debug_assert_invariants(&self) {
        if let Err(msg) = self.check_invariants() {
            panic!("structural invariant violated: {msg}");
        }
    }
}

/// Payload access by handle: `&complex[s]`.
impl<ND, ED> Index<SimplexId> for SimplicialComplex<ND, ED>
where
    ND: LevelData,
    ED: LevelData,
{
    type Output = ND;
    fn index(&self, s: SimplexId) -> &ND {
        &self.node(s.dim(), s.id()).data
    }
}

impl<ND, ED> IndexMut<SimplexId> for SimplicialComplex<ND, ED>
where
    ND: LevelData,
    ED: LevelData,
{
    fn index_mut(&mut self, s: SimplexId) -> &mut ND {
        &mut self.node_mut(s.dim(), s.id()).data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vk(raw: &[u64]) -> Vec<VertexKey> {
        raw.iter().map(|&r| VertexKey::new(r)).collect()
    }

    #[test]
    fn default_constructor_has_only_the_root() {
        let mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
        assert_eq!(mesh.size(0), 1);
        assert_eq!(mesh.size(1), 0);
        assert_eq!(mesh.size(2), 0);
        assert_eq!(mesh.size(3), 0);
        assert_eq!(mesh.name(mesh.root()).len(), 0);
    }

    #[test]
    fn insert_materializes_the_closure() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
        for (i, v) in [1u64, 2, 3, 4].into_iter().enumerate() {
            mesh.insert_with(&vk(&[v]), i as i32 + 1).unwrap();
        }
        mesh.insert_with(&vk(&[1, 2, 3]), 5).unwrap();
        mesh.insert_with(&vk(&[2, 3, 4]), 6).unwrap();
        mesh.insert_with(&vk(&[1, 3, 4]), 7).unwrap();
        assert_eq!(mesh.size(0), 1);
        assert_eq!(mesh.size(1), 4);
        assert_eq!(mesh.size(2), 6);
        assert_eq!(mesh.size(3), 3);

        for (name, want) in [
            (vk(&[1]), 1),
            (vk(&[2]), 2),
            (vk(&[3]), 3),
            (vk(&[4]), 4),
            (vk(&[1, 2, 3]), 5),
            (vk(&[2, 3, 4]), 6),
            (vk(&[1, 3, 4]), 7),
        ] {
            let s = mesh.get(&name).unwrap();
            assert_eq!(mesh[s], want);
        }
        mesh.check_invariants().unwrap();
    }

    #[test]
    fn reinsert_keeps_subsimplex_payloads() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
        mesh.insert_with(&vk(&[1, 2, 3]), 5).unwrap();
        let edge = mesh.get(&vk(&[1, 2])).unwrap();
        mesh[edge] = 42;
        // plain re-insert: nothing changes
        mesh.insert(&vk(&[1, 2, 3])).unwrap();
        assert_eq!(mesh[edge], 42);
        let tri = mesh.get(&vk(&[1, 2, 3])).unwrap();
        assert_eq!(mesh[tri], 5);
        // insert_with overwrites only the top payload
        mesh.insert_with(&vk(&[1, 2, 3]), 9).unwrap();
        assert_eq!(mesh[tri], 9);
        assert_eq!(mesh[edge], 42);
    }

    #[test]
    fn relative_navigation_matches_absolute() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
        mesh.insert(&vk(&[1, 2, 3])).unwrap();
        mesh.insert(&vk(&[1, 3, 4])).unwrap();

        let vid = mesh.get(&vk(&[1])).unwrap();
        let eid = mesh.get(&vk(&[1, 3])).unwrap();
        assert_eq!(mesh.get_up(vid, &vk(&[3])), Some(eid));

        let fid = mesh.get(&vk(&[1, 2, 3])).unwrap();
        assert_eq!(mesh.get_up(vid, &vk(&[2, 3])), Some(fid));
        assert_eq!(mesh.get_down(fid, &vk(&[2])), Some(eid));
        assert_eq!(mesh.get_down(fid, &vk(&[2, 3])), Some(vid));
        assert_eq!(mesh.get_up(fid, &vk(&[4])), None);
    }

    #[test]
    fn name_and_cover_read_back() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
        mesh.insert(&vk(&[1, 2, 3])).unwrap();
        let e = mesh.get(&vk(&[1, 3])).unwrap();
        assert_eq!(mesh.name(e).to_vec(), vk(&[1, 3]));
        assert_eq!(mesh.cover(e), vk(&[2]));
        assert_eq!(mesh.boundary(e).len(), 2);
        assert_eq!(mesh.coboundary(e).len(), 1);
    }

    #[test]
    fn malformed_names_are_rejected() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(2);
        assert_eq!(mesh.insert(&[]), Err(CascError::EmptyName));
        assert_eq!(
            mesh.insert(&vk(&[2, 1])),
            Err(CascError::UnsortedName(1))
        );
        assert_eq!(mesh.insert(&vk(&[1, 1])), Err(CascError::UnsortedName(1)));
        assert_eq!(
            mesh.insert(&vk(&[1, 2, 3])),
            Err(CascError::DimensionOverflow { got: 3, max: 2 })
        );
    }

    #[test]
    fn remove_cascades_upward() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
        mesh.insert(&vk(&[1, 2, 3, 4])).unwrap();
        let removed = mesh.remove_named(&vk(&[3, 4]));
        assert_eq!(removed, 4);
        assert_eq!(mesh.size(0), 1);
        assert_eq!(mesh.size(1), 4);
        assert_eq!(mesh.size(2), 5);
        assert_eq!(mesh.size(3), 2);
        assert_eq!(mesh.size(4), 0);
        assert!(!mesh.exists(&vk(&[3, 4])));
        assert!(!mesh.exists(&vk(&[1, 3, 4])));
        assert!(!mesh.exists(&vk(&[1, 2, 3, 4])));
        mesh.check_invariants().unwrap();
    }

    #[test]
    fn remove_by_handle_matches_remove_by_name() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
        mesh.insert(&vk(&[1, 2, 3, 4])).unwrap();
        let s = mesh.get(&vk(&[3, 4])).unwrap();
        assert_eq!(mesh.remove(s), 4);
        assert_eq!(mesh.remove_named(&vk(&[3, 4])), 0);
        assert_eq!(mesh.remove(mesh.root()), 0);
    }

    #[test]
    fn vertex_removal_recycles_keys() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
        mesh.insert(&vk(&[0, 1, 2])).unwrap();
        let v1 = mesh.get(&vk(&[1])).unwrap();
        let removed = mesh.remove(v1);
        // vertex, two edges, one triangle
        assert_eq!(removed, 4);
        assert!(mesh.key_tracker().contains(1));
        assert_eq!(mesh.add_vertex().unwrap(), VertexKey::new(1));
    }

    #[test]
    fn boolean_comparisons() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
        mesh.insert(&vk(&[1, 2, 3, 4])).unwrap();
        let s1 = mesh.get(&vk(&[1])).unwrap();
        let s2 = mesh.get(&vk(&[1, 2])).unwrap();
        let s4 = mesh.get(&vk(&[1, 2, 3, 4])).unwrap();
        assert!(mesh.eq(s1, s1) && mesh.eq(s2, s2) && mesh.eq(s4, s4));
        assert!(!mesh.lt(s2, s1));
        assert!(mesh.lt(s1, s4));
        assert!(mesh.leq(s1, s1));
        assert!(mesh.leq(s1, s2));
        assert!(!mesh.eq(s1, s2));
    }

    #[test]
    fn boundary_predicates_on_a_single_facet() {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
        mesh.insert(&vk(&[1, 2, 3, 4])).unwrap();
        for k in 1..=4 {
            for s in mesh.simplices(k).collect::<Vec<_>>() {
                assert!(mesh.on_boundary(s), "dim {k} should be on the boundary");
                assert!(mesh.near_boundary(s));
            }
        }
        // a second facet sharing face {1,2,3} takes it off the boundary
        mesh.insert(&vk(&[1, 2, 3, 5])).unwrap();
        let shared = mesh.get(&vk(&[1, 2, 3])).unwrap();
        assert!(!mesh.on_boundary(shared));
        let outer = mesh.get(&vk(&[1, 2, 4])).unwrap();
        assert!(mesh.on_boundary(outer));
    }

    #[test]
    fn edge_handles_and_payloads() {
        let mut mesh: SimplicialComplex<i32, i32> = SimplicialComplex::new(3);
        mesh.insert(&vk(&[1, 2, 3])).unwrap();
        let e12 = mesh.get(&vk(&[1, 2])).unwrap();
        let up = mesh.edge_up(e12, VertexKey::new(3)).unwrap();
        assert_eq!(up.level(), 3);
        assert_eq!(mesh.edge_down_simplex(up), Some(e12));
        assert_eq!(mesh.edge_data(up), Some(&0));
        *mesh.edge_data_mut(up).unwrap() = 11;
        assert_eq!(mesh.edge_data(up), Some(&11));

        let down = mesh.edge_down(e12, VertexKey::new(2)).unwrap();
        assert_eq!(down.up(), e12);
        assert_eq!(
            mesh.edge_down_simplex(down),
            Some(mesh.get(&vk(&[1])).unwrap())
        );
        assert_eq!(mesh.edge_up(e12, VertexKey::new(9)), None);
    }
}
