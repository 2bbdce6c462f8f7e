//! Dimension-indexed collections of simplex handles.
//!
//! [`SimplexSet`] is a tuple of hash sets, one per dimension, behaving
//! much like a single set of handles with per-dimension access and the
//! usual set algebra. [`SimplexMap`] maps sorted name tuples to
//! `SimplexSet`s and is what the decimation kernel uses to describe
//! equivalence classes of merged simplices.

use crate::topology::key::{SimplexId, SimplexName};
use hashbrown::HashSet;
use std::collections::BTreeMap;

/// A set of simplex handles, stored per dimension.
///
/// Per-dimension operations are O(1) amortized; whole-set operations are
/// linear in the smaller side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimplexSet {
    levels: Vec<HashSet<SimplexId>>,
}

impl SimplexSet {
    /// An empty set for a complex of top dimension `top_dim`.
    pub fn new(top_dim: usize) -> Self {
        SimplexSet {
            levels: vec![HashSet::new(); top_dim + 1],
        }
    }

    /// Top dimension this set was sized for.
    pub fn top_dim(&self) -> usize {
        self.levels.len() - 1
    }

    /// Inserts a handle; returns true if it was not present.
    pub fn insert(&mut self, s: SimplexId) -> bool {
        self.levels[s.dim()].insert(s)
    }

    /// Removes a handle; returns true if it was present.
    pub fn remove(&mut self, s: SimplexId) -> bool {
        self.levels[s.dim()].remove(&s)
    }

    /// Membership test.
    pub fn contains(&self, s: SimplexId) -> bool {
        self.levels
            .get(s.dim())
            .is_some_and(|l| l.contains(&s))
    }

    /// The handles of dimension `k`.
    pub fn level(&self, k: usize) -> &HashSet<SimplexId> {
        &self.levels[k]
    }

    /// Number of handles at dimension `k`.
    pub fn size(&self, k: usize) -> usize {
        self.levels.get(k).map_or(0, HashSet::len)
    }

    /// Total number of handles across all dimensions.
    pub fn len(&self) -> usize {
        self.levels.iter().map(HashSet::len).sum()
    }

    /// True if no handles are stored.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(HashSet::is_empty)
    }

    /// Drops all handles, keeping the dimension count.
    pub fn clear(&mut self) {
        for l in &mut self.levels {
            l.clear();
        }
    }

    /// Inserts every handle of `other`.
    pub fn insert_all(&mut self, other: &SimplexSet) {
        for (dst, src) in self.levels.iter_mut().zip(&other.levels) {
            dst.extend(src.iter().copied());
        }
    }

    /// Removes every handle of `other`.
    pub fn remove_all(&mut self, other: &SimplexSet) {
        for (dst, src) in self.levels.iter_mut().zip(&other.levels) {
            for s in src {
                dst.remove(s);
            }
        }
    }

    /// `self ∪ other`.
    pub fn union(&self, other: &SimplexSet) -> SimplexSet {
        let mut out = self.clone();
        out.insert_all(other);
        out
    }

    /// `self ∩ other`.
    pub fn intersection(&self, other: &SimplexSet) -> SimplexSet {
        let mut out = SimplexSet::new(self.top_dim());
        for (dst, (a, b)) in out
            .levels
            .iter_mut()
            .zip(self.levels.iter().zip(&other.levels))
        {
            let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
            dst.extend(small.iter().filter(|s| large.contains(*s)).copied());
        }
        out
    }

    /// `self \ other`.
    pub fn difference(&self, other: &SimplexSet) -> SimplexSet {
        let mut out = self.clone();
        out.remove_all(other);
        out
    }

    /// All handles, dimension-ascending; order within a dimension is
    /// unspecified.
    pub fn iter(&self) -> impl Iterator<Item = SimplexId> + '_ {
        self.levels.iter().flat_map(|l| l.iter().copied())
    }
}

/// A map from post-collapse names to the sets of simplices merging into
/// them, stored per dimension of the *new* name. Iteration over each
/// level is in name order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimplexMap {
    top_dim: usize,
    levels: Vec<BTreeMap<SimplexName, SimplexSet>>,
}

impl SimplexMap {
    /// An empty map for a complex of top dimension `top_dim`.
    pub fn new(top_dim: usize) -> Self {
        SimplexMap {
            top_dim,
            levels: std::iter::repeat_with(BTreeMap::new)
                .take(top_dim + 1)
                .collect(),
        }
    }

    /// The classes whose new names have `k` keys.
    pub fn level(&self, k: usize) -> &BTreeMap<SimplexName, SimplexSet> {
        &self.levels[k]
    }

    /// Mutable access to the classes at name length `k`.
    pub fn level_mut(&mut self, k: usize) -> &mut BTreeMap<SimplexName, SimplexSet> {
        &mut self.levels[k]
    }

    /// Records that old simplex `s` maps to `name` after the collapse.
    pub fn add(&mut self, name: SimplexName, s: SimplexId) {
        let top_dim = self.top_dim;
        self.levels[name.len()]
            .entry(name)
            .or_insert_with(|| SimplexSet::new(top_dim))
            .insert(s);
    }

    /// Number of equivalence classes across all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(BTreeMap::len).sum()
    }

    /// True if no classes are recorded.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(BTreeMap::is_empty)
    }

    /// All `(new_name, merged)` classes, name-length ascending.
    pub fn iter(&self) -> impl Iterator<Item = (&SimplexName, &SimplexSet)> + '_ {
        self.levels.iter().flat_map(|l| l.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::SimplicialComplex;
    use crate::topology::VertexKey;

    fn vk(raw: &[u64]) -> Vec<VertexKey> {
        raw.iter().map(|&r| VertexKey::new(r)).collect()
    }

    fn fixture() -> (SimplicialComplex<i32>, Vec<SimplexId>) {
        let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
        mesh.insert(&vk(&[1, 2, 3])).unwrap();
        mesh.insert(&vk(&[2, 3, 4])).unwrap();
        let handles = vec![
            mesh.get(&vk(&[1])).unwrap(),
            mesh.get(&vk(&[2, 3])).unwrap(),
            mesh.get(&vk(&[1, 2, 3])).unwrap(),
            mesh.get(&vk(&[2, 3, 4])).unwrap(),
        ];
        (mesh, handles)
    }

    #[test]
    fn insert_erase_find() {
        let (mesh, hs) = fixture();
        let mut set = SimplexSet::new(mesh.dim());
        assert!(set.is_empty());
        for &h in &hs {
            assert!(set.insert(h));
        }
        assert!(!set.insert(hs[0]));
        assert_eq!(set.len(), 4);
        assert_eq!(set.size(3), 2);
        assert!(set.contains(hs[1]));
        assert!(set.remove(hs[1]));
        assert!(!set.contains(hs[1]));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn union_is_commutative() {
        let (mesh, hs) = fixture();
        let mut a = SimplexSet::new(mesh.dim());
        let mut b = SimplexSet::new(mesh.dim());
        a.insert(hs[0]);
        a.insert(hs[2]);
        b.insert(hs[2]);
        b.insert(hs[3]);
        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&b).len(), 3);
    }

    #[test]
    fn intersection_is_contained_in_both() {
        let (mesh, hs) = fixture();
        let mut a = SimplexSet::new(mesh.dim());
        let mut b = SimplexSet::new(mesh.dim());
        a.insert(hs[0]);
        a.insert(hs[2]);
        b.insert(hs[2]);
        b.insert(hs[3]);
        let i = a.intersection(&b);
        assert_eq!(i.len(), 1);
        assert!(i.iter().all(|s| a.contains(s) && b.contains(s)));
    }

    #[test]
    fn self_difference_is_empty() {
        let (mesh, hs) = fixture();
        let mut a = SimplexSet::new(mesh.dim());
        for &h in &hs {
            a.insert(h);
        }
        assert!(a.difference(&a).is_empty());
        let empty = SimplexSet::new(mesh.dim());
        assert_eq!(a.difference(&empty), a);
    }

    #[test]
    fn map_groups_by_name() {
        let (mesh, hs) = fixture();
        let mut map = SimplexMap::new(mesh.dim());
        let name: SimplexName = vk(&[7, 9]).into_iter().collect();
        map.add(name.clone(), hs[2]);
        map.add(name.clone(), hs[3]);
        assert_eq!(map.len(), 1);
        let class = map.level(2).get(&name).unwrap();
        assert_eq!(class.len(), 2);
        assert!(class.contains(hs[2]) && class.contains(hs[3]));
    }
}
