//! Breadth-first traversals over the Hasse diagram.
//!
//! Traversals are driven by a user [`Visitor`]: each reachable simplex is
//! visited exactly once, in nondecreasing dimension for
//! [`visit_bfs_up`] and nonincreasing dimension for [`visit_bfs_down`].
//! Frontiers are hash sets, so ordering between co-equal frontier members
//! is unspecified.
//!
//! Returning `false` from a visitor means "do not expand from this
//! simplex" — other members of the same frontier are still visited, and
//! simplices reachable through siblings are still reached.

use crate::data::LevelData;
use crate::topology::key::{EdgeId, SimplexId};
use crate::topology::SimplicialComplex;
use hashbrown::HashSet;

/// Visits simplices during a BFS; the return value gates expansion.
pub trait Visitor<ND: LevelData, ED: LevelData> {
    fn visit(&mut self, complex: &SimplicialComplex<ND, ED>, simplex: SimplexId) -> bool;
}

/// Any `FnMut(&complex, simplex) -> bool` closure is a visitor.
impl<ND, ED, F> Visitor<ND, ED> for F
where
    ND: LevelData,
    ED: LevelData,
    F: FnMut(&SimplicialComplex<ND, ED>, SimplexId) -> bool,
{
    fn visit(&mut self, complex: &SimplicialComplex<ND, ED>, simplex: SimplexId) -> bool {
        self(complex, simplex)
    }
}

/// Visits incidence edges during an edge BFS.
pub trait EdgeVisitor<ND: LevelData, ED: LevelData> {
    fn visit(&mut self, complex: &SimplicialComplex<ND, ED>, edge: EdgeId);
}

impl<ND, ED, F> EdgeVisitor<ND, ED> for F
where
    ND: LevelData,
    ED: LevelData,
    F: FnMut(&SimplicialComplex<ND, ED>, EdgeId),
{
    fn visit(&mut self, complex: &SimplicialComplex<ND, ED>, edge: EdgeId) {
        self(complex, edge)
    }
}

/// BFS through cofaces, dimension by dimension, up to the facets.
pub fn visit_bfs_up<ND, ED, V>(
    visitor: &mut V,
    complex: &SimplicialComplex<ND, ED>,
    start: SimplexId,
) where
    ND: LevelData,
    ED: LevelData,
    V: Visitor<ND, ED>,
{
    let mut frontier: HashSet<SimplexId> = HashSet::new();
    frontier.insert(start);
    let mut dim = start.dim();
    while !frontier.is_empty() {
        let mut next = HashSet::new();
        for s in frontier {
            if visitor.visit(complex, s) && dim < complex.dim() {
                next.extend(complex.coboundary(s));
            }
        }
        frontier = next;
        dim += 1;
    }
}

/// BFS through faces, dimension by dimension, down to the vertices.
/// The root is not visited.
pub fn visit_bfs_down<ND, ED, V>(
    visitor: &mut V,
    complex: &SimplicialComplex<ND, ED>,
    start: SimplexId,
) where
    ND: LevelData,
    ED: LevelData,
    V: Visitor<ND, ED>,
{
    let mut frontier: HashSet<SimplexId> = HashSet::new();
    frontier.insert(start);
    let mut dim = start.dim();
    while !frontier.is_empty() {
        let mut next = HashSet::new();
        for s in frontier {
            if visitor.visit(complex, s) && dim > 1 {
                next.extend(complex.boundary(s));
            }
        }
        frontier = next;
        if dim == 0 {
            break;
        }
        dim -= 1;
    }
}

/// BFS over incidence edges: from `start`, each level collects the edges
/// from the current upper endpoints into their cofaces.
pub fn visit_edges_up<ND, ED, V>(
    visitor: &mut V,
    complex: &SimplicialComplex<ND, ED>,
    start: EdgeId,
) where
    ND: LevelData,
    ED: LevelData,
    V: EdgeVisitor<ND, ED>,
{
    let mut frontier: HashSet<EdgeId> = HashSet::new();
    frontier.insert(start);
    while !frontier.is_empty() {
        let mut next = HashSet::new();
        for e in frontier {
            visitor.visit(complex, e);
            let n = e.up();
            if n.dim() < complex.dim() {
                for a in complex.cover(n) {
                    next.insert(complex.edge_up(n, a).expect("cover key has an edge"));
                }
            }
        }
        frontier = next;
    }
}

/// The simplices sharing at least one boundary face with `s`, excluding
/// `s` itself. Deduplicated; order unspecified.
///
/// For vertices the shared "face" is the root, so every other vertex is
/// a neighbor.
pub fn neighbors<ND, ED>(complex: &SimplicialComplex<ND, ED>, s: SimplexId) -> Vec<SimplexId>
where
    ND: LevelData,
    ED: LevelData,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for &a in complex.name(s).iter() {
        let face = complex
            .get_down(s, &[a])
            .expect("face of a live simplex is present");
        for b in complex.cover(face) {
            let nbor = complex.get_up(face, &[b]).expect("cover key resolves");
            if nbor != s && seen.insert(nbor) {
                out.push(nbor);
            }
        }
    }
    out
}

/// The simplices sharing at least one coboundary simplex with `s`,
/// excluding `s` itself. Deduplicated; order unspecified.
pub fn neighbors_up<ND, ED>(complex: &SimplicialComplex<ND, ED>, s: SimplexId) -> Vec<SimplexId>
where
    ND: LevelData,
    ED: LevelData,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for a in complex.cover(s) {
        let coface = complex.get_up(s, &[a]).expect("cover key resolves");
        for &b in complex.name(coface).iter() {
            let nbor = complex
                .get_down(coface, &[b])
                .expect("face of a live simplex is present");
            if nbor != s && seen.insert(nbor) {
                out.push(nbor);
            }
        }
    }
    out
}

/// The `rings`-ring face-sharing neighborhood of `s`, excluding `s`.
pub fn kneighbors<ND, ED>(
    complex: &SimplicialComplex<ND, ED>,
    s: SimplexId,
    rings: usize,
) -> HashSet<SimplexId>
where
    ND: LevelData,
    ED: LevelData,
{
    kneighbors_impl(complex, s, rings, neighbors)
}

/// The `rings`-ring coface-sharing neighborhood of `s`, excluding `s`.
pub fn kneighbors_up<ND, ED>(
    complex: &SimplicialComplex<ND, ED>,
    s: SimplexId,
    rings: usize,
) -> HashSet<SimplexId>
where
    ND: LevelData,
    ED: LevelData,
{
    kneighbors_impl(complex, s, rings, neighbors_up)
}

fn kneighbors_impl<ND, ED>(
    complex: &SimplicialComplex<ND, ED>,
    s: SimplexId,
    rings: usize,
    expand: fn(&SimplicialComplex<ND, ED>, SimplexId) -> Vec<SimplexId>,
) -> HashSet<SimplexId>
where
    ND: LevelData,
    ED: LevelData,
{
    let mut nbors: HashSet<SimplexId> = HashSet::new();
    nbors.insert(s);
    let mut frontier: Vec<SimplexId> = vec![s];
    for _ in 0..rings {
        let mut next = Vec::new();
        for &n in &frontier {
            for nbor in expand(complex, n) {
                if nbors.insert(nbor) {
                    next.push(nbor);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    nbors.remove(&s);
    nbors
}
