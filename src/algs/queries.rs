//! Star, closure, and link.
//!
//! All three are defined over a [`SimplexSet`] (or a single handle) and
//! composed from the BFS kernel. An aggregator visitor that refuses to
//! expand from already-collected simplices lets the set forms exploit
//! monotonicity: star walks members from the top dimension down (once a
//! simplex is in the result so is its whole up-closure), closure walks
//! bottom-up symmetrically.

use crate::algs::traversal::{visit_bfs_down, visit_bfs_up};
use crate::data::LevelData;
use crate::sets::SimplexSet;
use crate::topology::key::SimplexId;
use crate::topology::SimplicialComplex;

/// All simplices having some member of `set` as a face (members
/// included).
pub fn star<ND, ED>(complex: &SimplicialComplex<ND, ED>, set: &SimplexSet) -> SimplexSet
where
    ND: LevelData,
    ED: LevelData,
{
    let mut dest = SimplexSet::new(complex.dim());
    for k in (0..=complex.dim()).rev() {
        let members: Vec<SimplexId> = set.level(k).iter().copied().collect();
        for s in members {
            if dest.contains(s) {
                continue;
            }
            visit_bfs_up(
                &mut |_: &SimplicialComplex<ND, ED>, t: SimplexId| dest.insert(t),
                complex,
                s,
            );
        }
    }
    dest
}

/// The star of a single simplex.
pub fn star_of<ND, ED>(complex: &SimplicialComplex<ND, ED>, s: SimplexId) -> SimplexSet
where
    ND: LevelData,
    ED: LevelData,
{
    let mut dest = SimplexSet::new(complex.dim());
    visit_bfs_up(
        &mut |_: &SimplicialComplex<ND, ED>, t: SimplexId| dest.insert(t),
        complex,
        s,
    );
    dest
}

/// The smallest subcomplex containing `set`: every face of every member
/// (members included, root excluded).
pub fn closure<ND, ED>(complex: &SimplicialComplex<ND, ED>, set: &SimplexSet) -> SimplexSet
where
    ND: LevelData,
    ED: LevelData,
{
    let mut dest = SimplexSet::new(complex.dim());
    for k in 0..=complex.dim() {
        let members: Vec<SimplexId> = set.level(k).iter().copied().collect();
        for s in members {
            if dest.contains(s) {
                continue;
            }
            visit_bfs_down(
                &mut |_: &SimplicialComplex<ND, ED>, t: SimplexId| dest.insert(t),
                complex,
                s,
            );
        }
    }
    dest
}

/// The closure of a single simplex.
pub fn closure_of<ND, ED>(complex: &SimplicialComplex<ND, ED>, s: SimplexId) -> SimplexSet
where
    ND: LevelData,
    ED: LevelData,
{
    let mut dest = SimplexSet::new(complex.dim());
    visit_bfs_down(
        &mut |_: &SimplicialComplex<ND, ED>, t: SimplexId| dest.insert(t),
        complex,
        s,
    );
    dest
}

/// `link(S) = closure(star(S)) \ star(closure(S))`.
pub fn link<ND, ED>(complex: &SimplicialComplex<ND, ED>, set: &SimplexSet) -> SimplexSet
where
    ND: LevelData,
    ED: LevelData,
{
    let close_star = closure(complex, &star(complex, set));
    let star_close = star(complex, &closure(complex, set));
    close_star.difference(&star_close)
}

/// The link of a single simplex.
pub fn link_of<ND, ED>(complex: &SimplicialComplex<ND, ED>, s: SimplexId) -> SimplexSet
where
    ND: LevelData,
    ED: LevelData,
{
    let mut seed = SimplexSet::new(complex.dim());
    seed.insert(s);
    link(complex, &seed)
}
