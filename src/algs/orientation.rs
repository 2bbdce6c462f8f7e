//! Orientation of the facet layer.
//!
//! Every parent→child incidence edge carries a parity in `{−1, 0, +1}`
//! derived from the signed boundary operator; every facet carries an
//! orientation flag. [`compute_orientation`] initializes the parities,
//! clears the facets, then flood-fills each connected component of the
//! facet graph, classifying the complex as orientable and/or
//! pseudo-manifold.

use crate::algs::traversal::neighbors_up;
use crate::data::LevelData;
use crate::topology::key::SimplexId;
use crate::topology::SimplicialComplex;
use hashbrown::HashSet;
use std::collections::VecDeque;

/// Result of an orientation sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OrientationReport {
    /// Connected components of the facet-adjacency graph.
    pub components: usize,
    /// True if a consistent ±1 assignment to facets exists.
    pub orientable: bool,
    /// True if every (D−1)-simplex has at most two cofacets.
    pub pseudo_manifold: bool,
}

/// Sets every edge `(n → n.up[a])` below the facet layer to the parity
/// of `a`'s insertion position into `name(n)`.
pub fn init_orientation<ND, ED>(complex: &mut SimplicialComplex<ND, ED>)
where
    ND: LevelData,
    ED: LevelData,
{
    for k in 0..complex.dim() {
        let ids: Vec<SimplexId> = complex.simplices(k).collect();
        for s in ids {
            let name = complex.name(s);
            for a in complex.cover(s) {
                let below = name.iter().take_while(|&&b| b < a).count();
                let orient = if below % 2 == 0 { 1 } else { -1 };
                let e = complex.edge_up(s, a).expect("cover key has an edge");
                complex.set_edge_orientation(e, orient);
            }
        }
    }
}

/// Zeroes the orientation flag of every facet.
pub fn clear_orientation<ND, ED>(complex: &mut SimplicialComplex<ND, ED>)
where
    ND: LevelData,
    ED: LevelData,
{
    let facets: Vec<SimplexId> = complex.simplices(complex.dim()).collect();
    for f in facets {
        complex.set_facet_orientation(f, 0);
    }
}

/// Initializes parities, clears facets, and checks consistency.
pub fn compute_orientation<ND, ED>(complex: &mut SimplicialComplex<ND, ED>) -> OrientationReport
where
    ND: LevelData,
    ED: LevelData,
{
    init_orientation(complex);
    clear_orientation(complex);
    check_orientation(complex)
}

/// Propagates facet orientations across shared (D−1)-faces and verifies
/// consistency. Expects parities initialized and facets cleared.
///
/// Each component's seed facet receives orientation −1; the sign pattern
/// is arbitrary, only the flags are meaningful. A (D−1)-face with three
/// or more cofacets marks the complex non-pseudo-manifold and is not
/// propagated through.
pub fn check_orientation<ND, ED>(complex: &mut SimplicialComplex<ND, ED>) -> OrientationReport
where
    ND: LevelData,
    ED: LevelData,
{
    let bdry = complex.dim() - 1;
    let mut visited: HashSet<SimplexId> = HashSet::new();
    let mut components = 0usize;
    let mut orientable = true;
    let mut pseudo_manifold = true;

    let all: Vec<SimplexId> = complex.simplices(bdry).collect();
    for outer in all {
        if visited.contains(&outer) {
            continue;
        }
        components += 1;
        let mut frontier: VecDeque<SimplexId> = VecDeque::new();
        frontier.push_back(outer);
        while let Some(curr) = frontier.pop_front() {
            if !visited.insert(curr) {
                continue;
            }
            let w = complex.cover(curr);
            match w.len() {
                1 => {} // boundary face, nothing to match up
                2 => {
                    let e0 = complex.edge_up(curr, w[0]).expect("cover edge");
                    let e1 = complex.edge_up(curr, w[1]).expect("cover edge");
                    let f0 = complex.get_up(curr, &[w[0]]).expect("cover facet");
                    let f1 = complex.get_up(curr, &[w[1]]).expect("cover facet");
                    let p0 = complex.edge_orientation(e0).expect("initialized parity");
                    let p1 = complex.edge_orientation(e1).expect("initialized parity");
                    let o0 = complex.facet_orientation(f0);
                    let o1 = complex.facet_orientation(f1);
                    match (o0, o1) {
                        (0, 0) => {
                            complex.set_facet_orientation(f0, -1);
                            complex.set_facet_orientation(f1, -(p1 * p0 * -1));
                        }
                        (0, _) => {
                            complex.set_facet_orientation(f0, -(p0 * p1 * o1));
                        }
                        (_, 0) => {
                            complex.set_facet_orientation(f1, -(p1 * p0 * o0));
                        }
                        _ => {
                            if p0 * o0 + p1 * o1 != 0 {
                                orientable = false;
                            }
                        }
                    }
                    frontier.extend(neighbors_up(complex, curr));
                }
                _ => {
                    pseudo_manifold = false;
                }
            }
        }
    }
    tracing::debug!(components, orientable, pseudo_manifold, "orientation sweep");
    OrientationReport {
        components,
        orientable,
        pseudo_manifold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::VertexKey;

    fn vk(raw: &[u64]) -> Vec<VertexKey> {
        raw.iter().map(|&r| VertexKey::new(r)).collect()
    }

    fn surface(triangles: &[[u64; 3]]) -> SimplicialComplex<i32> {
        let mut mesh = SimplicialComplex::new(3);
        for t in triangles {
            mesh.insert(&vk(t)).unwrap();
        }
        mesh
    }

    #[test]
    fn edge_parities_follow_insertion_position() {
        let mut mesh = surface(&[[1, 2, 3]]);
        init_orientation(&mut mesh);
        let e12 = mesh.get(&vk(&[1, 2])).unwrap();
        let e13 = mesh.get(&vk(&[1, 3])).unwrap();
        let e23 = mesh.get(&vk(&[2, 3])).unwrap();
        // inserting 3 after {1,2}: two smaller keys, parity +1
        let up = mesh.edge_up(e12, VertexKey::new(3)).unwrap();
        assert_eq!(mesh.edge_orientation(up), Some(1));
        // inserting 2 into {1,3}: one smaller key, parity -1
        let up = mesh.edge_up(e13, VertexKey::new(2)).unwrap();
        assert_eq!(mesh.edge_orientation(up), Some(-1));
        // inserting 1 into {2,3}: no smaller key, parity +1
        let up = mesh.edge_up(e23, VertexKey::new(1)).unwrap();
        assert_eq!(mesh.edge_orientation(up), Some(1));
    }

    #[test]
    fn closed_tetrahedron_surface_is_orientable() {
        let mut mesh = surface(&[[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
        let report = compute_orientation(&mut mesh);
        assert_eq!(
            report,
            OrientationReport {
                components: 1,
                orientable: true,
                pseudo_manifold: true
            }
        );
    }

    #[test]
    fn moebius_strip_is_not_orientable() {
        // the 5-triangle Möbius band: one boundary cycle, one twist
        let mut mesh = surface(&[[1, 2, 3], [2, 3, 4], [3, 4, 5], [1, 4, 5], [1, 2, 5]]);
        let report = compute_orientation(&mut mesh);
        assert_eq!(report.components, 1);
        assert!(!report.orientable);
        assert!(report.pseudo_manifold);
    }

    #[test]
    fn disjoint_spheres_count_as_components() {
        let mut mesh = surface(&[
            [0, 1, 2],
            [0, 1, 3],
            [0, 2, 3],
            [1, 2, 3],
            [10, 11, 12],
            [10, 11, 13],
            [10, 12, 13],
            [11, 12, 13],
        ]);
        let report = compute_orientation(&mut mesh);
        assert_eq!(
            report,
            OrientationReport {
                components: 2,
                orientable: true,
                pseudo_manifold: true
            }
        );
    }

    #[test]
    fn three_triangles_on_one_edge_break_pseudo_manifoldness() {
        let mut mesh = surface(&[[1, 2, 3], [1, 2, 4], [1, 2, 5]]);
        let report = compute_orientation(&mut mesh);
        assert!(!report.pseudo_manifold);
    }

    #[test]
    fn report_is_idempotent() {
        let mut mesh = surface(&[[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
        let first = compute_orientation(&mut mesh);
        let second = compute_orientation(&mut mesh);
        assert_eq!(first, second);
    }
}
