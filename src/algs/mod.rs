//! Algorithms over the complex: traversals, neighborhood queries,
//! orientation, decimation, and diagram export.

pub mod decimate;
pub mod dot;
pub mod orientation;
pub mod queries;
pub mod traversal;

pub use decimate::{
    decimate, decimate_back_half, decimate_first_half, run_callbacks, DecimateCallback,
    RebuildPlan,
};
pub use dot::write_dot;
pub use orientation::{
    check_orientation, clear_orientation, compute_orientation, init_orientation,
    OrientationReport,
};
pub use queries::{closure, closure_of, link, link_of, star, star_of};
pub use traversal::{
    kneighbors, kneighbors_up, neighbors, neighbors_up, visit_bfs_down, visit_bfs_up,
    visit_edges_up, EdgeVisitor, Visitor,
};
