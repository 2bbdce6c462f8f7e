//! # casc-sieve
//!
//! casc-sieve is an in-memory library for **colored abstract simplicial
//! complexes**: simplicial complexes of arbitrary (but fixed at
//! construction) dimension where every simplex and every face→coface
//! incidence edge can carry a user payload. The complex is stored as a
//! dimension-indexed, doubly-linked Hasse diagram, so navigating from a
//! k-simplex to any of its (k−1)-faces or (k+1)-cofaces is O(1).
//!
//! ## Features
//! - Closure-complete insertion: inserting `{1,2,3}` materializes every
//!   subsimplex and back-fills all incidence links exactly once
//! - Cascading removal through all cofaces, with vertex-key recycling
//!   via an interval allocator
//! - Generic breadth-first visitors running up, down, or along the
//!   incidence edges of the diagram
//! - Combinatorial neighborhoods: `star`, `closure`, `link`, face and
//!   coface neighbors, k-ring expansion
//! - Orientation: signed boundary parities on edges plus a facet sweep
//!   classifying (components, orientable, pseudo-manifold)
//! - Metadata-aware decimation: collapse any simplex to a fresh vertex
//!   while user callbacks synthesize the payloads of merged survivors
//! - DOT export of the diagram for quick visual inspection
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! casc-sieve = "0.2"
//! ```
//!
//! ```rust
//! use casc_sieve::algs::{compute_orientation, link_of};
//! use casc_sieve::topology::{SimplicialComplex, VertexKey};
//!
//! // a triangle mesh: payloads are i32 per simplex, no edge payloads
//! let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
//! let k = |raw: u64| VertexKey::new(raw);
//! mesh.insert(&[k(0), k(1), k(2)]).unwrap();
//! mesh.insert(&[k(1), k(2), k(3)]).unwrap();
//!
//! let shared = mesh.get(&[k(1), k(2)]).unwrap();
//! assert_eq!(link_of(&mesh, shared).len(), 2); // the opposite vertices
//! assert!(compute_orientation(&mut mesh).orientable);
//! ```
//!
//! ## Concurrency
//! The core is single-threaded and non-reentrant: mutators take
//! `&mut self`, queries take `&self`, and every operation completes
//! before returning. Handles are plain copyable identifiers — one
//! obtained before a removal that deletes its node must not be used
//! again.

pub mod algs;
pub mod data;
pub mod error;
pub mod sets;
pub mod topology;

pub use data::LevelData;
pub use error::CascError;
pub use sets::{SimplexMap, SimplexSet};
pub use topology::{EdgeId, SimplexId, SimplexName, SimplicialComplex, VertexKey};
