//! DOT (GraphViz) export of the Hasse diagram.
//!
//! Renders every simplex as a node labeled with its name, one rank per
//! dimension, and one arrow per face→coface incidence link. Useful for
//! eyeballing small complexes:
//!
//! ```sh
//! dot -Tpng complex.dot > complex.png
//! ```
//!
//! Diagnostic output only; the exact format is not a stability promise.

use crate::data::LevelData;
use crate::topology::key::SimplexId;
use crate::topology::SimplicialComplex;
use itertools::Itertools;
use std::io::{self, Write};

/// Writes the complex as a GraphViz digraph.
pub fn write_dot<ND, ED, W>(complex: &SimplicialComplex<ND, ED>, out: &mut W) -> io::Result<()>
where
    ND: LevelData,
    ED: LevelData,
    W: Write,
{
    writeln!(out, "digraph hasse {{")?;
    writeln!(out, "    node [shape=record, height=.1];")?;
    writeln!(out, "    splines=line;")?;
    writeln!(out, "    rankdir=BT;")?;
    for k in 0..=complex.dim() {
        let mut ids: Vec<SimplexId> = complex.simplices(k).collect();
        if ids.is_empty() {
            continue;
        }
        ids.sort_by_key(|s| complex.name(*s));
        writeln!(out, "    {{ rank = same;")?;
        for s in ids {
            writeln!(out, "        {} [label=\"{}\"];", node_id(s), label(complex, s))?;
        }
        writeln!(out, "    }}")?;
    }
    for k in 1..=complex.dim() {
        for s in complex.simplices(k) {
            for f in complex.boundary(s) {
                writeln!(out, "    {} -> {};", node_id(f), node_id(s))?;
            }
        }
    }
    writeln!(out, "}}")
}

fn node_id(s: SimplexId) -> String {
    format!("s{}_{}", s.dim(), s.id().0)
}

fn label<ND, ED>(complex: &SimplicialComplex<ND, ED>, s: SimplexId) -> String
where
    ND: LevelData,
    ED: LevelData,
{
    if s.dim() == 0 {
        "root".to_owned()
    } else {
        complex.name(s).iter().map(|k| k.get()).join(",")
    }
}
