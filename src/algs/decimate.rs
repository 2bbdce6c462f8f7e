//! Metadata-aware decimation: collapse a simplex to a fresh vertex.
//!
//! Collapsing `s` destroys its complete neighborhood — the star of its
//! closure, i.e. every simplex sharing at least one vertex with `s` —
//! and rebuilds the survivors under rewritten names: drop the collapsed
//! vertices, inject the fresh one. Several old simplices can rewrite to
//! the same name; each such equivalence class is handed to a user
//! callback which synthesizes the payload of the merged simplex.
//!
//! The kernel is split so clients can inspect the classes before
//! mutating: [`decimate_first_half`] computes the mapping,
//! [`run_callbacks`] turns it into a rebuild plan, and
//! [`decimate_back_half`] performs the removal and reinsertion.
//! [`decimate`] chains all three.
//!
//! If a callback panics the complex is left in an unspecified state;
//! this is a documented precondition on callbacks, not a recoverable
//! condition.

use crate::algs::queries::{closure_of, star};
use crate::data::LevelData;
use crate::error::CascError;
use crate::sets::{SimplexMap, SimplexSet};
use crate::topology::key::{SimplexId, SimplexName, VertexKey};
use crate::topology::SimplicialComplex;
use smallvec::smallvec;

/// Synthesizes the payload of each merged simplex.
pub trait DecimateCallback<ND: LevelData, ED: LevelData> {
    /// Called once per equivalence class. `new_name` is the post-collapse
    /// name (strictly ascending, containing the fresh vertex), `merged`
    /// the set of old simplices rewriting to it — possibly more than one.
    fn merge(
        &mut self,
        complex: &SimplicialComplex<ND, ED>,
        new_name: &[VertexKey],
        merged: &SimplexSet,
    ) -> ND;
}

/// Any `FnMut(&complex, &new_name, &merged) -> ND` closure is a callback.
impl<ND, ED, F> DecimateCallback<ND, ED> for F
where
    ND: LevelData,
    ED: LevelData,
    F: FnMut(&SimplicialComplex<ND, ED>, &[VertexKey], &SimplexSet) -> ND,
{
    fn merge(
        &mut self,
        complex: &SimplicialComplex<ND, ED>,
        new_name: &[VertexKey],
        merged: &SimplexSet,
    ) -> ND {
        self(complex, new_name, merged)
    }
}

/// The post-callback rebuild: per dimension, the names to insert and the
/// payloads they carry.
#[derive(Clone, Debug)]
pub struct RebuildPlan<ND> {
    levels: Vec<Vec<(SimplexName, ND)>>,
}

impl<ND> RebuildPlan<ND> {
    /// An empty plan for a complex of top dimension `top_dim`.
    pub fn new(top_dim: usize) -> Self {
        RebuildPlan {
            levels: std::iter::repeat_with(Vec::new).take(top_dim + 1).collect(),
        }
    }

    /// Records a simplex to rebuild; the level is the name length.
    pub fn push(&mut self, name: SimplexName, data: ND) {
        let k = name.len();
        self.levels[k].push((name, data));
    }

    /// The entries at name length `k`.
    pub fn level(&self, k: usize) -> &[(SimplexName, ND)] {
        &self.levels[k]
    }
}

/// Collapses `s` to a freshly allocated vertex, synthesizing every
/// surviving payload through `callback`. Returns the new vertex key.
///
/// Fails with [`CascError::Exhausted`] (complex unchanged) if no key is
/// free, and with [`CascError::DecimateRoot`] for the root.
pub fn decimate<ND, ED, C>(
    complex: &mut SimplicialComplex<ND, ED>,
    s: SimplexId,
    mut callback: C,
) -> Result<VertexKey, CascError>
where
    ND: LevelData,
    ED: LevelData,
    C: DecimateCallback<ND, ED>,
{
    let (new_vertex, map) = decimate_first_half(complex, s)?;
    let plan = run_callbacks(complex, &map, &mut callback);
    decimate_back_half(complex, &map, plan);
    Ok(new_vertex)
}

/// Computes the collapse mapping without mutating the diagram: allocates
/// the replacement vertex key and groups the doomed neighborhood by
/// post-collapse name.
pub fn decimate_first_half<ND, ED>(
    complex: &mut SimplicialComplex<ND, ED>,
    s: SimplexId,
) -> Result<(VertexKey, SimplexMap), CascError>
where
    ND: LevelData,
    ED: LevelData,
{
    if s.dim() == 0 {
        return Err(CascError::DecimateRoot);
    }
    let new_vertex = complex.claim_vertex_key()?;
    let base = complex.name(s);

    // Every simplex sharing a vertex with `s`: the star of its closure.
    let neighborhood = star(complex, &closure_of(complex, s));

    let mut map = SimplexMap::new(complex.dim());
    for t in neighborhood.iter() {
        let old = complex.name(t);
        let mut new_name: SimplexName = smallvec![new_vertex];
        new_name.extend(old.iter().copied().filter(|k| !base.contains(k)));
        new_name.sort_unstable();
        map.add(new_name, t);
    }
    tracing::debug!(
        collapsed = %DisplayName(&base),
        new_vertex = %new_vertex,
        doomed = neighborhood.len(),
        classes = map.len(),
        "decimation plan"
    );
    Ok((new_vertex, map))
}

/// Invokes the callback once per equivalence class, name-length
/// ascending, collecting the payloads into a rebuild plan.
pub fn run_callbacks<ND, ED, C>(
    complex: &SimplicialComplex<ND, ED>,
    map: &SimplexMap,
    callback: &mut C,
) -> RebuildPlan<ND>
where
    ND: LevelData,
    ED: LevelData,
    C: DecimateCallback<ND, ED>,
{
    let mut plan = RebuildPlan::new(complex.dim());
    for (name, merged) in map.iter() {
        let data = callback.merge(complex, name, merged);
        plan.push(name.clone(), data);
    }
    plan
}

/// Destroys the doomed neighborhood (top-down, so each removal sweeps
/// exactly one node) and inserts the rebuilt simplices in ascending
/// dimension — the new vertex first — so back-filling always finds its
/// subfaces.
pub fn decimate_back_half<ND, ED>(
    complex: &mut SimplicialComplex<ND, ED>,
    map: &SimplexMap,
    plan: RebuildPlan<ND>,
) where
    ND: LevelData,
    ED: LevelData,
{
    let mut doomed = SimplexSet::new(complex.dim());
    for (_, merged) in map.iter() {
        doomed.insert_all(merged);
    }
    for k in (1..=complex.dim()).rev() {
        let level: Vec<SimplexId> = doomed.level(k).iter().copied().collect();
        for s in level {
            complex.remove(s);
        }
    }
    for k in 1..=complex.dim() {
        for (name, data) in plan.level(k) {
            complex
                .insert_with(name, data.clone())
                .expect("rewritten names are valid by construction");
        }
    }
}

/// Helper to log a name without allocating unless the event is enabled.
struct DisplayName<'a>(&'a [VertexKey]);

impl std::fmt::Display for DisplayName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use itertools::Itertools;
        write!(f, "{{{}}}", self.0.iter().map(|k| k.get()).join(","))
    }
}
