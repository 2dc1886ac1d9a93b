use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::path::reconstruct_path;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Counters collected while the engine runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, the source included
    pub pushes: usize,

    /// Entries popped from the frontier
    pub pops: usize,

    /// Relaxations that improved a distance
    pub relaxations: usize,

    /// Pops whose priority was worse than the vertex's best distance at that time
    pub stale_pops: usize,

    /// Stale pops that were skipped without relaxing (only with stale skipping on)
    pub skipped: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Distances from source to each known vertex; `None` means not reached
    pub distances: HashMap<V, Option<W>>,

    /// Predecessor of each known vertex in the shortest path tree
    pub predecessors: HashMap<V, Option<V>>,

    /// Source vertex
    pub source: V,

    /// Work done by the search
    pub stats: SearchStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Shortest distance to `vertex`, or `None` if it is unreachable or unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Vertex preceding `vertex` on its shortest path
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|pred| pred.as_ref())
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Shortest path from the source to `target`, or `None` if there is none
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Option<Vec<V>> {
        result.path_to(target)
    }
}
