use log::{debug, trace, warn};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Lazy Dijkstra: an insert-only min-heap frontier with no decrease-key
///
/// Every improving relaxation pushes a fresh entry, so the frontier may
/// hold stale entries for a vertex. By default stale pops are processed
/// like any other pop; their relaxations can never pass the `alt < best`
/// test once a better distance has won, so the output is unaffected and
/// the number of pushes is bounded by the number of edges plus one.
///
/// Candidate distances are summed with `Weight::checked_sum`. A candidate
/// that overflows can never beat a representable distance, so it is
/// dropped; if a vertex ends up reachable only through such candidates the
/// search fails with `Error::WeightOverflow`.
///
/// Correct results require non-negative weights. Negative weights are not
/// detected unless weight validation is switched on.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    /// Skip popped entries whose priority exceeds the vertex's best distance
    skip_stale_entries: bool,
    /// Reject graphs containing a negative edge before searching
    validate_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Skip stale frontier entries instead of re-relaxing them
    pub fn with_skip_stale_entries(mut self, enabled: bool) -> Self {
        self.skip_stale_entries = enabled;
        self
    }

    /// Fail with `Error::NegativeWeight` if the graph has a negative edge
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    /// Runs a full search from `source` and returns the distance and path to `target`
    pub fn shortest_path<V, W, G>(
        &self,
        graph: &G,
        source: V,
        target: &V,
    ) -> Result<Option<(W, Vec<V>)>>
    where
        V: Clone + Eq + Hash + Debug,
        W: Weight,
        G: Graph<V, W>,
    {
        let result =
            <Self as ShortestPathAlgorithm<V, W, G>>::compute_shortest_paths(self, graph, source)?;
        Ok(result
            .distance(target)
            .and_then(|distance| result.path_to(target).map(|path| (distance, path))))
    }

    fn check_weights<V, W, G>(graph: &G) -> Result<()>
    where
        V: Clone + Eq + Hash + Debug,
        W: Weight,
        G: Graph<V, W>,
    {
        for from in graph.vertices() {
            for (to, weight) in graph.neighbors(&from) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: format!("{:?}", from),
                        to: format!("{:?}", to),
                        weight: format!("{:?}", weight),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>> {
        if self.validate_weights {
            Self::check_weights(graph)?;
        }

        let n = graph.vertex_count();
        debug!(
            "Dijkstra from {:?} over {} vertices and {} edges",
            source,
            n,
            graph.edge_count()
        );

        // Every known vertex starts unreached; the source may be outside the graph
        let mut distances: HashMap<V, Option<W>> = HashMap::with_capacity(n + 1);
        let mut predecessors: HashMap<V, Option<V>> = HashMap::with_capacity(n + 1);
        for v in graph.vertices() {
            distances.insert(v.clone(), None);
            predecessors.insert(v, None);
        }
        distances.insert(source.clone(), Some(W::zero()));
        predecessors.insert(source.clone(), None);

        let mut overflowed: HashSet<V> = HashSet::new();
        let mut stats = SearchStats::default();
        let mut queue = MinHeap::with_capacity(n.max(1));
        queue.push(source.clone(), W::zero());
        stats.pushes += 1;

        while !queue.is_empty() {
            let (u, priority) = queue.pop_min()?;
            stats.pops += 1;

            let dist_u = distances.get(&u).copied().flatten().ok_or_else(|| {
                Error::AlgorithmError(format!("popped vertex {:?} has no distance", u))
            })?;
            trace!("pop {:?} at priority {:?} (best {:?})", u, priority, dist_u);

            if dist_u < priority {
                stats.stale_pops += 1;
                if self.skip_stale_entries {
                    stats.skipped += 1;
                    continue;
                }
            }

            // Relax all outgoing edges
            for (v, weight) in graph.neighbors(&u) {
                let Some(alt) = dist_u.checked_sum(weight) else {
                    trace!("candidate for {:?} via {:?} overflows", v, u);
                    overflowed.insert(v);
                    continue;
                };

                let should_update = match distances.get(&v).copied().flatten() {
                    None => true,
                    Some(current) => alt < current,
                };

                if should_update {
                    distances.insert(v.clone(), Some(alt));
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push(v, alt);
                    stats.relaxations += 1;
                    stats.pushes += 1;
                }
            }
        }

        if let Some(vertex) = overflowed
            .iter()
            .find(|v| distances.get(*v).copied().flatten().is_none())
        {
            warn!("Dijkstra from {:?} overflowed reaching {:?}", source, vertex);
            return Err(Error::WeightOverflow {
                vertex: format!("{:?}", vertex),
            });
        }

        debug!("Dijkstra from {:?} finished: {:?}", source, stats);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}
