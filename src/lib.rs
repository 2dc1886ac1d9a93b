//! Dijkstra Paths - Single-Source Shortest Paths with Path Reconstruction
//!
//! This library computes single-source shortest paths on directed graphs with
//! non-negative edge weights using a lazy Dijkstra: an insert-only binary
//! min-heap that tolerates stale entries instead of supporting decrease-key.
//!
//! ```
//! use dijkstra_paths::{reconstruct_path, shortest_paths, AdjacencyGraph};
//!
//! let graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::from_adjacency([
//!     ("A", vec![("B", 2), ("C", 3)]),
//!     ("B", vec![("C", 1), ("D", 1)]),
//!     ("C", vec![("D", 4)]),
//!     ("D", vec![("C", 2)]),
//! ]);
//!
//! let result = shortest_paths(&graph, "A").unwrap();
//! assert_eq!(result.distance(&"D"), Some(3));
//! assert_eq!(
//!     reconstruct_path(&result.predecessors, &"A", &"D"),
//!     Some(vec!["A", "B", "D"])
//! );
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

use std::fmt::Debug;
use std::hash::Hash;

pub use algorithm::{
    dijkstra::Dijkstra, path::reconstruct_path, SearchStats, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use data_structures::MinHeap;
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, MutableGraph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Attempted to pop from an empty priority queue")]
    EmptyQueuePop,

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Shortest distance to {vertex} does not fit in the weight type")]
    WeightOverflow { vertex: String },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes shortest paths from `source` with the default (lazy, non-validating) engine.
pub fn shortest_paths<V, W, G>(graph: &G, source: V) -> Result<ShortestPathResult<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<V, W>,
{
    <Dijkstra as ShortestPathAlgorithm<V, W, G>>::compute_shortest_paths(
        &Dijkstra::new(),
        graph,
        source,
    )
}
