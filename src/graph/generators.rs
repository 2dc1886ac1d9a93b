use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with vertices `0..n` and about
/// `edge_factor * n` edges with integer weights in `0..=max_weight`
///
/// Every vertex is registered, so isolated vertices still appear in
/// `vertices()`. Self-loops and zero weights are allowed. The same seed
/// always yields the same graph.
pub fn random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> AdjacencyGraph<usize, u64> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a random directed graph with real weights in `[0, max_weight)`
pub fn random_float_graph(
    n: usize,
    edge_factor: f64,
    max_weight: f64,
    seed: u64,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 || max_weight <= 0.0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(0.0..max_weight));
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a `width * height` grid with unit-weight edges in both
/// directions between horizontally and vertically adjacent cells
///
/// Cell `(x, y)` is vertex `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> AdjacencyGraph<usize, u64> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, 1);
                graph.add_edge(vertex + 1, vertex, 1);
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, 1);
                graph.add_edge(vertex + width, vertex, 1);
            }
        }
    }

    graph
}
