use crate::graph::traits::{Graph, MutableGraph, Weight};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph keyed by arbitrary vertex labels, using adjacency lists
///
/// Neighbors are kept in edge insertion order and vertices in registration
/// order, so the same construction sequence always yields the same traversal.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Registered vertices in the order they were added
    order: Vec<V>,

    /// Outgoing edges for each registered vertex: vertex -> [(target, weight)]
    adjacency: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `vertices` adjacency entries
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            order: Vec::with_capacity(vertices),
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from `vertex -> [(neighbor, weight)]` entries.
    ///
    /// Each listed vertex is registered even if its adjacency is empty.
    /// Vertices that only appear as neighbors are not registered.
    pub fn from_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, W)>,
    {
        let mut graph = AdjacencyGraph::new();
        for (vertex, neighbors) in entries {
            graph.add_vertex(vertex.clone());
            for (target, weight) in neighbors {
                graph.add_edge(vertex.clone(), target, weight);
            }
        }
        graph
    }

    /// Returns true if any edge weight is below zero
    pub fn has_negative_weight(&self) -> bool {
        self.negative_edge().is_some()
    }

    /// Returns the first edge (in vertex order) with a negative weight
    pub fn negative_edge(&self) -> Option<(&V, &V, W)> {
        self.order.iter().find_map(|vertex| {
            self.adjacency.get(vertex).and_then(|edges| {
                edges
                    .iter()
                    .find(|(_, weight)| *weight < W::zero())
                    .map(|(target, weight)| (vertex, target, *weight))
            })
        })
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, N> FromIterator<(V, N)> for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    N: IntoIterator<Item = (V, W)>,
{
    fn from_iter<I: IntoIterator<Item = (V, N)>>(iter: I) -> Self {
        AdjacencyGraph::from_adjacency(iter)
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new(self.order.iter().cloned())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (V, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        self.order.retain(|v| v != vertex);

        // Drop every edge pointing at the removed vertex
        for edges in self.adjacency.values_mut() {
            edges.retain(|(target, _)| target != vertex);
        }
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(from.clone());
        let edges = self.adjacency.entry(from).or_default();

        // Existing edges keep their position so neighbor order is stable
        if let Some(edge) = edges.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
        } else {
            edges.push((to, weight));
        }
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if let Some(edges) = self.adjacency.get_mut(from) {
            let len_before = edges.len();
            edges.retain(|(target, _)| target != to);
            len_before > edges.len()
        } else {
            false
        }
    }

    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool {
        if let Some(edges) = self.adjacency.get_mut(from) {
            for edge in edges.iter_mut() {
                if edge.0 == *to {
                    edge.1 = weight;
                    return true;
                }
            }
        }
        false
    }
}
