use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;

/// Edge weight usable by the shortest path engine.
///
/// Weights need a total order and an additive identity. Integers qualify
/// directly; real weights go through `ordered_float::OrderedFloat`.
pub trait Weight: Copy + Debug + Ord + Zero {
    /// Sum of two path costs, or `None` if it does not fit in the type
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums saturate at infinity instead of wrapping
impl Weight for OrderedFloat<f32> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Weight for OrderedFloat<f64> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Returns the number of registered vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the registered vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex.
    ///
    /// A vertex without an adjacency entry has no outgoing edges.
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (V, W)> + '_>;

    /// Returns true if the vertex has its own adjacency entry
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from).any(|(target, _)| target == *to)
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.neighbors(from)
            .find(|(target, _)| target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Registers a vertex; returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex, its outgoing edges, and every edge pointing at it
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Adds a directed edge, or overwrites the weight of an existing one
    fn add_edge(&mut self, from: V, to: V, weight: W);

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool;
}
