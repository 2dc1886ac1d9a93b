pub mod dijkstra;
pub mod path;
pub mod traits;

pub use traits::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
