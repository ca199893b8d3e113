pub mod traits;
pub mod dijkstra;
pub mod route_solver;

pub use traits::{Direction, ShortestPathAlgorithm, ShortestPathResult};
