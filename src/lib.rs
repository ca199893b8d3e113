//! Shortcut SSSP - cheapest start-to-exit routes through one shortcut edge
//!
//! This library answers "what is the cheapest route from a start node to any of
//! several exit nodes, when the route must use exactly one of K special shortcut
//! edges, each with its own activation cost?"
//!
//! The solver runs Dijkstra twice over one graph that stores both forward and
//! reverse adjacency: once forward from the start, once backward from a
//! synthetic sink wired to every exit with zero-weight edges. Each shortcut
//! candidate is then priced as `dist(start, trigger) + cost + dist(destination, exit)`.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra,
    route_solver::{Route, RouteSolver, ShortcutCandidate},
    Direction, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::RouteGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight on edge from {0} to {1}")]
    NegativeWeight(usize, usize),

    #[error("Invalid shortcut: trigger {trigger}, destination {destination}")]
    InvalidShortcut { trigger: usize, destination: usize },

    #[error("Negative activation cost on shortcut triggered at {0}")]
    NegativeShortcutCost(usize),

    #[error("Route query needs at least one exit")]
    EmptyExits,

    #[error("Path cost exceeds the range of the weight type")]
    CostOverflow,

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
