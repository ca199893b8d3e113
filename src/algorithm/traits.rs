use std::fmt::Debug;
use num_traits::PrimInt;
use crate::graph::Graph;
use crate::Result;

/// Which adjacency a search walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow edges as stored: distances are "from the source"
    Forward,
    /// Follow edges backwards: distances are "to the source"
    Reverse,
}

impl Direction {
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// Distances from source to each vertex (to the source, for reverse searches)
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Direction the search walked
    pub direction: Direction,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices,
    /// or from all vertices to the source when `direction` is `Reverse`
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
        direction: Direction,
    ) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path between the source and `target` as a sequence of vertices.
    ///
    /// Forward results give `source..=target`; reverse results give
    /// `target..=source`, i.e. the order in which the edges are travelled.
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.predecessors.len() || result.distances[target].is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != result.source {
            current = result.predecessors[current]?;
            path.push(current);

            // A predecessor chain can never be longer than the vertex count
            if path.len() > result.predecessors.len() {
                log::warn!("predecessor chain from {} does not reach source {}", target, result.source);
                return None;
            }
        }

        if result.direction.is_forward() {
            path.reverse();
        }
        Some(path)
    }
}
