use std::fmt::Debug;
use log::{debug, trace};
use num_traits::PrimInt;

use crate::algorithm::{Direction, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{Distance, PriorityFrontier};
use crate::graph::{Graph, SearchState};
use crate::{Error, Result};

/// Counters from one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices extracted with a finite distance
    pub settled: usize,
    /// Successful edge relaxations (distance improvements)
    pub relaxations: usize,
}

/// Classic Dijkstra's algorithm over either adjacency direction
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs one search from `source`, writing distances and predecessors for
    /// `direction` into `state`.
    ///
    /// `state` must belong to `graph` and have its distances and finalized flags
    /// cleared (fresh, or after `reset_distances`). `source` may be the sink slot;
    /// in the `Reverse` direction the sink's edges are the exits registered on
    /// the state. Vertices the search cannot reach keep `Unreached` and no
    /// predecessor.
    pub fn run<W, G>(
        &self,
        graph: &G,
        state: &mut SearchState<W>,
        source: usize,
        direction: Direction,
    ) -> Result<SearchStats>
    where
        W: PrimInt + Debug,
        G: Graph<W>,
    {
        if state.slot_count() != graph.vertex_count() + 1 {
            return Err(Error::AlgorithmError(format!(
                "search state has {} slots for a graph of {} vertices",
                state.slot_count(),
                graph.vertex_count()
            )));
        }
        if source >= state.slot_count() {
            return Err(Error::SourceNotFound);
        }

        let mut stats = SearchStats::default();
        let mut frontier: PriorityFrontier<W> = PriorityFrontier::with_vertices(state.slot_count());
        let mut edges: Vec<(usize, W)> = Vec::new();

        state.distances_mut(direction)[source] = Distance::zero();
        frontier.decrease_priority(source, Distance::zero());

        while let Some((distance, u)) = frontier.extract_min() {
            // Everything left is unreachable
            if !distance.is_finite() {
                break;
            }
            state.finalize(u);
            stats.settled += 1;

            edges.clear();
            match direction {
                Direction::Forward => edges.extend(graph.outgoing_edges(u)),
                Direction::Reverse if state.is_sink(u) => {
                    edges.extend(state.sink_edges().iter().map(|&exit| (exit, W::zero())))
                }
                Direction::Reverse => edges.extend(graph.incoming_edges(u)),
            }

            for &(v, weight) in &edges {
                if state.is_finalized(v) {
                    continue;
                }

                let candidate = distance.extend(weight).ok_or(Error::CostOverflow)?;
                if candidate < state.distances(direction)[v] {
                    trace!("relax {} -> {}: {:?}", u, v, candidate);
                    state.distances_mut(direction)[v] = candidate;
                    state.predecessors_mut(direction)[v] = Some(u);
                    frontier.decrease_priority(v, candidate);
                    stats.relaxations += 1;
                }
            }
        }

        debug!(
            "{:?} search from {}: settled {} of {} vertices, {} relaxations",
            direction,
            source,
            stats.settled,
            state.slot_count(),
            stats.relaxations
        );
        Ok(stats)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
        direction: Direction,
    ) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut state = SearchState::new(n);
        self.run(graph, &mut state, source, direction)?;

        Ok(ShortestPathResult {
            distances: state.distances(direction)[..n].iter().map(|d| d.finite()).collect(),
            predecessors: state.predecessors(direction)[..n].to_vec(),
            source,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RouteGraph;

    fn sample_graph() -> RouteGraph<u32> {
        RouteGraph::from_edges(&[(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 7), (4, 0, 1)]).unwrap()
    }

    #[test]
    fn forward_distances_and_predecessors() {
        let graph = sample_graph();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0, Direction::Forward).unwrap();

        assert_eq!(result.distances, vec![Some(0), Some(3), Some(1), Some(4), None]);
        assert_eq!(result.predecessors[1], Some(2));
        assert_eq!(result.predecessors[4], None);
        let path = <Dijkstra as ShortestPathAlgorithm<u32, RouteGraph<u32>>>::get_path(&Dijkstra, &result, 3);
        assert_eq!(path, Some(vec![0, 2, 1, 3]));
    }

    #[test]
    fn reverse_distances_measure_distance_to_source() {
        let graph = sample_graph();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 3, Direction::Reverse).unwrap();

        assert_eq!(result.distances, vec![Some(4), Some(1), Some(3), Some(0), Some(5)]);
        let path = <Dijkstra as ShortestPathAlgorithm<u32, RouteGraph<u32>>>::get_path(&Dijkstra, &result, 4);
        assert_eq!(path, Some(vec![4, 0, 2, 1, 3]));
    }

    #[test]
    fn reverse_run_from_sink_reaches_nearest_exit() {
        let graph = sample_graph();
        let mut state = SearchState::new(graph.vertex_count());
        state.mark_exit(1);
        state.mark_exit(3);
        let sink = state.sink();

        let stats = Dijkstra::new().run(&graph, &mut state, sink, Direction::Reverse).unwrap();

        assert_eq!(stats.settled, 6);
        assert_eq!(state.distance_to_sink(2), Distance::Finite(2));
        assert_eq!(state.distance_to_sink(3), Distance::Finite(0));
        assert_eq!(state.predecessor_toward_sink(1), Some(sink));
        assert_eq!(state.predecessor_toward_sink(2), Some(1));
        assert_eq!(state.distance_to_sink(4), Distance::Finite(4));
    }

    #[test]
    fn unreachable_vertices_are_not_settled() {
        let graph = sample_graph();
        let mut state = SearchState::new(graph.vertex_count());
        let stats = Dijkstra::new().run(&graph, &mut state, 3, Direction::Forward).unwrap();

        assert_eq!(stats.settled, 1);
        assert_eq!(stats.relaxations, 0);
        assert!((0..5).filter(|&v| v != 3).all(|v| !state.is_finalized(v)));
    }

    #[test]
    fn overflowing_relaxation_is_an_error() {
        let graph = RouteGraph::from_edges(&[(0, 1, u8::MAX - 3), (1, 2, 4)]).unwrap();
        let mut state = SearchState::new(graph.vertex_count());
        assert_eq!(
            Dijkstra::new().run(&graph, &mut state, 0, Direction::Forward),
            Err(Error::CostOverflow)
        );
    }

    #[test]
    fn rejects_unknown_source_and_mismatched_state() {
        let graph = sample_graph();
        let result: Result<ShortestPathResult<u32>> =
            Dijkstra::new().compute_shortest_paths(&graph, 9, Direction::Forward);
        assert!(matches!(result, Err(Error::SourceNotFound)));

        let mut state = SearchState::<u32>::new(2);
        assert!(matches!(
            Dijkstra::new().run(&graph, &mut state, 0, Direction::Forward),
            Err(Error::AlgorithmError(_))
        ));
    }
}
