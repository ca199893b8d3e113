use std::fmt::Debug;
use num_traits::PrimInt;

use crate::algorithm::Direction;
use crate::data_structures::Distance;

/// Per-query data for one route query over a graph of `n` vertices.
///
/// Slots `0..n` mirror the graph's vertices and slot `n` is the synthetic sink.
/// The sink has no stored edges in the graph; its reverse adjacency is the list
/// of exits registered with [`mark_exit`](SearchState::mark_exit), each at weight zero.
#[derive(Debug, Clone)]
pub struct SearchState<W> {
    distance_from_start: Vec<Distance<W>>,
    distance_to_sink: Vec<Distance<W>>,
    predecessor_from_start: Vec<Option<usize>>,
    predecessor_toward_sink: Vec<Option<usize>>,
    finalized: Vec<bool>,
    is_exit: Vec<bool>,
    sink_edges: Vec<usize>,
}

impl<W> SearchState<W>
where
    W: PrimInt + Debug,
{
    /// Creates a fresh state for a graph with `vertex_count` real vertices
    pub fn new(vertex_count: usize) -> Self {
        let slots = vertex_count + 1;
        SearchState {
            distance_from_start: vec![Distance::Unreached; slots],
            distance_to_sink: vec![Distance::Unreached; slots],
            predecessor_from_start: vec![None; slots],
            predecessor_toward_sink: vec![None; slots],
            finalized: vec![false; slots],
            is_exit: vec![false; slots],
            sink_edges: Vec::new(),
        }
    }

    /// Number of slots, real vertices plus the sink
    pub fn slot_count(&self) -> usize {
        self.finalized.len()
    }

    /// Id of the synthetic sink (one past the last real vertex)
    pub fn sink(&self) -> usize {
        self.slot_count() - 1
    }

    pub fn is_sink(&self, vertex: usize) -> bool {
        vertex == self.sink()
    }

    /// Flags `vertex` as an exit and wires a zero-weight reverse edge from the sink to it
    pub fn mark_exit(&mut self, vertex: usize) {
        if !self.is_exit[vertex] {
            self.is_exit[vertex] = true;
            self.sink_edges.push(vertex);
        }
    }

    pub fn is_exit(&self, vertex: usize) -> bool {
        self.is_exit.get(vertex).copied().unwrap_or(false)
    }

    /// Exits reachable from the sink in the reverse direction
    pub fn sink_edges(&self) -> &[usize] {
        &self.sink_edges
    }

    /// Clears the distances of one direction and every finalized flag, readying
    /// the state for a search in `direction`.
    ///
    /// Distances of the other direction, predecessor links and exit wiring survive.
    pub fn reset_distances(&mut self, direction: Direction) {
        self.distances_mut(direction).fill(Distance::Unreached);
        self.finalized.fill(false);
    }

    /// Returns the state to the freshly-built condition for a new query
    pub fn full_reset(&mut self) {
        self.distance_from_start.fill(Distance::Unreached);
        self.distance_to_sink.fill(Distance::Unreached);
        self.finalized.fill(false);
        self.predecessor_from_start.fill(None);
        self.predecessor_toward_sink.fill(None);
        self.is_exit.fill(false);
        self.sink_edges.clear();
    }

    pub fn distance_from_start(&self, vertex: usize) -> Distance<W> {
        self.distance_from_start[vertex]
    }

    pub fn distance_to_sink(&self, vertex: usize) -> Distance<W> {
        self.distance_to_sink[vertex]
    }

    pub fn predecessor_from_start(&self, vertex: usize) -> Option<usize> {
        self.predecessor_from_start[vertex]
    }

    pub fn predecessor_toward_sink(&self, vertex: usize) -> Option<usize> {
        self.predecessor_toward_sink[vertex]
    }

    pub fn is_finalized(&self, vertex: usize) -> bool {
        self.finalized[vertex]
    }

    pub(crate) fn finalize(&mut self, vertex: usize) {
        self.finalized[vertex] = true;
    }

    /// Distance field written by searches in the given direction
    pub(crate) fn distances_mut(&mut self, direction: Direction) -> &mut [Distance<W>] {
        if direction.is_forward() {
            &mut self.distance_from_start
        } else {
            &mut self.distance_to_sink
        }
    }

    /// Predecessor field written by searches in the given direction
    pub(crate) fn predecessors_mut(&mut self, direction: Direction) -> &mut [Option<usize>] {
        if direction.is_forward() {
            &mut self.predecessor_from_start
        } else {
            &mut self.predecessor_toward_sink
        }
    }

    pub(crate) fn distances(&self, direction: Direction) -> &[Distance<W>] {
        if direction.is_forward() {
            &self.distance_from_start
        } else {
            &self.distance_to_sink
        }
    }

    pub(crate) fn predecessors(&self, direction: Direction) -> &[Option<usize>] {
        if direction.is_forward() {
            &self.predecessor_from_start
        } else {
            &self.predecessor_toward_sink
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_is_the_extra_slot() {
        let state = SearchState::<u32>::new(9);
        assert_eq!(state.slot_count(), 10);
        assert_eq!(state.sink(), 9);
        assert!(state.is_sink(9));
        assert!(state.distance_from_start(9) == Distance::Unreached);
    }

    #[test]
    fn mark_exit_wires_sink_once() {
        let mut state = SearchState::<u32>::new(4);
        state.mark_exit(2);
        state.mark_exit(0);
        state.mark_exit(2);
        assert_eq!(state.sink_edges(), &[2, 0]);
        assert!(state.is_exit(2));
        assert!(!state.is_exit(1));
    }

    #[test]
    fn reset_distances_keeps_links_and_full_reset_clears_them() {
        let mut state = SearchState::<u32>::new(3);
        state.mark_exit(1);
        state.distances_mut(Direction::Forward)[2] = Distance::Finite(5);
        state.predecessors_mut(Direction::Forward)[2] = Some(0);
        state.predecessors_mut(Direction::Reverse)[1] = Some(3);
        state.distances_mut(Direction::Reverse)[1] = Distance::Finite(0);
        state.finalize(2);

        state.reset_distances(Direction::Reverse);
        assert_eq!(state.distance_from_start(2), Distance::Finite(5));
        assert_eq!(state.distance_to_sink(1), Distance::Unreached);
        assert!(!state.is_finalized(2));
        assert_eq!(state.predecessor_from_start(2), Some(0));
        assert_eq!(state.predecessor_toward_sink(1), Some(3));
        assert!(state.is_exit(1));

        state.full_reset();
        assert_eq!(state.distance_from_start(2), Distance::Unreached);
        assert_eq!(state.predecessor_from_start(2), None);
        assert_eq!(state.predecessor_toward_sink(1), None);
        assert!(!state.is_exit(1));
        assert!(state.sink_edges().is_empty());
    }
}
