use std::fmt::Debug;
use log::{debug, trace};
use num_traits::PrimInt;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::Direction;
use crate::data_structures::Distance;
use crate::graph::{Graph, RouteGraph, SearchState};
use crate::{Error, Result};

/// A one-time shortcut: from `trigger`, pay `cost` and continue at `destination`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortcutCandidate<W> {
    pub trigger: usize,
    pub cost: W,
    pub destination: usize,
}

impl<W> ShortcutCandidate<W> {
    pub fn new(trigger: usize, cost: W, destination: usize) -> Self {
        ShortcutCandidate {
            trigger,
            cost,
            destination,
        }
    }
}

impl<W> From<(usize, W, usize)> for ShortcutCandidate<W> {
    fn from((trigger, cost, destination): (usize, W, usize)) -> Self {
        ShortcutCandidate::new(trigger, cost, destination)
    }
}

/// A solved route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<W> {
    /// Edge weights along the path plus the shortcut's activation cost
    pub cost: W,

    /// Vertices from the start to the reached exit; the shortcut is taken
    /// between `shortcut.trigger` and `shortcut.destination`
    pub path: Vec<usize>,

    /// The shortcut this route uses
    pub shortcut: ShortcutCandidate<W>,
}

impl<W> Route<W> {
    /// The exit the route ends at, `None` for an empty path
    pub fn exit(&self) -> Option<usize> {
        self.path.last().copied()
    }
}

/// Finds the cheapest route from a start vertex to any exit that uses exactly one
/// shortcut candidate.
///
/// The graph and candidates are fixed at construction. Each [`solve`](RouteSolver::solve)
/// works on its own [`SearchState`], so one solver can serve many queries.
#[derive(Debug, Clone)]
pub struct RouteSolver<W>
where
    W: PrimInt + Debug,
{
    graph: RouteGraph<W>,
    shortcuts: Vec<ShortcutCandidate<W>>,
    engine: Dijkstra,
}

impl<W> RouteSolver<W>
where
    W: PrimInt + Debug,
{
    /// Creates a solver, checking every shortcut against the graph
    pub fn new(graph: RouteGraph<W>, shortcuts: Vec<ShortcutCandidate<W>>) -> Result<Self> {
        for shortcut in &shortcuts {
            if !graph.has_vertex(shortcut.trigger) || !graph.has_vertex(shortcut.destination) {
                return Err(Error::InvalidShortcut {
                    trigger: shortcut.trigger,
                    destination: shortcut.destination,
                });
            }
            if shortcut.cost < W::zero() {
                return Err(Error::NegativeShortcutCost(shortcut.trigger));
            }
        }

        Ok(RouteSolver {
            graph,
            shortcuts,
            engine: Dijkstra::new(),
        })
    }

    /// Builds the graph from `(from, to, weight)` triples and creates a solver.
    ///
    /// Vertex ids are `0..=max id` seen across edges and shortcut endpoints.
    pub fn from_edges(edges: &[(usize, usize, W)], shortcuts: &[ShortcutCandidate<W>]) -> Result<Self> {
        let mut vertices = 0;
        let endpoints = edges
            .iter()
            .map(|&(from, to, _)| from.max(to))
            .chain(shortcuts.iter().map(|s| s.trigger.max(s.destination)));
        for id in endpoints {
            let count = id.checked_add(1).ok_or(Error::InvalidVertex(id))?;
            vertices = vertices.max(count);
        }

        let mut graph = RouteGraph::with_vertices(vertices);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        RouteSolver::new(graph, shortcuts.to_vec())
    }

    pub fn graph(&self) -> &RouteGraph<W> {
        &self.graph
    }

    pub fn shortcuts(&self) -> &[ShortcutCandidate<W>] {
        &self.shortcuts
    }

    /// Solves one query.
    ///
    /// Returns `Ok(None)` when no shortcut has a trigger reachable from `start`
    /// and a destination that reaches an exit. Among equally cheap shortcuts the
    /// one listed first wins.
    ///
    /// # Errors
    ///
    /// `EmptyExits` for an empty exit list and `InvalidVertex` for a start or exit
    /// outside the graph. No search runs when the query is rejected.
    /// `CostOverflow` when a path or candidate total does not fit in `W`.
    pub fn solve(&self, start: usize, exits: &[usize]) -> Result<Option<Route<W>>> {
        if !self.graph.has_vertex(start) {
            return Err(Error::InvalidVertex(start));
        }
        if exits.is_empty() {
            return Err(Error::EmptyExits);
        }
        if let Some(&exit) = exits.iter().find(|&&exit| !self.graph.has_vertex(exit)) {
            return Err(Error::InvalidVertex(exit));
        }

        let mut state = SearchState::new(self.graph.vertex_count());
        state.full_reset();
        self.engine.run(&self.graph, &mut state, start, Direction::Forward)?;

        state.reset_distances(Direction::Reverse);
        for &exit in exits {
            state.mark_exit(exit);
        }
        let sink = state.sink();
        self.engine.run(&self.graph, &mut state, sink, Direction::Reverse)?;

        let Some((shortcut, total)) = self.cheapest_shortcut(&state, start)? else {
            debug!("no usable shortcut from {} to exits {:?}", start, exits);
            return Ok(None);
        };

        let cost = total.finite().ok_or_else(|| {
            Error::AlgorithmError("selected shortcut has no finite cost".to_string())
        })?;
        let path = self.reconstruct(&state, start, &shortcut)?;

        debug!(
            "route from {} costs {:?} via shortcut {} -> {}: {:?}",
            start, cost, shortcut.trigger, shortcut.destination, path
        );
        Ok(Some(Route { cost, path, shortcut }))
    }

    /// Prices every usable candidate; the first strictly cheapest one wins.
    ///
    /// A usable candidate whose total does not fit in `W` is a `CostOverflow`.
    fn cheapest_shortcut(
        &self,
        state: &SearchState<W>,
        start: usize,
    ) -> Result<Option<(ShortcutCandidate<W>, Distance<W>)>> {
        let mut best: Option<(ShortcutCandidate<W>, Distance<W>)> = None;

        for shortcut in &self.shortcuts {
            let to_trigger = if shortcut.trigger == start {
                Distance::zero()
            } else {
                state.distance_from_start(shortcut.trigger)
            };
            let to_exit = if state.is_exit(shortcut.destination) {
                Distance::zero()
            } else {
                state.distance_to_sink(shortcut.destination)
            };

            let Some(exit_distance) = to_exit.finite() else {
                trace!("skip shortcut {:?}: destination reaches no exit", shortcut);
                continue;
            };
            if !to_trigger.is_finite() {
                trace!("skip shortcut {:?}: trigger unreachable", shortcut);
                continue;
            }

            let total = to_trigger
                .extend(shortcut.cost)
                .and_then(|partial| partial.extend(exit_distance))
                .ok_or(Error::CostOverflow)?;
            if best.map_or(true, |(_, best_total)| total < best_total) {
                best = Some((*shortcut, total));
            }
        }

        Ok(best)
    }

    /// Joins start..=trigger (forward predecessors) with destination..=exit
    /// (predecessors toward the sink). The sink never appears in the result.
    fn reconstruct(
        &self,
        state: &SearchState<W>,
        start: usize,
        shortcut: &ShortcutCandidate<W>,
    ) -> Result<Vec<usize>> {
        let broken = |vertex: usize| {
            Error::AlgorithmError(format!("predecessor chain broken at vertex {}", vertex))
        };

        let mut path = vec![shortcut.trigger];
        let mut current = shortcut.trigger;
        while current != start {
            current = state.predecessor_from_start(current).ok_or_else(move || broken(current))?;
            path.push(current);
        }
        path.reverse();

        let mut current = shortcut.destination;
        while !state.is_sink(current) {
            if path.last() != Some(&current) {
                path.push(current);
            }
            if state.is_exit(current) {
                break;
            }
            current = state.predecessor_toward_sink(current).ok_or_else(move || broken(current))?;
        }

        Ok(path)
    }
}
