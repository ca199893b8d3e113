use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::PrimInt;
use std::fmt::Debug;

/// A directed graph with parallel forward and reverse adjacency lists.
///
/// Every edge `u -> v` is stored once in `forward[u]` as `(v, w)` and once in
/// `reverse[v]` as `(u, w)`, so a search can walk "who do I point at" or "who
/// points at me" without a second graph. The structure is fixed once built;
/// per-query data lives in [`SearchState`](crate::graph::SearchState).
#[derive(Debug, Clone)]
pub struct RouteGraph<W>
where
    W: PrimInt + Debug,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    forward: Vec<Vec<(usize, W)>>,

    /// Incoming edges for each vertex: vertex_id -> [(source_vertex, weight)]
    reverse: Vec<Vec<(usize, W)>>,

    edge_count: usize,
}

impl<W> RouteGraph<W>
where
    W: PrimInt + Debug,
{
    /// Creates a graph with vertices `0..vertices` and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        RouteGraph {
            forward: vec![Vec::new(); vertices],
            reverse: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// The vertex count is `max id + 1` over all endpoints (zero for an empty list).
    pub fn from_edges(edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut vertices = 0;
        for &(from, to, _) in edges {
            let id = from.max(to);
            vertices = vertices.max(id.checked_add(1).ok_or(Error::InvalidVertex(id))?);
        }

        let mut graph = RouteGraph::with_vertices(vertices);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a directed edge, registering it in both adjacency directions.
    ///
    /// Parallel edges are kept; searches simply see both.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(from, to));
        }

        self.add_forward_edge(from, to, weight);
        self.add_reverse_edge(to, from, weight);
        self.edge_count += 1;
        Ok(())
    }

    // Endpoints are already validated by add_edge.
    fn add_forward_edge(&mut self, from: usize, to: usize, weight: W) {
        self.forward[from].push((to, weight));
    }

    // Called with swapped endpoints: `from` is the edge's head.
    fn add_reverse_edge(&mut self, from: usize, to: usize, weight: W) {
        self.reverse[from].push((to, weight));
    }

    /// Iterates over every edge as `(from, to, weight)` in insertion order per source
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.forward
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }
}

impl<W> Graph<W> for RouteGraph<W>
where
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.forward.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.forward.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.reverse.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}
