use crate::algorithm::route_solver::ShortcutCandidate;
use crate::graph::RouteGraph;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// A generated network: the edge list and shortcut candidates, ready for
/// [`RouteSolver::from_edges`](crate::RouteSolver::from_edges)
#[derive(Debug, Clone)]
pub struct GeneratedNetwork {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, i64)>,
    pub shortcuts: Vec<ShortcutCandidate<i64>>,
}

impl GeneratedNetwork {
    /// Builds the graph part of the network
    pub fn graph(&self) -> crate::Result<RouteGraph<i64>> {
        let mut graph = RouteGraph::with_vertices(self.vertex_count);
        for &(from, to, weight) in &self.edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

/// Generates a random directed network with `n` vertices, about `edges_per_vertex`
/// distinct out-edges per vertex (weights in `1..=max_weight`) and `shortcut_count`
/// shortcut candidates (costs in `0..=max_weight`).
///
/// The same seed always yields the same network.
pub fn generate_random_network(
    n: usize,
    edges_per_vertex: usize,
    shortcut_count: usize,
    max_weight: i64,
    seed: u64,
) -> GeneratedNetwork {
    assert!(n > 1, "n must be greater than 1");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n * edges_per_vertex);

    for u in 0..n {
        let degree = edges_per_vertex.min(n - 1);
        let mut targets = HashSet::with_capacity(degree);
        while targets.len() < degree {
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if v != u && targets.insert(v) {
                edges.push((u, v, rng.gen_range(1..=max_weight)));
            }
        }
    }

    let shortcuts = (0..shortcut_count)
        .map(|_| {
            ShortcutCandidate::new(
                rng.gen_range(0..n),
                rng.gen_range(0..=max_weight),
                rng.gen_range(0..n),
            )
        })
        .collect();

    GeneratedNetwork {
        vertex_count: n,
        edges,
        shortcuts,
    }
}

/// Generates a `width` x `height` grid where every cell links to its four
/// neighbours in both directions with weight 1.
///
/// One shortcut jumps from the top-left corner to the centre cell at cost `width`.
pub fn generate_grid_network(width: usize, height: usize) -> GeneratedNetwork {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                edges.push((vertex, vertex + 1, 1));
                edges.push((vertex + 1, vertex, 1));
            }
            if y + 1 < height {
                edges.push((vertex, vertex + width, 1));
                edges.push((vertex + width, vertex, 1));
            }
        }
    }

    let centre = (height / 2) * width + width / 2;
    GeneratedNetwork {
        vertex_count: width * height,
        edges,
        shortcuts: vec![ShortcutCandidate::new(0, width as i64, centre)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_network_is_reproducible() {
        let a = generate_random_network(30, 3, 5, 20, 7);
        let b = generate_random_network(30, 3, 5, 20, 7);
        assert_eq!(a.edges, b.edges);
        assert_eq!(a.shortcuts, b.shortcuts);
        assert_eq!(a.edges.len(), 90);
        assert!(a.edges.iter().all(|&(u, v, w)| u != v && (1..=20).contains(&w)));
    }

    #[test]
    fn grid_network_links_neighbours_both_ways() {
        let network = generate_grid_network(3, 2);
        let graph = network.graph().unwrap();
        assert_eq!(graph.vertex_count(), 6);
        // 2 rows * 2 horizontal + 3 vertical links, each in both directions
        assert_eq!(graph.edge_count(), 14);
        assert!(graph.has_edge(4, 1) && graph.has_edge(1, 4));
        assert_eq!(network.shortcuts[0].destination, 4);
    }
}
