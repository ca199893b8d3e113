use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::route_solver::{Route, RouteSolver, ShortcutCandidate};

/// Represents a directed edge of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: i64,
}

/// Represents a shortcut candidate of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebShortcut {
    pub trigger: usize,
    pub cost: i64,
    pub destination: usize,
}

impl From<ShortcutCandidate<i64>> for WebShortcut {
    fn from(shortcut: ShortcutCandidate<i64>) -> Self {
        WebShortcut {
            trigger: shortcut.trigger,
            cost: shortcut.cost,
            destination: shortcut.destination,
        }
    }
}

impl From<WebShortcut> for ShortcutCandidate<i64> {
    fn from(shortcut: WebShortcut) -> Self {
        ShortcutCandidate::new(shortcut.trigger, shortcut.cost, shortcut.destination)
    }
}

/// A complete network as exchanged with clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNetwork {
    pub vertex_count: usize,
    pub edges: Vec<WebEdge>,
    pub shortcuts: Vec<WebShortcut>,
}

/// Request to register a network.
///
/// Without `vertex_count` the vertex ids are inferred from the edges and shortcuts.
#[derive(Debug, Deserialize)]
pub struct NetworkRequest {
    #[serde(default)]
    pub vertex_count: Option<usize>,
    pub edges: Vec<WebEdge>,
    #[serde(default)]
    pub shortcuts: Vec<WebShortcut>,
}

/// Parameters for random network generation
#[derive(Debug, Deserialize)]
pub struct NetworkGenerationRequest {
    pub node_count: usize,
    #[serde(default = "default_edges_per_node")]
    pub edges_per_node: usize,
    #[serde(default = "default_shortcut_count")]
    pub shortcut_count: usize,
    #[serde(default = "default_max_weight")]
    pub max_weight: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_edges_per_node() -> usize { 3 }
fn default_shortcut_count() -> usize { 5 }
fn default_max_weight() -> i64 { 100 }

/// A route query
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    pub start: usize,
    pub exits: Vec<usize>,
}

/// Response to a route query; `found` is false when no shortcut is usable
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub execution_id: Uuid,
    pub start: usize,
    pub exits: Vec<usize>,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    pub path: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<WebShortcut>,
    pub execution_time_ms: f64,
}

impl RouteResponse {
    pub fn new(request: &RouteRequest, route: Option<Route<i64>>, execution_time_ms: f64) -> Self {
        let (cost, path, shortcut): (Option<i64>, Vec<usize>, Option<WebShortcut>) = match route {
            Some(route) => (Some(route.cost), route.path, Some(route.shortcut.into())),
            None => (None, Vec::new(), None),
        };

        Self {
            execution_id: Uuid::new_v4(),
            start: request.start,
            exits: request.exits.clone(),
            found: cost.is_some(),
            cost,
            path,
            shortcut,
            execution_time_ms,
        }
    }
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding a network, its solver and the last route answered
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub network: WebNetwork,
    pub last_route: Option<RouteResponse>,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub solver: Arc<RouteSolver<i64>>,
}

impl Session {
    pub fn new(solver: RouteSolver<i64>) -> Self {
        let network = WebNetwork::from(&solver);
        Self {
            id: Uuid::new_v4(),
            network,
            last_route: None,
            created_at: Utc::now(),
            solver: Arc::new(solver),
        }
    }
}

impl From<&RouteSolver<i64>> for WebNetwork {
    fn from(solver: &RouteSolver<i64>) -> Self {
        use crate::graph::Graph;

        WebNetwork {
            vertex_count: solver.graph().vertex_count(),
            edges: solver
                .graph()
                .edges()
                .map(|(source, target, weight)| WebEdge { source, target, weight })
                .collect(),
            shortcuts: solver.shortcuts().iter().copied().map(WebShortcut::from).collect(),
        }
    }
}
