use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use log::{info, warn};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::route_solver::{RouteSolver, ShortcutCandidate};
use crate::graph::generators::generate_random_network;
use crate::graph::RouteGraph;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    pub session_timeout: Duration,
    pub max_vertices: usize,
    pub max_edges: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_limits(1000, 60)
    }

    pub fn with_limits(max_sessions: usize, session_timeout_minutes: u64) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            session_timeout: Duration::minutes(session_timeout_minutes as i64),
            max_vertices: 1_000_000,
            max_edges: 10_000_000,
        }
    }

    /// Caps the size of networks clients may register or generate
    pub fn with_network_limits(mut self, max_vertices: usize, max_edges: usize) -> Self {
        self.max_vertices = max_vertices;
        self.max_edges = max_edges;
        self
    }

    /// Rejects networks larger than the configured limits before anything is allocated
    fn check_network_size(&self, vertices: usize, edges: usize) -> Result<(), ApiError> {
        if vertices > self.max_vertices {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "network_too_large",
                &format!("Network needs {} vertices, limit is {}", vertices, self.max_vertices),
            ));
        }
        if edges > self.max_edges {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "network_too_large",
                &format!("Network has {} edges, limit is {}", edges, self.max_edges),
            ));
        }
        Ok(())
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "state_poisoned", "Session store is unavailable"))
    }

    /// Drops expired sessions, then stores the new one if there is room
    fn insert_session(&self, session: Session) -> ApiResult<Session> {
        let mut sessions = self.sessions()?;

        let cutoff = Utc::now() - self.session_timeout;
        sessions.retain(|_, s| s.created_at >= cutoff);

        if sessions.len() >= self.max_sessions {
            warn!("rejecting new session: {} sessions active", sessions.len());
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "too_many_sessions",
                &format!("Session limit of {} reached", self.max_sessions),
            ));
        }

        sessions.insert(session.id, session.clone());
        Ok(Json(session))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/networks", post(create_network))
        .route("/api/networks/generate", post(generate_network))
        .route("/api/networks/:session_id", get(get_network))
        .route("/api/routes/:session_id", post(solve_route))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Register a network from explicit edges and shortcuts
pub async fn create_network(
    State(state): State<AppState>,
    Json(request): Json<NetworkRequest>,
) -> ApiResult<Session> {
    // Largest id referenced anywhere, as a vertex count
    let referenced = request
        .edges
        .iter()
        .map(|e| e.source.max(e.target))
        .chain(request.shortcuts.iter().map(|s| s.trigger.max(s.destination)))
        .max()
        .map_or(0, |id| id.saturating_add(1));
    let vertices = request.vertex_count.unwrap_or(0).max(referenced);
    state.check_network_size(vertices, request.edges.len().saturating_add(request.shortcuts.len()))?;

    let shortcuts: Vec<ShortcutCandidate<i64>> = request.shortcuts.iter().copied().map(Into::into).collect();

    let solver = match request.vertex_count {
        Some(vertex_count) => {
            let mut graph = RouteGraph::with_vertices(vertex_count);
            for edge in &request.edges {
                graph.add_edge(edge.source, edge.target, edge.weight).map_err(solver_error)?;
            }
            RouteSolver::new(graph, shortcuts)
        }
        None => {
            let edges: Vec<(usize, usize, i64)> =
                request.edges.iter().map(|e| (e.source, e.target, e.weight)).collect();
            RouteSolver::from_edges(&edges, &shortcuts)
        }
    }
    .map_err(solver_error)?;

    let session = Session::new(solver);
    info!(
        "session {} created: {} vertices, {} edges, {} shortcuts",
        session.id,
        session.network.vertex_count,
        session.network.edges.len(),
        session.network.shortcuts.len()
    );
    state.insert_session(session)
}

/// Generate a random network
pub async fn generate_network(
    State(state): State<AppState>,
    Json(request): Json<NetworkGenerationRequest>,
) -> ApiResult<Session> {
    if request.node_count < 2 {
        return Err(api_error(StatusCode::BAD_REQUEST, "invalid_node_count", "node_count must be at least 2"));
    }
    if request.max_weight < 1 {
        return Err(api_error(StatusCode::BAD_REQUEST, "invalid_max_weight", "max_weight must be positive"));
    }

    state.check_network_size(
        request.node_count,
        request
            .node_count
            .saturating_mul(request.edges_per_node)
            .saturating_add(request.shortcut_count),
    )?;

    let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let network = generate_random_network(
        request.node_count,
        request.edges_per_node,
        request.shortcut_count,
        request.max_weight,
        seed,
    );
    let graph = network.graph().map_err(solver_error)?;
    let solver = RouteSolver::new(graph, network.shortcuts).map_err(solver_error)?;

    state.insert_session(Session::new(solver))
}

/// Get the network of a session
pub async fn get_network(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<WebNetwork> {
    let sessions = state.sessions()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.network.clone())),
        None => Err(session_not_found()),
    }
}

/// Answer a route query on a session's network
pub async fn solve_route(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> ApiResult<RouteResponse> {
    let solver = {
        let sessions = state.sessions()?;
        match sessions.get(&session_id) {
            Some(session) => Arc::clone(&session.solver),
            None => return Err(session_not_found()),
        }
    };

    let start_time = Instant::now();
    let route = solver.solve(request.start, &request.exits).map_err(solver_error)?;
    let execution_time = start_time.elapsed();

    let response = RouteResponse::new(&request, route, execution_time.as_secs_f64() * 1000.0);

    // Update session with result
    {
        let mut sessions = state.sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_route = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let sessions = state.sessions()?;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Session> {
    let sessions = state.sessions()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: &str) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        details: None,
    }))
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found")
}

fn solver_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::InvalidEdge(_, _) => (StatusCode::BAD_REQUEST, "invalid_edge"),
        Error::NegativeWeight(_, _) => (StatusCode::BAD_REQUEST, "negative_weight"),
        Error::InvalidShortcut { .. } => (StatusCode::BAD_REQUEST, "invalid_shortcut"),
        Error::NegativeShortcutCost(_) => (StatusCode::BAD_REQUEST, "negative_shortcut_cost"),
        Error::EmptyExits => (StatusCode::BAD_REQUEST, "empty_exits"),
        Error::CostOverflow => (StatusCode::BAD_REQUEST, "cost_overflow"),
        Error::SourceNotFound => (StatusCode::BAD_REQUEST, "source_not_found"),
        Error::AlgorithmError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_execution_failed"),
    };
    api_error(status, code, &err.to_string())
}
