use crate::algorithm::route_solver::{RouteSolver, ShortcutCandidate};
use crate::graph::RouteGraph;
use crate::Error;
use libc::{c_int, size_t};

/// A network under construction plus the solver built from it on first query
pub struct FfiNetwork {
    graph: RouteGraph<i64>,
    shortcuts: Vec<ShortcutCandidate<i64>>,
    solver: Option<RouteSolver<i64>>,
}

#[repr(C)]
pub struct FfiRoute {
    pub cost: i64,
    pub path: *mut size_t,
    pub len: size_t,
}

/// `ssr_solve` found a route and filled the out-parameter
pub const SSR_FOUND: c_int = 0;
/// No shortcut is usable from the start to any exit
pub const SSR_NOT_FOUND: c_int = 1;
/// A required pointer was null
pub const SSR_NULL_ARGUMENT: c_int = -1;
/// Empty exit list, or a start or exit outside the network
pub const SSR_INVALID_QUERY: c_int = -2;
/// A registered shortcut does not fit the network
pub const SSR_INVALID_NETWORK: c_int = -3;
/// A path cost does not fit in 64 bits
pub const SSR_COST_OVERFLOW: c_int = -4;
/// Internal solver failure
pub const SSR_INTERNAL_ERROR: c_int = -5;

fn status_of(err: &Error) -> c_int {
    match err {
        Error::InvalidVertex(_) | Error::EmptyExits | Error::SourceNotFound => SSR_INVALID_QUERY,
        Error::InvalidEdge(_, _)
        | Error::NegativeWeight(_, _)
        | Error::InvalidShortcut { .. }
        | Error::NegativeShortcutCost(_) => SSR_INVALID_NETWORK,
        Error::CostOverflow => SSR_COST_OVERFLOW,
        Error::AlgorithmError(_) => SSR_INTERNAL_ERROR,
    }
}

#[no_mangle]
pub extern "C" fn ssr_network_new(vertex_count: size_t) -> *mut FfiNetwork {
    Box::into_raw(Box::new(FfiNetwork {
        graph: RouteGraph::with_vertices(vertex_count),
        shortcuts: Vec::new(),
        solver: None,
    }))
}

#[no_mangle]
pub extern "C" fn ssr_network_add_edge(n: *mut FfiNetwork, from: size_t, to: size_t, weight: i64) -> bool {
    if n.is_null() {
        return false;
    }
    let network = unsafe { &mut *n };
    network.solver = None;
    network.graph.add_edge(from, to, weight).is_ok()
}

#[no_mangle]
pub extern "C" fn ssr_network_add_shortcut(
    n: *mut FfiNetwork,
    trigger: size_t,
    cost: i64,
    destination: size_t,
) -> bool {
    use crate::graph::Graph;

    if n.is_null() {
        return false;
    }
    let network = unsafe { &mut *n };
    if !network.graph.has_vertex(trigger) || !network.graph.has_vertex(destination) || cost < 0 {
        return false;
    }
    network.solver = None;
    network.shortcuts.push(ShortcutCandidate::new(trigger, cost, destination));
    true
}

#[no_mangle]
pub extern "C" fn ssr_network_free(n: *mut FfiNetwork) {
    if !n.is_null() {
        unsafe {
            drop(Box::from_raw(n));
        }
    }
}

/// Solves one query and returns one of the `SSR_*` status codes.
///
/// On `SSR_FOUND` the route is written to `out`, whose path must later be
/// released with `ssr_route_free`. For any other status `out` is left empty.
/// `exits` may be null only when `exit_count` is zero.
#[no_mangle]
pub extern "C" fn ssr_solve(
    n: *mut FfiNetwork,
    start: size_t,
    exits: *const size_t,
    exit_count: size_t,
    out: *mut FfiRoute,
) -> c_int {
    if n.is_null() || out.is_null() || (exits.is_null() && exit_count > 0) {
        return SSR_NULL_ARGUMENT;
    }
    let network = unsafe { &mut *n };
    let out = unsafe {
        out.write(FfiRoute {
            cost: 0,
            path: std::ptr::null_mut(),
            len: 0,
        });
        &mut *out
    };
    let exits: &[size_t] = if exit_count == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(exits, exit_count) }
    };

    if network.solver.is_none() {
        match RouteSolver::new(network.graph.clone(), network.shortcuts.clone()) {
            Ok(solver) => network.solver = Some(solver),
            Err(err) => return status_of(&err),
        }
    }
    let Some(solver) = network.solver.as_ref() else {
        return SSR_INTERNAL_ERROR;
    };

    match solver.solve(start, exits) {
        Ok(Some(route)) => {
            let mut path = route.path.into_boxed_slice();
            out.cost = route.cost;
            out.len = path.len();
            out.path = path.as_mut_ptr();
            std::mem::forget(path);
            SSR_FOUND
        }
        Ok(None) => SSR_NOT_FOUND,
        Err(err) => status_of(&err),
    }
}

/// Releases the path of a route filled by `ssr_solve` and empties it
#[no_mangle]
pub extern "C" fn ssr_route_free(route: *mut FfiRoute) {
    if route.is_null() {
        return;
    }
    let route = unsafe { &mut *route };
    if !route.path.is_null() {
        unsafe {
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(route.path, route.len)));
        }
    }
    route.path = std::ptr::null_mut();
    route.len = 0;
}
