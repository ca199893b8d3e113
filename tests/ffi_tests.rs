#![cfg(feature = "ffi")]

use shortcut_sssp::ffi::*;

fn empty_route() -> FfiRoute {
    FfiRoute {
        cost: 0,
        path: std::ptr::null_mut(),
        len: 0,
    }
}

// 0 -> 1 -> 2 with one shortcut 1 -> 3 and an isolated vertex 4
fn build_network() -> *mut FfiNetwork {
    let network = ssr_network_new(5);
    assert!(ssr_network_add_edge(network, 0, 1, 2));
    assert!(ssr_network_add_edge(network, 1, 2, 3));
    assert!(ssr_network_add_shortcut(network, 1, 4, 3));
    network
}

#[test]
fn build_solve_and_free() {
    let network = build_network();
    let exits = [3usize];
    let mut route = empty_route();

    let status = ssr_solve(network, 0, exits.as_ptr(), exits.len(), &mut route);
    assert_eq!(status, SSR_FOUND);
    assert_eq!(route.cost, 6);
    let path = unsafe { std::slice::from_raw_parts(route.path, route.len) };
    assert_eq!(path, &[0, 1, 3]);

    ssr_route_free(&mut route);
    assert!(route.path.is_null());
    assert_eq!(route.len, 0);
    ssr_network_free(network);
}

#[test]
fn not_found_and_invalid_queries_have_distinct_statuses() {
    let network = build_network();
    let mut route = empty_route();

    // trigger 1 is unreachable from 2
    let exits = [3usize];
    assert_eq!(ssr_solve(network, 2, exits.as_ptr(), 1, &mut route), SSR_NOT_FOUND);
    assert!(route.path.is_null());

    let exits = [99usize];
    assert_eq!(ssr_solve(network, 0, exits.as_ptr(), 1, &mut route), SSR_INVALID_QUERY);
    assert_eq!(ssr_solve(network, 0, std::ptr::null(), 0, &mut route), SSR_INVALID_QUERY);
    assert_eq!(ssr_solve(network, 7, [3usize].as_ptr(), 1, &mut route), SSR_INVALID_QUERY);

    ssr_network_free(network);
}

#[test]
fn overflow_and_null_arguments_are_reported() {
    let network = ssr_network_new(3);
    assert!(ssr_network_add_edge(network, 0, 1, i64::MAX));
    assert!(ssr_network_add_shortcut(network, 1, 1, 2));
    assert!(!ssr_network_add_edge(network, 0, 5, 1));
    assert!(!ssr_network_add_shortcut(network, 0, -1, 2));

    let mut route = empty_route();
    let exits = [2usize];
    assert_eq!(ssr_solve(network, 0, exits.as_ptr(), 1, &mut route), SSR_COST_OVERFLOW);
    assert_eq!(ssr_solve(network, 0, exits.as_ptr(), 1, std::ptr::null_mut()), SSR_NULL_ARGUMENT);
    assert_eq!(ssr_solve(std::ptr::null_mut(), 0, exits.as_ptr(), 1, &mut route), SSR_NULL_ARGUMENT);
    ssr_network_free(network);

    assert!(!ssr_network_add_edge(std::ptr::null_mut(), 0, 1, 1));
    assert!(!ssr_network_add_shortcut(std::ptr::null_mut(), 0, 1, 1));
    ssr_route_free(std::ptr::null_mut());
}
