use std::time::{Duration, Instant};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use shortcut_sssp::graph::generators::generate_random_network;
use shortcut_sssp::graph::Graph;
use shortcut_sssp::RouteSolver;

// Times `queries` random route queries with `exit_count` exits each
fn benchmark_solver(solver: &RouteSolver<i64>, queries: usize, exit_count: usize, rng: &mut StdRng) -> (Duration, usize) {
    let n = solver.graph().vertex_count();
    let mut found = 0;
    let mut total = Duration::ZERO;

    for _ in 0..queries {
        let start = rng.gen_range(0..n);
        let exits: Vec<usize> = (0..exit_count).map(|_| rng.gen_range(0..n)).collect();

        let started = Instant::now();
        match solver.solve(start, &exits) {
            Ok(Some(_)) => found += 1,
            Ok(None) => {}
            Err(err) => eprintln!("  - query {} -> {:?} failed: {}", start, exits, err),
        }
        total += started.elapsed();
    }

    (total, found)
}

fn main() {
    env_logger::init();

    // Define network sizes to test
    let sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Average number of out-edges per vertex
    let edges_per_vertex = 3;
    let shortcut_count = 50;
    let queries = 20;
    let exit_count = 5;

    println!("=====================================================");
    println!("Benchmark: shortcut route solver");
    println!("{} out-edges per vertex, {} shortcuts, {} exits per query", edges_per_vertex, shortcut_count, exit_count);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &sizes {
        println!("\nGenerating random network with {} vertices...", size);
        let network = generate_random_network(size, edges_per_vertex, shortcut_count, 100, rng.gen());
        let solver = match RouteSolver::from_edges(&network.edges, &network.shortcuts) {
            Ok(solver) => solver,
            Err(err) => {
                eprintln!("  - could not build network: {}", err);
                continue;
            }
        };
        println!("Network has {} vertices and {} edges", solver.graph().vertex_count(), solver.graph().edge_count());

        let (total, found) = benchmark_solver(&solver, queries, exit_count, &mut rng);
        let per_query = total / queries as u32;
        println!("  - {} of {} queries found a route, {:?} per query", found, queries, per_query);

        results.push((size, per_query, found));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<10}", "Vertices", "Per query (ms)", "Found");
    println!("-----------------------------------------------------");

    for (size, per_query, found) in &results {
        println!("{:<10} | {:<15.3} | {:<10}", size, per_query.as_secs_f64() * 1000.0, found);
    }
}
