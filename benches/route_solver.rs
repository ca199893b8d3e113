use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shortcut_sssp::graph::generators::generate_random_network;
use shortcut_sssp::RouteSolver;

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for &n in &[1_000usize, 10_000, 50_000] {
        let network = generate_random_network(n, 3, 50, 100, 42);
        let solver = RouteSolver::from_edges(&network.edges, &network.shortcuts).unwrap();
        let exits: Vec<usize> = (0..5).map(|i| (i * 7919) % n).collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| solver.solve(black_box(0), black_box(&exits)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
