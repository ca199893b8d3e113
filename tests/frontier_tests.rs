use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortcut_sssp::data_structures::{Distance, PriorityFrontier};

#[test]
fn test_frontier_drains_in_priority_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 200;
    let mut frontier = PriorityFrontier::<u64>::with_vertices(n);
    let mut expected = vec![Distance::Unreached; n];

    // Random decrease sequence, never raising a priority
    for _ in 0..1_000 {
        let v = rng.gen_range(0..n);
        let lowered = match expected[v] {
            Distance::Unreached => rng.gen_range(0..1_000),
            Distance::Finite(current) => rng.gen_range(0..=current),
        };
        frontier.decrease_priority(v, Distance::Finite(lowered));
        expected[v] = Distance::Finite(lowered);
    }

    let mut sorted: Vec<(Distance<u64>, usize)> = expected.iter().copied().zip(0..n).collect();
    sorted.sort();

    let mut drained = Vec::with_capacity(n);
    while let Some(entry) = frontier.extract_min() {
        drained.push(entry);
    }
    assert_eq!(drained, sorted);
    assert!(frontier.is_empty());
}

#[test]
fn test_frontier_interleaved_extract_and_decrease() {
    let mut frontier = PriorityFrontier::<u32>::with_vertices(6);
    frontier.decrease_priority(0, Distance::Finite(0));

    assert_eq!(frontier.extract_min(), Some((Distance::Finite(0), 0)));
    frontier.decrease_priority(4, Distance::Finite(9));
    frontier.decrease_priority(2, Distance::Finite(3));
    assert_eq!(frontier.priority_of(4), Some(Distance::Finite(9)));

    assert_eq!(frontier.extract_min(), Some((Distance::Finite(3), 2)));
    frontier.decrease_priority(4, Distance::Finite(4));
    frontier.decrease_priority(5, Distance::Finite(4));

    assert_eq!(frontier.extract_min(), Some((Distance::Finite(4), 4)));
    assert_eq!(frontier.extract_min(), Some((Distance::Finite(4), 5)));
    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.priority_of(2), None);
}
