use std::fmt::Debug;
use num_traits::PrimInt;

use crate::data_structures::Distance;

/// Indexed binary min-heap of vertices keyed by tentative distance.
///
/// Every vertex of the search gets a slot up front (priority `Unreached`), and a
/// back pointer per vertex records its current slot so `decrease_priority` runs in
/// O(log n) without scanning. Extracted entries stay in the backing array past the
/// active region; only `active` shrinks.
///
/// Entries compare as `(priority, vertex)`, so equal priorities come out lowest
/// vertex id first.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<W> {
    /// Heap slots; `heap[..active]` is the live heap
    heap: Vec<(Distance<W>, usize)>,

    /// vertex -> current slot, `None` once extracted
    positions: Vec<Option<usize>>,

    /// Number of vertices not yet extracted
    active: usize,
}

impl<W> PriorityFrontier<W>
where
    W: PrimInt + Debug,
{
    /// Creates an empty frontier; call `initialize` before use
    pub fn new() -> Self {
        PriorityFrontier {
            heap: Vec::new(),
            positions: Vec::new(),
            active: 0,
        }
    }

    /// Creates a frontier already initialized over `vertex_count` vertices
    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut frontier = PriorityFrontier::new();
        frontier.initialize(vertex_count);
        frontier
    }

    /// Places vertices `0..vertex_count` in the frontier, all with priority `Unreached`.
    ///
    /// Slot `i` holds vertex `i`, which is already in heap order.
    pub fn initialize(&mut self, vertex_count: usize) {
        self.heap.clear();
        self.heap.extend((0..vertex_count).map(|v| (Distance::Unreached, v)));
        self.positions.clear();
        self.positions.extend((0..vertex_count).map(Some));
        self.active = vertex_count;
    }

    /// Returns true when every vertex has been extracted
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Returns the number of vertices not yet extracted
    pub fn len(&self) -> usize {
        self.active
    }

    /// Returns true if the vertex is still waiting in the frontier
    pub fn contains(&self, vertex: usize) -> bool {
        matches!(self.positions.get(vertex), Some(Some(_)))
    }

    /// Current priority of a vertex still in the frontier
    pub fn priority_of(&self, vertex: usize) -> Option<Distance<W>> {
        let slot = self.positions.get(vertex).copied().flatten()?;
        Some(self.heap[slot].0)
    }

    /// Lowers the priority of a vertex that is still in the frontier.
    ///
    /// # Panics
    ///
    /// Panics if the vertex was already extracted or if `priority` is larger than
    /// its current priority. Both are caller bugs.
    pub fn decrease_priority(&mut self, vertex: usize, priority: Distance<W>) {
        let Some(slot) = self.positions.get(vertex).copied().flatten() else {
            panic!("decrease_priority on vertex {} which is not in the frontier", vertex);
        };
        assert!(
            priority <= self.heap[slot].0,
            "decrease_priority would raise vertex {} from {:?} to {:?}",
            vertex,
            self.heap[slot].0,
            priority
        );

        self.heap[slot].0 = priority;
        self.sift_up(slot);
    }

    /// Removes and returns the `(priority, vertex)` entry with the smallest priority
    pub fn extract_min(&mut self) -> Option<(Distance<W>, usize)> {
        if self.active == 0 {
            return None;
        }

        let minimum = self.heap[0];
        let last = self.active - 1;
        self.swap_slots(0, last);
        self.active = last;
        self.positions[minimum.1] = None;
        self.sift_down(0);

        Some(minimum)
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].1] = Some(a);
        self.positions[self.heap[b].1] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot] >= self.heap[parent] {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < self.active && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < self.active && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}

impl<W> Default for PriorityFrontier<W>
where
    W: PrimInt + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_places_every_vertex_unreached() {
        let frontier = PriorityFrontier::<u32>::with_vertices(4);
        assert_eq!(frontier.len(), 4);
        for v in 0..4 {
            assert!(frontier.contains(v));
            assert_eq!(frontier.priority_of(v), Some(Distance::Unreached));
        }
        assert!(!frontier.contains(4));
    }

    #[test]
    fn extract_min_follows_decreased_priorities() {
        let mut frontier = PriorityFrontier::<u32>::with_vertices(5);
        frontier.decrease_priority(3, Distance::Finite(7));
        frontier.decrease_priority(1, Distance::Finite(2));
        frontier.decrease_priority(4, Distance::Finite(5));
        frontier.decrease_priority(3, Distance::Finite(1));

        assert_eq!(frontier.extract_min(), Some((Distance::Finite(1), 3)));
        assert_eq!(frontier.extract_min(), Some((Distance::Finite(2), 1)));
        assert_eq!(frontier.extract_min(), Some((Distance::Finite(5), 4)));
        assert!(!frontier.contains(4));
        // unreached entries drain in vertex order
        assert_eq!(frontier.extract_min(), Some((Distance::Unreached, 0)));
        assert_eq!(frontier.extract_min(), Some((Distance::Unreached, 2)));
        assert!(frontier.is_empty());
        assert_eq!(frontier.extract_min(), None);
    }

    #[test]
    fn equal_priorities_extract_lowest_vertex_first() {
        let mut frontier = PriorityFrontier::<u64>::with_vertices(6);
        for v in [5, 2, 4] {
            frontier.decrease_priority(v, Distance::Finite(3));
        }
        let order: Vec<usize> = (0..3).filter_map(|_| frontier.extract_min()).map(|(_, v)| v).collect();
        assert_eq!(order, vec![2, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "not in the frontier")]
    fn decrease_after_extract_panics() {
        let mut frontier = PriorityFrontier::<u32>::with_vertices(2);
        frontier.decrease_priority(0, Distance::Finite(0));
        frontier.extract_min();
        frontier.decrease_priority(0, Distance::Finite(0));
    }

    #[test]
    #[should_panic(expected = "would raise")]
    fn increasing_priority_panics() {
        let mut frontier = PriorityFrontier::<u32>::with_vertices(2);
        frontier.decrease_priority(1, Distance::Finite(1));
        frontier.decrease_priority(1, Distance::Finite(4));
    }

    #[test]
    fn initialize_resets_a_drained_frontier() {
        let mut frontier = PriorityFrontier::<u32>::with_vertices(3);
        while frontier.extract_min().is_some() {}
        frontier.initialize(3);
        assert_eq!(frontier.len(), 3);
        assert!(frontier.contains(0));
    }
}
