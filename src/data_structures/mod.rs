pub mod distance;
pub mod priority_queue;

pub use distance::Distance;
pub use priority_queue::PriorityFrontier;
