pub mod traits;
pub mod directed;
pub mod generators;
pub mod state;

pub use traits::Graph;
pub use directed::RouteGraph;
pub use state::SearchState;
