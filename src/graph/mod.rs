//! Graph structures.
pub mod edge;
pub mod graph;
pub mod node;

// Re-exports
pub use edge::{Edge, EndpointPair};
pub use graph::Graph;
pub use node::Node;
