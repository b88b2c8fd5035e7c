//! Common types.
pub mod edge_id;
pub mod node_id;

pub use edge_id::EdgeId;
pub use node_id::NodeId;
