//! # Tangle
//!
//! Generic graph structures with typed nodes and edges.
//! Supports insertion, deletion, adjacency queries, and structural
//! self-validation.
pub mod error;
pub mod graph;
pub mod types;

#[cfg(test)]
pub mod dev_utils;

// Re-exports
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Node};
pub use types::{EdgeId, NodeId};
