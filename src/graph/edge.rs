//! Graph edges.
use crate::types::{EdgeId, NodeId};
use std::ops::{Deref, DerefMut};

// *********************
// *** EndpointPair ***
// *********************

/// Unordered pair of endpoint node ids.
///
/// The pair is normalized on construction so that equality and hashing
/// ignore direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointPair(NodeId, NodeId);

impl EndpointPair {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        &self.0 == node || &self.1 == node
    }
}

// ************
// *** Edge ***
// ************

/// A graph edge between two distinct nodes.
/// Contains data.
///
/// `head` and `tail` are stored directed, but edge identity is
/// direction-insensitive: two edges are equal iff they connect the same
/// unordered pair of endpoints, regardless of their data.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    id: EdgeId,
    data: E,

    /// Starting node of the edge.
    head: NodeId,

    /// Ending node of the edge.
    tail: NodeId,
}

impl<E> Edge<E> {
    pub(super) fn new(data: E, head: NodeId, tail: NodeId) -> Self {
        Self {
            id: EdgeId::new(),
            data,
            head,
            tail,
        }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn data(&self) -> &E {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut E {
        &mut self.data
    }

    pub fn set_data(&mut self, data: E) {
        self.data = data;
    }

    /// Consumes self, returning the data.
    pub fn into_data(self) -> E {
        self.data
    }

    pub fn head(&self) -> &NodeId {
        &self.head
    }

    pub fn tail(&self) -> &NodeId {
        &self.tail
    }

    /// The edge's endpoints as an unordered pair.
    pub fn endpoints(&self) -> EndpointPair {
        EndpointPair::new(self.head.clone(), self.tail.clone())
    }

    pub fn is_incident_to(&self, node: &NodeId) -> bool {
        &self.head == node || &self.tail == node
    }

    /// Returns the endpoint opposite to the given node.
    ///
    /// If `node` is not an endpoint of this edge the head is returned.
    pub fn opposite_to(&self, node: &NodeId) -> &NodeId {
        if node == &self.head {
            &self.tail
        } else {
            &self.head
        }
    }
}

impl<E> PartialEq for Edge<E> {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl<E> Eq for Edge<E> {}

impl<E> Deref for Edge<E> {
    type Target = E;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<E> DerefMut for Edge<E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

#[cfg(test)]
#[path = "./edge_test.rs"]
mod edge_test;
