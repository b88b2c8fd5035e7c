//! Graph nodes.
use crate::types::{EdgeId, NodeId};
use indexmap::IndexSet;
use std::ops::{Deref, DerefMut};

/// A graph node.
/// Contains data and the list of edges incident to the node,
/// in the order they were added.
#[derive(Debug, Clone)]
pub struct Node<V> {
    id: NodeId,
    data: V,
    incident: IndexSet<EdgeId>,
}

impl<V> Node<V> {
    pub(super) fn new(data: V) -> Self {
        Self {
            id: NodeId::new(),
            data,
            incident: IndexSet::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn data(&self) -> &V {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    pub fn set_data(&mut self, data: V) {
        self.data = data;
    }

    /// Consumes self, returning the data.
    pub fn into_data(self) -> V {
        self.data
    }

    /// Edges incident to this node, in insertion order.
    pub fn incident_edges(&self) -> &IndexSet<EdgeId> {
        &self.incident
    }

    /// Returns the edge connecting this node to `neighbor`, if any.
    ///
    /// Scans this node's incident edges for one also incident to `neighbor`
    /// and takes the last match under this node's ordering. At most one such
    /// edge exists in a well formed graph, so the policy only matters if the
    /// structure is corrupt.
    pub fn edge_to<U>(&self, neighbor: &Node<U>) -> Option<&EdgeId> {
        let mut edge = None;
        for e in self.incident.iter() {
            if neighbor.incident.contains(e) {
                edge = Some(e);
            }
        }

        edge
    }

    /// Returns `true` if an edge connects this node and `node`.
    pub fn is_neighbor<U>(&self, node: &Node<U>) -> bool {
        self.edge_to(node).is_some()
    }

    /// Returns `true` if the node has any incident edge.
    pub fn is_connected(&self) -> bool {
        !self.incident.is_empty()
    }

    pub(super) fn add_edge_ref(&mut self, edge: EdgeId) {
        self.incident.insert(edge);
    }

    pub(super) fn remove_edge_ref(&mut self, edge: &EdgeId) {
        self.incident.shift_remove(edge);
    }
}

impl<V> Deref for Node<V> {
    type Target = V;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<V> DerefMut for Node<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

#[cfg(test)]
#[path = "./node_test.rs"]
mod node_test;
