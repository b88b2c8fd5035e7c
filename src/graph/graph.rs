//! A graph.
use super::{Edge, Node};
use crate::error::{GraphError, ResourceError};
use crate::types::{EdgeId, NodeId};
use crate::Result;
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// A graph of typed nodes and typed edges.
///
/// The graph owns its nodes and edges and is the only entity that creates or
/// destroys them. Master collections and per-node incident edge lists
/// preserve insertion order. Between any unordered pair of distinct nodes at
/// most one edge exists, and self loops are rejected.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    nodes: IndexMap<NodeId, Node<V>>,
    edges: IndexMap<EdgeId, Edge<E>>,
}

impl<V, E> Graph<V, E> {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    // *****************
    // *** insertion ***
    // *****************

    /// Adds a node with the given data.
    /// Always succeeds.
    pub fn add_node(&mut self, data: V) -> NodeId {
        let node = Node::new(data);
        let id = node.id().clone();
        self.nodes.insert(id.clone(), node);

        tracing::debug!("added node {id}");
        id
    }

    /// Adds an edge with the given data between `head` and `tail`.
    ///
    /// The edge is constructed unconditionally but is only registered into
    /// the graph if `head` and `tail` are distinct member nodes and no edge
    /// between the pair exists yet. The returned id may therefore name a
    /// non-member edge; callers needing confirmation should consult
    /// [`Graph::edge_ref`] or [`Graph::num_edges`].
    pub fn add_edge(&mut self, data: E, head: &NodeId, tail: &NodeId) -> EdgeId {
        let edge = Edge::new(data, head.clone(), tail.clone());
        let id = edge.id().clone();

        if head == tail {
            tracing::debug!("rejected self loop on node {head}");
            return id;
        }

        if !self.nodes.contains_key(head) || !self.nodes.contains_key(tail) {
            tracing::debug!("rejected edge with unknown endpoint");
            return id;
        }

        let pair = edge.endpoints();
        if self.edges.values().any(|e| e.endpoints() == pair) {
            tracing::debug!("rejected parallel edge between {head} and {tail}");
            return id;
        }

        self.edges.insert(id.clone(), edge);
        if let Some(node) = self.nodes.get_mut(head) {
            node.add_edge_ref(id.clone());
        }
        if let Some(node) = self.nodes.get_mut(tail) {
            node.add_edge_ref(id.clone());
        }

        tracing::debug!("added edge {id} between {head} and {tail}");
        id
    }

    // *****************
    // *** accessors ***
    // *****************

    /// Get a [`Node`] by its id.
    pub fn node(&self, id: &NodeId) -> Option<&Node<V>> {
        self.nodes.get(id)
    }

    /// Get a `mut`able [`Node`] by its id.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node<V>> {
        self.nodes.get_mut(id)
    }

    /// Get an [`Edge`] by its id.
    pub fn edge(&self, id: &EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id)
    }

    /// Get a `mut`able [`Edge`] by its id.
    pub fn edge_mut(&mut self, id: &EdgeId) -> Option<&mut Edge<E>> {
        self.edges.get_mut(id)
    }

    /// Get a [`Node`] by its current insertion order index.
    ///
    /// Indices are not stable across removals.
    ///
    /// # Errors
    /// + [`ResourceError`] if the index is out of range.
    pub fn get_node(&self, index: usize) -> Result<&Node<V>> {
        let Some((_, node)) = self.nodes.get_index(index) else {
            return Err(ResourceError::does_not_exist("`Node` index out of range").into());
        };

        Ok(node)
    }

    /// Get an [`Edge`] by its current insertion order index.
    ///
    /// Indices are not stable across removals.
    ///
    /// # Errors
    /// + [`ResourceError`] if the index is out of range.
    pub fn get_edge(&self, index: usize) -> Result<&Edge<E>> {
        let Some((_, edge)) = self.edges.get_index(index) else {
            return Err(ResourceError::does_not_exist("`Edge` index out of range").into());
        };

        Ok(edge)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    // ***************
    // *** queries ***
    // ***************

    /// Returns the id of the edge connecting `head` and `tail`.
    ///
    /// # Errors
    /// + [`ResourceError`] if either node does not exist or no edge connects
    ///   the pair.
    pub fn edge_ref(&self, head: &NodeId, tail: &NodeId) -> Result<EdgeId> {
        let Some(head) = self.nodes.get(head) else {
            return Err(ResourceError::does_not_exist("head `Node` not found").into());
        };

        let Some(tail) = self.nodes.get(tail) else {
            return Err(ResourceError::does_not_exist("tail `Node` not found").into());
        };

        let Some(edge) = head.edge_to(tail) else {
            return Err(ResourceError::does_not_exist("no such edge exists").into());
        };

        Ok(edge.clone())
    }

    /// Returns the opposite endpoint of each of the node's incident edges,
    /// parallel to incident edge order.
    ///
    /// # Errors
    /// + [`ResourceError`] if the node does not exist.
    pub fn neighbors(&self, node: &NodeId) -> Result<Vec<NodeId>> {
        let Some(n) = self.nodes.get(node) else {
            return Err(ResourceError::does_not_exist("`Node` not found").into());
        };

        Ok(n.incident_edges()
            .iter()
            .filter_map(|e| self.edges.get(e))
            .map(|e| e.opposite_to(node).clone())
            .collect())
    }

    /// Returns the union of heads and tails over a set of edges.
    /// Ids naming no member edge are skipped.
    pub fn endpoints(&self, edges: &IndexSet<EdgeId>) -> IndexSet<NodeId> {
        let mut nodes = IndexSet::new();
        for e in edges.iter() {
            if let Some(edge) = self.edges.get(e) {
                nodes.insert(edge.head().clone());
                nodes.insert(edge.tail().clone());
            }
        }

        nodes
    }

    /// Returns all graph nodes not present in the given group.
    pub fn other_nodes(&self, group: &IndexSet<NodeId>) -> IndexSet<NodeId> {
        self.nodes
            .keys()
            .filter(|n| !group.contains(*n))
            .cloned()
            .collect()
    }

    // ***************
    // *** removal ***
    // ***************

    /// Removes an edge, deregistering it from both endpoints.
    ///
    /// # Returns
    /// The removed edge's data.
    ///
    /// # Errors
    /// + [`ResourceError`] if the edge is not a member of the graph.
    pub fn remove_edge(&mut self, edge: &EdgeId) -> Result<E> {
        let Some(e) = self.edges.shift_remove(edge) else {
            return Err(ResourceError::does_not_exist("`Edge` not found").into());
        };

        if let Some(node) = self.nodes.get_mut(e.head()) {
            node.remove_edge_ref(edge);
        }
        if let Some(node) = self.nodes.get_mut(e.tail()) {
            node.remove_edge_ref(edge);
        }

        tracing::debug!("removed edge {edge}");
        Ok(e.into_data())
    }

    /// Removes the edge connecting `head` and `tail`.
    ///
    /// # Returns
    /// The removed edge's data.
    ///
    /// # Errors
    /// + [`ResourceError`] if no such edge exists.
    pub fn remove_edge_between(&mut self, head: &NodeId, tail: &NodeId) -> Result<E> {
        let edge = self.edge_ref(head, tail)?;
        self.remove_edge(&edge)
    }

    /// Removes a node, cascading over its incident edges.
    /// Incident edges are removed last first until none remain, then the
    /// node itself is removed.
    ///
    /// # Returns
    /// The removed node's data.
    ///
    /// # Errors
    /// + [`ResourceError`] if the node is not a member of the graph.
    pub fn remove_node(&mut self, node: &NodeId) -> Result<V> {
        if !self.nodes.contains_key(node) {
            return Err(ResourceError::does_not_exist("`Node` not found").into());
        }

        loop {
            let Some(n) = self.nodes.get(node) else {
                break;
            };

            let Some(edge) = n.incident_edges().last().cloned() else {
                break;
            };

            self.remove_edge(&edge)?;
        }

        let Some(n) = self.nodes.shift_remove(node) else {
            return Err(ResourceError::does_not_exist("`Node` not found").into());
        };

        tracing::debug!("removed node {node}");
        Ok(n.into_data())
    }

    // ******************
    // *** validation ***
    // ******************

    /// Checks consistency of the graph, failing on the first violation found.
    ///
    /// Validates that every edge is listed by both of its endpoints, that
    /// both endpoints are members of the master node collection, that every
    /// incident edge is a member of the master edge collection, and that
    /// every incident edge links back to its node.
    ///
    /// Diagnostic only. Mutation maintains these invariants continuously;
    /// a failure here indicates a bug in the mutation logic.
    ///
    /// # Errors
    /// + [`GraphError::Inconsistent`] naming the violated invariant.
    pub fn check(&self) -> Result {
        for (id, edge) in self.edges.iter() {
            let head = self.nodes.get(edge.head());
            let tail = self.nodes.get(edge.tail());

            match (head, tail) {
                (Some(head), Some(tail)) => {
                    if !head.incident_edges().contains(id) || !tail.incident_edges().contains(id) {
                        return Err(GraphError::inconsistent(
                            "head or tail does not list edge in its incident edges",
                        )
                        .into());
                    }
                }
                _ => {
                    return Err(GraphError::inconsistent(
                        "head or tail does not appear in master node list",
                    )
                    .into());
                }
            }
        }

        for (id, node) in self.nodes.iter() {
            for e in node.incident_edges().iter() {
                let Some(edge) = self.edges.get(e) else {
                    return Err(GraphError::inconsistent(
                        "edge does not appear in master edge list",
                    )
                    .into());
                };

                if !edge.is_incident_to(id) {
                    return Err(GraphError::inconsistent(
                        "neither the edge's head nor tail links back to node",
                    )
                    .into());
                }
            }
        }

        Ok(())
    }
}

impl<V, E> Graph<V, E>
where
    V: fmt::Display,
    E: fmt::Display,
{
    /// Prints a representation of the graph.
    /// For each node, its data followed by the data of its incident edges.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> fmt::Display for Graph<V, E>
where
    V: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes.values() {
            let edge_data = node
                .incident_edges()
                .iter()
                .filter_map(|e| self.edges.get(e))
                .map(|e| e.data().to_string())
                .collect::<Vec<_>>();

            writeln!(f, "{}: [{}]", node.data(), edge_data.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "./graph_test.rs"]
mod graph_test;
