//! Node ids.
use std::fmt::{self, Display};
use std::ops::Deref;
use std::result::Result as StdResult;
use std::str::FromStr;
use uuid::Uuid;

/// Holds a unique id for a node.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> NodeId {
        NodeId(Uuid::new_v4())
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        Display::fmt(&self.0, f)
    }
}

impl Deref for NodeId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Ok(Uuid::parse_str(s)?.into())
    }
}

impl From<Uuid> for NodeId {
    fn from(id: Uuid) -> NodeId {
        NodeId(id)
    }
}

impl From<NodeId> for Uuid {
    fn from(id: NodeId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
#[path = "./node_id_test.rs"]
mod node_id_test;
