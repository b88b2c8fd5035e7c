//! Edge ids.
use std::fmt::{self, Display};
use std::ops::Deref;
use std::result::Result as StdResult;
use std::str::FromStr;
use uuid::Uuid;

/// Holds a unique id for an edge.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeId(Uuid);

impl EdgeId {
    pub fn new() -> EdgeId {
        EdgeId(Uuid::new_v4())
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        Display::fmt(&self.0, f)
    }
}

impl Deref for EdgeId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for EdgeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Ok(Uuid::parse_str(s)?.into())
    }
}

impl From<Uuid> for EdgeId {
    fn from(id: Uuid) -> EdgeId {
        EdgeId(id)
    }
}

impl From<EdgeId> for Uuid {
    fn from(id: EdgeId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
#[path = "./edge_id_test.rs"]
mod edge_id_test;
