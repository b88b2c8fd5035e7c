//! Common error types.
use std::convert::From;
use std::result::Result as StdResult;
use thiserror::Error;

// **********************
// *** Resource Error ***
// **********************

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("resource `{0}` does not exist")]
    DoesNotExist(String),
}

impl ResourceError {
    pub fn does_not_exist(msg: impl Into<String>) -> Self {
        Self::DoesNotExist(msg.into())
    }
}

// *******************
// *** Graph Error ***
// *******************

#[derive(Error, Debug)]
pub enum GraphError {
    /// A structural invariant of the graph does not hold.
    #[error("graph is inconsistent: {0}")]
    Inconsistent(String),
}

impl GraphError {
    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::Inconsistent(msg.into())
    }
}

// ********************
// *** Tangle Error ***
// ********************

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Resource(ResourceError),

    #[error("{0}")]
    Graph(GraphError),
}

impl From<ResourceError> for Error {
    fn from(err: ResourceError) -> Self {
        Self::Resource(err)
    }
}

impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

// *********************
// *** Tangle Result ***
// *********************

pub type Result<T = ()> = StdResult<T, Error>;

impl From<Error> for Result {
    fn from(err: Error) -> Self {
        Err(err)
    }
}

#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
