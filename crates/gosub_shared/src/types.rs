//! Error results that can be returned from the document layer
use crate::node::NodeId;
use thiserror::Error;

/// Serious errors and errors from third-party libraries
#[derive(Debug, Error)]
pub enum Error {
    #[error("document error: node {0} not found")]
    NodeNotFound(NodeId),

    #[error("document is already borrowed")]
    DocumentBorrowed,
}

/// Result that can be returned which holds either T or an Error
pub type Result<T> = std::result::Result<T, anyhow::Error>;
