//! Errors that can be returned while building or rendering a tree
use crate::record::ItemId;
use gosub_shared::node::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeViewError {
    /// A node can be attached to the document only once
    #[error("tree node {id} is already attached to the document")]
    AlreadyAttached { id: ItemId },

    #[error("tree node {id} has no visual element yet")]
    NotRendered { id: ItemId },

    #[error("container {0} does not exist in the document")]
    ContainerNotFound(NodeId),

    #[error("tree node {0} not found")]
    UnknownNode(ItemId),

    #[error("records cannot be rendered: {orphans} orphan(s), {cycles} cyclic, {duplicates} duplicate sibling(s)")]
    InvalidRecords {
        orphans: usize,
        cycles: usize,
        duplicates: usize,
    },

    #[error("records error: {0}")]
    Records(#[from] serde_json::Error),

    #[error(transparent)]
    Document(#[from] anyhow::Error),
}
