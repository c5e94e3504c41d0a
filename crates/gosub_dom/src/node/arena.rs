use crate::node::node_impl::NodeImpl;
use gosub_shared::node::NodeId;
use std::collections::HashMap;

/// The node arena is the single source for nodes in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeArena {
    /// Current nodes stored as <id, node>
    nodes: HashMap<NodeId, NodeImpl>,
    /// Next node ID to use
    next_id: NodeId,
}

impl NodeArena {
    /// Creates a new NodeArena
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: NodeId::default(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Peek what the next node ID is without incrementing the internal counter.
    pub fn peek_next_id(&self) -> NodeId {
        self.next_id
    }

    /// Gets the node with the given id
    pub fn node_ref(&self, node_id: NodeId) -> Option<&NodeImpl> {
        self.nodes.get(&node_id)
    }

    /// Get the node with the given id as a mutable reference
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut NodeImpl> {
        self.nodes.get_mut(&node_id)
    }

    pub fn delete_node(&mut self, node_id: NodeId) {
        self.nodes.remove(&node_id);
    }

    /// Registered an unregistered node into the arena. Nodes that are already registered are
    /// refused and `None` is returned.
    pub fn register_node(&mut self, mut node: NodeImpl) -> Option<NodeId> {
        if node.is_registered() {
            log::warn!("Node {} is already attached to an arena", node.id());
            return None;
        }

        let id = self.next_id;
        self.next_id = id.next();

        node.set_id(id);
        node.set_registered(true);

        self.nodes.insert(id, node);
        Some(id)
    }

    pub fn nodes(&self) -> &HashMap<NodeId, NodeImpl> {
        &self.nodes
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
