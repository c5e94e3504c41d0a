use crate::node::data::element::ElementData;
use crate::node::data::text::TextData;
use core::fmt::Debug;
use gosub_shared::node::NodeId;

/// Different types of nodes that all have their own data structures
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NodeType {
    DocumentNode,
    TextNode,
    ElementNode,
}

/// Data that is stored inside a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeDataTypeInternal {
    /// Represents a document
    Document,
    /// Represents a text
    Text(TextData),
    /// Represents an element
    Element(ElementData),
}

/// Node structure that resembles a DOM node
#[derive(Clone)]
pub struct NodeImpl {
    /// ID of the node, 0 is always the root / document node
    pub id: NodeId,
    /// parent of the node, if any
    pub parent: Option<NodeId>,
    /// any children of the node
    pub children: Vec<NodeId>,
    /// actual data of the node
    pub data: NodeDataTypeInternal,
    // Returns true when the given node is registered into the document arena
    pub registered: bool,
}

impl NodeImpl {
    /// create a new `Node`
    #[must_use]
    pub fn new(data: NodeDataTypeInternal) -> Self {
        let (id, parent, children, registered) = <_>::default();

        Self {
            id,
            parent,
            children,
            data,
            registered,
        }
    }

    /// Create a new document node
    #[must_use]
    pub fn new_document() -> Self {
        Self::new(NodeDataTypeInternal::Document)
    }

    /// Create a new element node with the given tag name
    #[must_use]
    pub fn new_element(name: &str) -> Self {
        Self::new(NodeDataTypeInternal::Element(ElementData::new(name)))
    }

    /// Creates a new text node
    #[must_use]
    pub fn new_text(value: &str) -> Self {
        Self::new(NodeDataTypeInternal::Text(TextData::with_value(value)))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn set_id(&mut self, id: NodeId) {
        self.id = id;
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent_id: Option<NodeId>) {
        self.parent = parent_id;
    }

    pub fn set_registered(&mut self, registered: bool) {
        self.registered = registered;
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn children(&self) -> &[NodeId] {
        self.children.as_slice()
    }

    pub fn remove(&mut self, node_id: NodeId) {
        self.children.retain(|x| x != &node_id);
    }

    pub fn push(&mut self, node_id: NodeId) {
        self.children.push(node_id);
    }

    /// Inserts a child at the given index. An index past the end appends.
    pub fn insert(&mut self, node_id: NodeId, idx: usize) {
        let idx = idx.min(self.children.len());
        self.children.insert(idx, node_id);
    }

    pub fn type_of(&self) -> NodeType {
        match self.data {
            NodeDataTypeInternal::Document => NodeType::DocumentNode,
            NodeDataTypeInternal::Text(_) => NodeType::TextNode,
            NodeDataTypeInternal::Element(_) => NodeType::ElementNode,
        }
    }

    pub fn is_element_node(&self) -> bool {
        self.type_of() == NodeType::ElementNode
    }

    pub fn get_element_data(&self) -> Option<&ElementData> {
        if let NodeDataTypeInternal::Element(data) = &self.data {
            return Some(data);
        }
        None
    }

    pub fn get_element_data_mut(&mut self) -> Option<&mut ElementData> {
        if let NodeDataTypeInternal::Element(data) = &mut self.data {
            return Some(data);
        }
        None
    }

    pub fn is_text_node(&self) -> bool {
        matches!(self.data, NodeDataTypeInternal::Text(_))
    }

    pub fn get_text_data(&self) -> Option<&TextData> {
        if let NodeDataTypeInternal::Text(data) = &self.data {
            return Some(data);
        }
        None
    }
}

impl PartialEq for NodeImpl {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.parent == other.parent && self.children == other.children && self.data == other.data
    }
}

impl Debug for NodeImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Node");
        debug.field("id", &self.id);
        debug.field("parent", &self.parent);
        debug.field("children", &self.children);
        debug.field("data", &self.data);
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_element() {
        let node = NodeImpl::new_element("div");
        assert_eq!(node.type_of(), NodeType::ElementNode);
        assert!(node.is_element_node());
        assert!(!node.is_registered());
        assert_eq!(node.get_element_data().map(|data| data.name()), Some("div"));
        assert!(node.get_text_data().is_none());
    }

    #[test]
    fn new_text() {
        let node = NodeImpl::new_text("hello");
        assert!(node.is_text_node());
        assert_eq!(node.get_text_data().map(|data| data.value()), Some("hello"));
    }

    #[test]
    fn push_and_remove_children() {
        let mut node = NodeImpl::new_document();
        node.push(NodeId::from(1_usize));
        node.push(NodeId::from(2_usize));
        node.remove(NodeId::from(1_usize));
        assert_eq!(node.children(), &[NodeId::from(2_usize)]);
    }

    #[test]
    fn insert_children() {
        let mut node = NodeImpl::new_document();
        node.push(NodeId::from(1_usize));
        node.insert(NodeId::from(2_usize), 0);
        node.insert(NodeId::from(3_usize), 10);
        assert_eq!(
            node.children(),
            &[NodeId::from(2_usize), NodeId::from(1_usize), NodeId::from(3_usize)]
        );
    }
}
