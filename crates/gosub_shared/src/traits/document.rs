use crate::document::DocumentHandle;
use crate::event::{EventKind, EventListener, ListenerId};
use crate::node::NodeId;
use std::fmt::Display;

pub trait DocumentBuilder {
    type Document: Document;

    /// Creates a new, empty document that consists of a document node and a body element
    fn new_document() -> DocumentHandle<Self::Document>;
}

/// The capabilities a host document must offer. Operations on unknown node ids are ignored
/// (and logged) by implementations, queries on unknown node ids return empty results.
pub trait Document: Sized + Display + 'static {
    /// Return the document node
    fn root(&self) -> NodeId;
    /// Return the body element, the default place where top-level content is attached
    fn body(&self) -> NodeId;

    /// Return true when the node exists in this document
    fn contains_node(&self, node_id: NodeId) -> bool;
    /// Return number of nodes in the document
    fn node_count(&self) -> usize;

    /// Creates a new detached element with the given tag name
    fn create_element(&mut self, tag: &str) -> NodeId;
    /// Returns the tag name of an element
    fn tag_name(&self, node_id: NodeId) -> Option<String>;

    /// Replaces the complete class list of an element
    fn set_classes(&mut self, node_id: NodeId, classes: &[&str]);
    fn add_class(&mut self, node_id: NodeId, class: &str);
    fn remove_class(&mut self, node_id: NodeId, class: &str);
    fn has_class(&self, node_id: NodeId, class: &str) -> bool;
    /// Returns the classes of an element in the order they were added
    fn classes(&self, node_id: NodeId) -> Vec<String>;

    /// Replaces all children of the element by a single text node (or none for an empty text)
    fn set_text_content(&mut self, node_id: NodeId, text: &str);
    /// Returns the concatenated text of all descendant text nodes
    fn text_content(&self, node_id: NodeId) -> String;

    /// Appends the child to the parent. A child that already has a parent is moved.
    fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        self.attach_node(child_id, parent_id, None);
    }
    /// Attaches the node to the parent at the given child position, or as last child when no
    /// position is given. A node that already has a parent is moved.
    fn attach_node(&mut self, node_id: NodeId, parent_id: NodeId, position: Option<usize>);
    /// Detaches a node (and thereby its subtree) from its parent
    fn detach_node(&mut self, node_id: NodeId);
    /// Detaches a node and removes it, its subtree and their listeners from the document
    fn delete_node(&mut self, node_id: NodeId);
    fn parent_id(&self, node_id: NodeId) -> Option<NodeId>;
    fn children(&self, node_id: NodeId) -> Vec<NodeId>;

    /// Returns all descendant elements of the given node (excluding the node itself) that carry
    /// the class, in tree order.
    fn elements_by_class_name(&self, node_id: NodeId, class: &str) -> Vec<NodeId>;

    fn add_event_listener(&mut self, node_id: NodeId, kind: EventKind, listener: EventListener) -> ListenerId;
    /// Removes a listener, returns false when it was not registered on the node
    fn remove_event_listener(&mut self, node_id: NodeId, listener_id: ListenerId) -> bool;
    fn event_listeners(&self, node_id: NodeId, kind: EventKind) -> Vec<EventListener>;

    /// Serializes the whole document
    fn write(&self) -> String;
    /// Serializes the given node and its subtree
    fn write_from_node(&self, node_id: NodeId) -> String;
}
