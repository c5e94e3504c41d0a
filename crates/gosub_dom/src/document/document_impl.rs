use std::fmt;
use std::fmt::{Display, Formatter};

use crate::document::query::{DocumentQuery, Query};
use crate::events::EventListeners;
use crate::node::arena::NodeArena;
use crate::node::data::element::ClassListImpl;
use crate::node::node_impl::NodeImpl;
use crate::writer::DocumentWriter;
use gosub_shared::event::{EventKind, EventListener, ListenerId};
use gosub_shared::node::NodeId;
use gosub_shared::traits::document::Document;
use log::{debug, warn};

/// Defines a document
#[derive(Debug)]
pub struct DocumentImpl {
    /// Holds and owns all nodes in the document
    pub(crate) arena: NodeArena,
    /// The body element, default container for top-level content
    body: NodeId,
    /// Listeners attached to elements in this document
    listeners: EventListeners,
}

impl PartialEq for DocumentImpl {
    fn eq(&self, other: &Self) -> bool {
        self.arena == other.arena && self.body == other.body
    }
}

impl Default for DocumentImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentImpl {
    /// Creates a new document with a document node and an attached body element
    #[must_use]
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.register_node(NodeImpl::new_document()).unwrap_or_default();
        let body = arena.register_node(NodeImpl::new_element("body")).unwrap_or_default();

        let mut doc = Self {
            arena,
            body,
            listeners: EventListeners::default(),
        };
        doc.append_child(root, body);

        doc
    }

    /// Returns the node with the given id
    pub fn node_by_id(&self, node_id: NodeId) -> Option<&NodeImpl> {
        self.arena.node_ref(node_id)
    }

    /// Number of listeners registered on all elements
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true when `target` is `node_id` itself or lives anywhere below it
    fn has_node_id_recursive(&self, node_id: NodeId, target: NodeId) -> bool {
        TreeIterator::from_node(self, node_id).any(|id| id == target)
    }

    /// Removes a node and all its descendants from the arena
    fn delete_subtree(&mut self, node_id: NodeId) {
        self.detach_node(node_id);

        let ids = TreeIterator::from_node(self, node_id).collect::<Vec<_>>();
        for id in ids {
            self.listeners.remove_node(id);
            self.arena.delete_node(id);
        }
    }

    fn with_classlist(&mut self, node_id: NodeId, f: impl FnOnce(&mut ClassListImpl)) {
        match self
            .arena
            .node_mut(node_id)
            .and_then(|node| node.get_element_data_mut())
        {
            Some(data) => f(data.classlist_mut()),
            None => warn!("cannot change classes: node {node_id} is not an element"),
        }
    }

    fn collect_text(&self, node_id: NodeId, buffer: &mut String) {
        let Some(node) = self.arena.node_ref(node_id) else {
            return;
        };

        if let Some(data) = node.get_text_data() {
            buffer.push_str(data.value());
        }

        for child_id in node.children() {
            self.collect_text(*child_id, buffer);
        }
    }
}

impl Document for DocumentImpl {
    fn root(&self) -> NodeId {
        NodeId::root()
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn contains_node(&self, node_id: NodeId) -> bool {
        self.arena.node_ref(node_id).is_some()
    }

    fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let node = NodeImpl::new_element(tag);
        // freshly created nodes are never registered, so this cannot be refused
        self.arena.register_node(node).unwrap_or_default()
    }

    fn tag_name(&self, node_id: NodeId) -> Option<String> {
        self.arena
            .node_ref(node_id)
            .and_then(|node| node.get_element_data())
            .map(|data| data.name().to_owned())
    }

    fn set_classes(&mut self, node_id: NodeId, classes: &[&str]) {
        self.with_classlist(node_id, |list| *list = ClassListImpl::from(classes));
    }

    fn add_class(&mut self, node_id: NodeId, class: &str) {
        self.with_classlist(node_id, |list| list.add(class));
    }

    fn remove_class(&mut self, node_id: NodeId, class: &str) {
        self.with_classlist(node_id, |list| list.remove(class));
    }

    fn has_class(&self, node_id: NodeId, class: &str) -> bool {
        self.arena
            .node_ref(node_id)
            .and_then(|node| node.get_element_data())
            .is_some_and(|data| data.classlist().contains(class))
    }

    fn classes(&self, node_id: NodeId) -> Vec<String> {
        self.arena
            .node_ref(node_id)
            .and_then(|node| node.get_element_data())
            .map(|data| data.classlist().names().to_vec())
            .unwrap_or_default()
    }

    fn set_text_content(&mut self, node_id: NodeId, text: &str) {
        let Some(node) = self.arena.node_ref(node_id) else {
            warn!("cannot set text: node {node_id} not found");
            return;
        };

        for child_id in node.children().to_vec() {
            self.delete_subtree(child_id);
        }

        if text.is_empty() {
            return;
        }

        if let Some(text_id) = self.arena.register_node(NodeImpl::new_text(text)) {
            self.append_child(node_id, text_id);
        }
    }

    fn text_content(&self, node_id: NodeId) -> String {
        let mut buffer = String::new();
        self.collect_text(node_id, &mut buffer);
        buffer
    }

    fn attach_node(&mut self, node_id: NodeId, parent_id: NodeId, position: Option<usize>) {
        if !self.contains_node(parent_id) || !self.contains_node(node_id) {
            warn!("cannot attach node {node_id} to {parent_id}: node not found");
            return;
        }

        // Check if the node is an ancestor of the parent. This would make the tree cyclic
        if self.has_node_id_recursive(node_id, parent_id) {
            warn!("cannot attach node {node_id} to {parent_id}: node would become its own ancestor");
            return;
        }

        self.detach_node(node_id);

        if let Some(parent) = self.arena.node_mut(parent_id) {
            match position {
                Some(idx) => parent.insert(node_id, idx),
                None => parent.push(node_id),
            }
        }
        if let Some(node) = self.arena.node_mut(node_id) {
            node.set_parent(Some(parent_id));
        }
    }

    fn detach_node(&mut self, node_id: NodeId) {
        let Some(parent_id) = self.arena.node_ref(node_id).and_then(NodeImpl::parent_id) else {
            return;
        };

        if let Some(parent) = self.arena.node_mut(parent_id) {
            parent.remove(node_id);
        }
        if let Some(node) = self.arena.node_mut(node_id) {
            node.set_parent(None);
        }
    }

    fn delete_node(&mut self, node_id: NodeId) {
        if !self.contains_node(node_id) {
            debug!("node {node_id} is already deleted");
            return;
        }
        self.delete_subtree(node_id);
    }

    fn parent_id(&self, node_id: NodeId) -> Option<NodeId> {
        self.arena.node_ref(node_id).and_then(NodeImpl::parent_id)
    }

    fn children(&self, node_id: NodeId) -> Vec<NodeId> {
        self.arena
            .node_ref(node_id)
            .map(|node| node.children().to_vec())
            .unwrap_or_default()
    }

    fn elements_by_class_name(&self, node_id: NodeId, class: &str) -> Vec<NodeId> {
        let query = Query::new().contains_class(class).find_all();
        match DocumentQuery::query(self, node_id, &query) {
            Ok(found) => found,
            Err(err) => {
                warn!("query for class {class} failed: {err}");
                Vec::new()
            }
        }
    }

    fn add_event_listener(&mut self, node_id: NodeId, kind: EventKind, listener: EventListener) -> ListenerId {
        if !self.contains_node(node_id) {
            warn!("adding listener to unknown node {node_id}");
        }
        self.listeners.add_listener(node_id, kind, listener)
    }

    fn remove_event_listener(&mut self, node_id: NodeId, listener_id: ListenerId) -> bool {
        self.listeners.remove_listener(node_id, listener_id)
    }

    fn event_listeners(&self, node_id: NodeId, kind: EventKind) -> Vec<EventListener> {
        self.listeners.listeners_for(node_id, kind)
    }

    fn write(&self) -> String {
        DocumentWriter::write_from_node(NodeId::root(), self)
    }

    fn write_from_node(&self, node_id: NodeId) -> String {
        DocumentWriter::write_from_node(node_id, self)
    }
}

impl Display for DocumentImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.write())
    }
}

/// Iterates a (sub)tree in tree order (preorder depth-first), starting with the node itself
pub struct TreeIterator<'a> {
    node_stack: Vec<NodeId>,
    document: &'a DocumentImpl,
}

impl<'a> TreeIterator<'a> {
    #[must_use]
    pub fn new(doc: &'a DocumentImpl) -> Self {
        Self::from_node(doc, NodeId::root())
    }

    #[must_use]
    pub fn from_node(doc: &'a DocumentImpl, node_id: NodeId) -> Self {
        Self {
            node_stack: vec![node_id],
            document: doc,
        }
    }
}

impl Iterator for TreeIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let current_node_id = self.node_stack.pop()?;

            if let Some(current_node) = self.document.arena.node_ref(current_node_id) {
                self.node_stack.extend(current_node.children().iter().rev());
                return Some(current_node_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::builder::DocumentBuilderImpl;
    use gosub_shared::event::Event;
    use gosub_shared::traits::document::DocumentBuilder;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn new_document_has_body() {
        let doc = DocumentImpl::new();
        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.parent_id(doc.body()), Some(doc.root()));
        assert_eq!(doc.tag_name(doc.body()).as_deref(), Some("body"));
        assert_eq!(doc.write(), "<body></body>");
    }

    #[test]
    fn created_elements_are_detached() {
        let mut doc = DocumentImpl::new();
        let div = doc.create_element("div");
        assert!(doc.contains_node(div));
        assert_eq!(doc.parent_id(div), None);
        assert!(doc.children(doc.body()).is_empty());
    }

    #[test]
    fn relocate() {
        let mut doc = DocumentImpl::new();
        let body = doc.body();
        let parent = doc.create_element("parent");
        let other = doc.create_element("other");
        let node = doc.create_element("div");
        doc.append_child(body, parent);
        doc.append_child(body, other);

        doc.append_child(parent, node);
        assert_eq!(doc.children(parent), vec![node]);

        doc.append_child(other, node);
        assert!(doc.children(parent).is_empty());
        assert_eq!(doc.children(other), vec![node]);
        assert_eq!(doc.parent_id(node), Some(other));
    }

    #[test]
    fn refuse_cycles() {
        testing_logger::setup();

        let mut doc = DocumentImpl::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        doc.append_child(outer, inner);

        doc.append_child(inner, outer);
        doc.append_child(inner, inner);

        assert_eq!(doc.parent_id(outer), None);
        assert!(doc.children(inner).is_empty());

        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 2);
            assert_eq!(captured_logs[0].level, log::Level::Warn);
        });
    }

    #[test]
    fn detach() {
        let mut doc = DocumentImpl::new();
        let body = doc.body();
        let div = doc.create_element("div");
        doc.append_child(body, div);
        doc.detach_node(div);

        assert!(doc.children(body).is_empty());
        assert_eq!(doc.parent_id(div), None);
        assert!(doc.contains_node(div));
    }

    #[test]
    fn attach_at_position() {
        let mut doc = DocumentImpl::new();
        let body = doc.body();
        let first = doc.create_element("div");
        let second = doc.create_element("div");
        let third = doc.create_element("div");
        doc.append_child(body, first);
        doc.append_child(body, second);

        doc.attach_node(third, body, Some(0));
        assert_eq!(doc.children(body), vec![third, first, second]);

        // moving within the same parent
        doc.attach_node(second, body, Some(1));
        assert_eq!(doc.children(body), vec![third, second, first]);
        assert_eq!(doc.parent_id(second), Some(body));
    }

    #[test]
    fn delete_node() {
        let mut doc = DocumentImpl::new();
        let body = doc.body();
        let count = doc.node_count();
        let div = doc.create_element("div");
        doc.append_child(body, div);
        let span = doc.create_element("span");
        doc.append_child(div, span);
        doc.set_text_content(span, "text");
        doc.add_event_listener(span, EventKind::Click, Rc::new(|_: &Event| {}));

        doc.delete_node(div);
        assert!(doc.children(body).is_empty());
        assert!(!doc.contains_node(span));
        assert_eq!(doc.node_count(), count);
        assert_eq!(doc.listener_count(), 0);

        doc.delete_node(div);
        assert_eq!(doc.node_count(), count);
    }

    #[test]
    fn text_content_replaces_children() {
        let mut doc = DocumentImpl::new();
        let div = doc.create_element("div");
        let child = doc.create_element("span");
        doc.append_child(div, child);
        doc.set_text_content(child, "inner");
        assert_eq!(doc.text_content(div), "inner");

        doc.set_text_content(div, "+");
        assert_eq!(doc.text_content(div), "+");
        assert!(!doc.contains_node(child));
        assert_eq!(doc.children(div).len(), 1);

        doc.set_text_content(div, "");
        assert!(doc.children(div).is_empty());
        assert_eq!(doc.text_content(div), "");
    }

    #[test]
    fn classes() {
        let mut doc = DocumentImpl::new();
        let div = doc.create_element("div");
        doc.set_classes(div, &["a", "b"]);
        doc.add_class(div, "c");
        doc.remove_class(div, "a");

        assert!(doc.has_class(div, "b"));
        assert!(!doc.has_class(div, "a"));
        assert_eq!(doc.classes(div), vec!["b", "c"]);

        doc.set_classes(div, &["x"]);
        assert_eq!(doc.classes(div), vec!["x"]);
    }

    #[test]
    fn classes_on_text_node_are_ignored() {
        testing_logger::setup();

        let mut doc = DocumentImpl::new();
        let div = doc.create_element("div");
        doc.set_text_content(div, "text");
        let text = doc.children(div)[0];
        doc.add_class(text, "nope");

        assert!(doc.classes(text).is_empty());
        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 1);
            assert_eq!(captured_logs[0].level, log::Level::Warn);
        });
    }

    #[test]
    fn elements_by_class_name() {
        let mut doc = DocumentImpl::new();
        let outer = doc.create_element("div");
        let button = doc.create_element("div");
        let nested = doc.create_element("div");
        let nested_button = doc.create_element("div");
        doc.set_classes(outer, &["button"]);
        doc.set_classes(button, &["button"]);
        doc.set_classes(nested_button, &["button"]);
        doc.append_child(outer, button);
        doc.append_child(outer, nested);
        doc.append_child(nested, nested_button);

        assert_eq!(doc.elements_by_class_name(outer, "button"), vec![button, nested_button]);
        assert_eq!(doc.elements_by_class_name(nested, "button"), vec![nested_button]);
        assert!(doc.elements_by_class_name(button, "button").is_empty());
    }

    #[test]
    fn tree_iterator_order() {
        let mut doc = DocumentImpl::new();
        let body = doc.body();
        let div = doc.create_element("div");
        let p = doc.create_element("p");
        let div2 = doc.create_element("div");
        doc.append_child(body, div);
        doc.append_child(div, p);
        doc.append_child(body, div2);

        let order = TreeIterator::new(&doc).collect::<Vec<_>>();
        assert_eq!(order, vec![NodeId::root(), body, div, p, div2]);
    }

    #[test]
    fn dispatch_click() {
        let mut handle = DocumentBuilderImpl::new_document();
        let button = handle.get_mut().create_element("div");

        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let weak = handle.downgrade();
        let listener: EventListener = Rc::new(move |event: &Event| {
            counter.set(counter.get() + 1);
            // listeners may mutate the document while being dispatched
            if let Some(mut doc) = weak.upgrade() {
                doc.get_mut().set_text_content(event.target, "clicked");
            }
        });
        let listener_id = handle.get_mut().add_event_listener(button, EventKind::Click, listener);

        assert_eq!(handle.dispatch_event(button, EventKind::Click).unwrap(), 1);
        assert_eq!(clicks.get(), 1);
        assert_eq!(handle.get().text_content(button), "clicked");

        assert!(handle.get_mut().remove_event_listener(button, listener_id));
        assert_eq!(handle.dispatch_event(button, EventKind::Click).unwrap(), 0);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn dispatch_to_unknown_node() {
        let handle = DocumentBuilderImpl::new_document();
        assert!(handle.dispatch_event(NodeId::from(99_usize), EventKind::Click).is_err());
    }

    #[test]
    fn listeners_do_not_keep_document_alive() {
        let mut handle = DocumentBuilderImpl::new_document();
        let button = handle.get_mut().create_element("div");
        let weak = handle.downgrade();
        let inner = weak.clone();
        handle
            .get_mut()
            .add_event_listener(button, EventKind::Click, Rc::new(move |_: &Event| drop(inner.upgrade())));

        drop(handle);
        assert!(weak.upgrade().is_none());
    }
}
