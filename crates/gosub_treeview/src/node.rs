//! A single node of the rendered tree.
//!
//! A node goes through `created -> rendered -> attached`. Rendering builds the elements of the node
//! (and of every child that is not rendered yet) and appends them to a container. Attaching binds
//! the click listener of the expand control and happens exactly once. After that, every click on
//! the expand control flips the node between collapsed and expanded.
use crate::config::TreeViewConfig;
use crate::errors::TreeViewError;
use crate::record::{ItemId, Record};
use crate::state::VisualState;
use gosub_shared::document::{DocumentHandle, WeakDocumentHandle};
use gosub_shared::event::{Event, EventKind, EventListener, ListenerId};
use gosub_shared::node::NodeId;
use gosub_shared::traits::document::Document;
use log::{debug, trace, warn};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

/// Elements that make up the visual of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Visual {
    /// Root element, carries the state classes
    element: NodeId,
    expand_button: NodeId,
    title_text: NodeId,
    /// Holds the elements of the children
    content: NodeId,
}

pub struct TreeNode<D: Document> {
    id: ItemId,
    parent_id: ItemId,
    name: String,
    /// Children in insertion order
    children: Vec<TreeNode<D>>,
    /// Position of each child in `children`, keyed by child id
    child_index: HashMap<ItemId, usize>,
    /// Shared with the click listener of the expand control
    state: Rc<Cell<VisualState>>,
    visual: Option<Visual>,
    attached: bool,
    listener: Option<ListenerId>,
    document: DocumentHandle<D>,
    config: Rc<TreeViewConfig>,
}

impl<D: Document> TreeNode<D> {
    /// Creates a collapsed node without children and without visual
    pub fn new(document: &DocumentHandle<D>, record: &Record) -> Self {
        Self::with_config(document, record, Rc::new(TreeViewConfig::default()))
    }

    pub fn with_config(document: &DocumentHandle<D>, record: &Record, config: Rc<TreeViewConfig>) -> Self {
        Self {
            id: record.id,
            parent_id: record.parent_id,
            name: record.name.clone(),
            children: Vec::new(),
            child_index: HashMap::new(),
            state: Rc::new(Cell::new(VisualState::default())),
            visual: None,
            attached: false,
            listener: None,
            document: document.clone(),
            config,
        }
    }

    /// Pre-populates the children of a node that is not rendered yet. The children are rendered
    /// together with this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode<D>>) -> Self {
        for child in children {
            self.insert_child(child);
        }
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn parent_id(&self) -> ItemId {
        self.parent_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children in the order they were added
    pub fn children(&self) -> &[TreeNode<D>] {
        &self.children
    }

    pub fn child(&self, id: ItemId) -> Option<&TreeNode<D>> {
        self.child_index.get(&id).map(|&pos| &self.children[pos])
    }

    pub fn child_mut(&mut self, id: ItemId) -> Option<&mut TreeNode<D>> {
        self.child_index.get(&id).map(|&pos| &mut self.children[pos])
    }

    /// Depth-first search for this node or one of its descendants
    pub fn find(&self, id: ItemId) -> Option<&TreeNode<D>> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn state(&self) -> VisualState {
        self.state.get()
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.get().collapsed
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Root element of the node, once its visual has been created
    pub fn element(&self) -> Option<NodeId> {
        self.visual.map(|visual| visual.element)
    }

    /// Element that holds the elements of the children
    pub fn content_element(&self) -> Option<NodeId> {
        self.visual.map(|visual| visual.content)
    }

    pub fn expand_button(&self) -> Option<NodeId> {
        self.visual.map(|visual| visual.expand_button)
    }

    pub fn title_element(&self) -> Option<NodeId> {
        self.visual.map(|visual| visual.title_text)
    }

    pub fn document(&self) -> &DocumentHandle<D> {
        &self.document
    }

    /// Adds a child, replacing an earlier child with the same id. When `render_immediately` is
    /// set, the child is rendered into the content element of this node first.
    pub fn add_child(&mut self, mut child: TreeNode<D>, render_immediately: bool) -> Result<(), TreeViewError> {
        if render_immediately {
            let content = self.content_element().ok_or(TreeViewError::NotRendered { id: self.id })?;
            child.render(Some(content))?;
        }

        self.insert_child(child);
        self.set_collapsed(self.state.get().collapsed);
        Ok(())
    }

    fn insert_child(&mut self, child: TreeNode<D>) {
        match self.child_index.get(&child.id) {
            Some(&pos) => {
                warn!("tree node {} already has a child {}, replacing it", self.id, child.id);
                self.move_into_place_of(&child, pos);
                self.children[pos] = child;
            }
            None => {
                self.child_index.insert(child.id, self.children.len());
                self.children.push(child);
            }
        }

        let mut state = self.state.get();
        state.expandable = true;
        self.state.set(state);
    }

    /// Moves the element of `child` to where the element of the child at `pos` is, so the
    /// rendered order stays the order of `children`
    fn move_into_place_of(&mut self, child: &TreeNode<D>, pos: usize) {
        let (Some(old), Some(new)) = (self.children[pos].element(), child.element()) else {
            return;
        };
        if !child.is_attached() {
            return;
        }

        let mut doc = self.document.get_mut();
        let Some(parent) = doc.parent_id(old) else {
            return;
        };
        doc.detach_node(new);
        let position = doc.children(parent).iter().position(|&id| id == old);
        doc.attach_node(new, parent, position);
    }

    /// Creates the visual, appends it to the container (or the body of the document) and
    /// attaches the node. A node can be rendered only once.
    pub fn render(&mut self, container: Option<NodeId>) -> Result<NodeId, TreeViewError> {
        if self.attached {
            return Err(TreeViewError::AlreadyAttached { id: self.id });
        }

        let container = match container {
            Some(container) => container,
            None => self.document.get().body(),
        };
        if !self.document.get().contains_node(container) {
            return Err(TreeViewError::ContainerNotFound(container));
        }

        let element = self.create_visual()?;

        self.document.get_mut().append_child(container, element);
        self.attach()?;

        debug!("rendered tree node {} into {container}", self.id);
        Ok(element)
    }

    /// Builds the elements of this node without placing them in the document:
    ///
    /// ```text
    /// element          (state classes)
    ///   title
    ///     expand button
    ///     title text   (name)
    ///   content        (elements of the children)
    /// ```
    ///
    /// Children that are not rendered yet are rendered into the content element. A node that
    /// already has a visual returns its existing element.
    pub fn create_visual(&mut self) -> Result<NodeId, TreeViewError> {
        if let Some(visual) = self.visual {
            return Ok(visual.element);
        }

        let visual = {
            let mut doc = self.document.get_mut();
            let css = &self.config.css;
            let tag = self.config.tag.as_str();

            let element = doc.create_element(tag);
            let title = doc.create_element(tag);
            let expand_button = doc.create_element(tag);
            let title_text = doc.create_element(tag);
            let content = doc.create_element(tag);

            doc.set_classes(title, &[css.title.as_str()]);
            doc.set_classes(expand_button, &[css.expand_button.as_str()]);
            doc.set_classes(title_text, &[css.title_text.as_str()]);
            doc.set_classes(content, &[css.internal.as_str()]);
            doc.set_text_content(title_text, &self.name);

            doc.append_child(title, expand_button);
            doc.append_child(title, title_text);
            doc.append_child(element, title);
            doc.append_child(element, content);

            Visual {
                element,
                expand_button,
                title_text,
                content,
            }
        };

        for child in &mut self.children {
            match child.element() {
                Some(child_element) if child.is_attached() => {
                    self.document.get_mut().append_child(visual.content, child_element);
                }
                _ => {
                    child.render(Some(visual.content))?;
                }
            }
        }

        self.visual = Some(visual);
        self.apply_state();

        Ok(visual.element)
    }

    /// Binds the click listener of the expand control. Fails when the node is already attached
    /// or has no visual.
    pub fn attach(&mut self) -> Result<(), TreeViewError> {
        if self.attached {
            return Err(TreeViewError::AlreadyAttached { id: self.id });
        }
        let Some(visual) = self.visual else {
            return Err(TreeViewError::NotRendered { id: self.id });
        };

        let listener = toggle_listener(
            self.id,
            self.document.downgrade(),
            Rc::clone(&self.state),
            Rc::clone(&self.config),
            visual,
        );
        let listener_id = self
            .document
            .get_mut()
            .add_event_listener(visual.expand_button, EventKind::Click, listener);

        self.listener = Some(listener_id);
        self.attached = true;
        self.apply_state();

        Ok(())
    }

    /// Collapses or expands the node. Leaves have nothing to collapse and ignore this.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        let mut state = self.state.get();
        if !state.expandable {
            return;
        }

        state.collapsed = collapsed;
        self.state.set(state);
        self.apply_state();
    }

    /// Writes the current state to the elements of this node
    fn apply_state(&mut self) {
        let Some(visual) = self.visual else {
            return;
        };

        apply_visual_state(&mut *self.document.get_mut(), &visual, self.state.get(), &self.config);
    }
}

impl<D: Document> Drop for TreeNode<D> {
    fn drop(&mut self) {
        let Some(visual) = self.visual else {
            return;
        };

        // Drop can run from within a listener, so the document might be borrowed
        match self.document.try_get_mut() {
            Ok(mut doc) => {
                // deleting an ancestor already removed the elements of this node
                if !doc.contains_node(visual.element) {
                    return;
                }
                if let Some(listener_id) = self.listener.take() {
                    doc.remove_event_listener(visual.expand_button, listener_id);
                }
                doc.delete_node(visual.element);
            }
            Err(_) => warn!("cannot remove tree node {}: document is in use", self.id),
        }
    }
}

impl<D: Document> std::fmt::Debug for TreeNode<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeNode")
            .field("id", &self.id)
            .field("parent_id", &self.parent_id)
            .field("name", &self.name)
            .field("state", &self.state.get())
            .field("attached", &self.attached)
            .field("children", &self.children)
            .finish()
    }
}

fn apply_visual_state<D: Document>(doc: &mut D, visual: &Visual, state: VisualState, config: &TreeViewConfig) {
    doc.set_classes(visual.element, &state.classes(&config.css));
    doc.set_text_content(visual.expand_button, state.glyph(&config.glyphs));
}

/// Listener for the expand control. It only holds a weak handle, so the document does not keep
/// itself alive through its own listeners.
fn toggle_listener<D: Document>(
    id: ItemId,
    document: WeakDocumentHandle<D>,
    state: Rc<Cell<VisualState>>,
    config: Rc<TreeViewConfig>,
    visual: Visual,
) -> EventListener {
    Rc::new(move |_: &Event| {
        let current = state.get();
        if !current.expandable {
            return;
        }

        let next = current.toggled();
        state.set(next);

        match document.upgrade() {
            Some(mut document) => {
                apply_visual_state(&mut *document.get_mut(), &visual, next, &config);
                trace!("tree node {id} is now {}", if next.collapsed { "collapsed" } else { "expanded" });
            }
            None => warn!("tree node {id} toggled after its document was dropped"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gosub_dom::{DocumentBuilderImpl, DocumentImpl};
    use gosub_shared::traits::document::DocumentBuilder;

    fn node(doc: &DocumentHandle<DocumentImpl>, id: ItemId, name: &str, parent_id: ItemId) -> TreeNode<DocumentImpl> {
        TreeNode::new(doc, &Record::new(id, name, parent_id))
    }

    fn click(doc: &DocumentHandle<DocumentImpl>, node: &TreeNode<DocumentImpl>) {
        let button = node.expand_button().unwrap();
        doc.dispatch_event(button, EventKind::Click).unwrap();
    }

    #[test]
    fn new_node() {
        let doc = DocumentBuilderImpl::new_document();
        let node = node(&doc, 1, "A", 0);

        assert_eq!(node.id(), 1);
        assert_eq!(node.parent_id(), 0);
        assert_eq!(node.name(), "A");
        assert!(node.is_collapsed());
        assert!(!node.is_attached());
        assert!(!node.has_children());
        assert!(node.element().is_none());
    }

    #[test]
    fn render_into_body() {
        let doc = DocumentBuilderImpl::new_document();
        let mut node = node(&doc, 1, "A", 0);

        let element = node.render(None).unwrap();
        assert!(node.is_attached());

        let d = doc.get();
        assert_eq!(d.parent_id(element), Some(d.body()));
        assert_eq!(d.classes(element), vec!["b-node"]);
        assert_eq!(d.text_content(node.title_element().unwrap()), "A");
        assert_eq!(d.text_content(node.expand_button().unwrap()), "");
        assert_eq!(d.elements_by_class_name(element, "b-node__internal"), vec![node.content_element().unwrap()]);
        assert_eq!(
            d.write_from_node(element),
            r#"<div class="b-node"><div class="b-node__title"><div class="b-node__expand-button"></div><div class="b-node__title-text">A</div></div><div class="b-node__internal"></div></div>"#
        );
    }

    #[test]
    fn render_twice_fails() {
        let doc = DocumentBuilderImpl::new_document();
        let mut node = node(&doc, 1, "A", 0);
        node.render(None).unwrap();
        let count = doc.get().node_count();

        assert!(matches!(node.render(None), Err(TreeViewError::AlreadyAttached { id: 1 })));
        assert!(matches!(node.attach(), Err(TreeViewError::AlreadyAttached { id: 1 })));
        assert_eq!(doc.get().node_count(), count);
        assert_eq!(doc.get().elements_by_class_name(doc.get().body(), "b-node").len(), 1);
    }

    #[test]
    fn render_into_unknown_container() {
        let doc = DocumentBuilderImpl::new_document();
        let mut node = node(&doc, 1, "A", 0);

        assert!(matches!(
            node.render(Some(NodeId::from(999_usize))),
            Err(TreeViewError::ContainerNotFound(_))
        ));
        assert!(!node.is_attached());
    }

    #[test]
    fn create_visual_after_render_keeps_visual() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        let element = parent.render(None).unwrap();
        parent.add_child(node(&doc, 2, "B", 1), true).unwrap();
        let count = doc.get().node_count();

        assert_eq!(parent.create_visual().unwrap(), element);
        assert_eq!(doc.get().node_count(), count);
        assert_eq!(parent.element(), Some(element));

        drop(parent);
        let d = doc.get();
        assert!(d.children(d.body()).is_empty());
        assert_eq!(d.listener_count(), 0);
    }

    #[test]
    fn attach_without_visual() {
        let doc = DocumentBuilderImpl::new_document();
        let mut node = node(&doc, 1, "A", 0);
        assert!(matches!(node.attach(), Err(TreeViewError::NotRendered { id: 1 })));
    }

    #[test]
    fn create_visual_then_render_reuses_element() {
        let doc = DocumentBuilderImpl::new_document();
        let mut node = node(&doc, 1, "A", 0);

        let element = node.create_visual().unwrap();
        assert_eq!(doc.get().parent_id(element), None);
        assert!(!node.is_attached());

        assert_eq!(node.render(None).unwrap(), element);
        assert_eq!(doc.get().parent_id(element), Some(doc.get().body()));
    }

    #[test]
    fn add_child_makes_expandable() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();

        parent.add_child(node(&doc, 2, "B", 1), true).unwrap();
        parent.add_child(node(&doc, 3, "C", 1), true).unwrap();

        assert!(parent.has_children());
        assert!(parent.is_collapsed());
        let names: Vec<&str> = parent.children().iter().map(TreeNode::name).collect();
        assert_eq!(names, vec!["B", "C"]);

        let d = doc.get();
        let element = parent.element().unwrap();
        assert_eq!(d.classes(element), vec!["b-node", "b-node_expandable", "b-node_collapsed"]);
        assert_eq!(d.text_content(parent.expand_button().unwrap()), "+");

        let content = parent.content_element().unwrap();
        let children: Vec<NodeId> = parent.children().iter().filter_map(TreeNode::element).collect();
        assert_eq!(d.children(content), children);
    }

    #[test]
    fn add_child_without_render() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.add_child(node(&doc, 2, "B", 1), false).unwrap();

        assert!(parent.has_children());
        assert!(parent.child(2).is_some_and(|child| !child.is_attached()));
    }

    #[test]
    fn add_child_render_requires_visual() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);

        assert!(matches!(
            parent.add_child(node(&doc, 2, "B", 1), true),
            Err(TreeViewError::NotRendered { id: 1 })
        ));
        assert!(!parent.has_children());
    }

    #[test]
    fn children_are_keyed_by_id() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();

        parent.add_child(node(&doc, 7, "seven", 1), true).unwrap();
        parent.add_child(node(&doc, 3, "three", 1), true).unwrap();

        assert_eq!(parent.child(7).map(TreeNode::name), Some("seven"));
        assert_eq!(parent.child(3).map(TreeNode::name), Some("three"));
        assert!(parent.child(1).is_none());
        parent.child_mut(3).unwrap().set_collapsed(false);
    }

    #[test]
    fn duplicate_child_replaces_in_place() {
        testing_logger::setup();

        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();

        parent.add_child(node(&doc, 2, "first", 1), true).unwrap();
        parent.add_child(node(&doc, 3, "other", 1), true).unwrap();
        parent.add_child(node(&doc, 2, "second", 1), true).unwrap();

        let names: Vec<&str> = parent.children().iter().map(TreeNode::name).collect();
        assert_eq!(names, vec!["second", "other"]);

        // the replaced child leaves the document, its replacement takes its place
        let content = parent.content_element().unwrap();
        let elements: Vec<NodeId> = parent.children().iter().filter_map(TreeNode::element).collect();
        assert_eq!(doc.get().children(content), elements);
        assert_eq!(doc.get().listener_count(), 3);

        testing_logger::validate(|captured_logs| {
            assert!(captured_logs
                .iter()
                .any(|log| log.level == log::Level::Warn && log.body.contains("already has a child 2")));
        });
    }

    #[test]
    fn duplicate_rendered_elsewhere_keeps_position() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();
        parent.add_child(node(&doc, 2, "first", 1), true).unwrap();
        parent.add_child(node(&doc, 3, "other", 1), true).unwrap();

        let mut second = node(&doc, 2, "second", 1);
        second.render(None).unwrap();
        parent.add_child(second, false).unwrap();

        let content = parent.content_element().unwrap();
        let d = doc.get();
        assert_eq!(d.children(d.body()), vec![parent.element().unwrap()]);
        let names: Vec<String> = d
            .children(content)
            .into_iter()
            .map(|element| d.text_content(d.elements_by_class_name(element, "b-node__title-text")[0]))
            .collect();
        assert_eq!(names, vec!["second", "other"]);
    }

    #[test]
    fn prepopulated_children_render_with_parent() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0).with_children(vec![node(&doc, 2, "B", 1), node(&doc, 3, "C", 1)]);

        parent.render(None).unwrap();

        assert!(parent.children().iter().all(TreeNode::is_attached));
        let d = doc.get();
        assert_eq!(d.children(parent.content_element().unwrap()).len(), 2);
        assert_eq!(d.text_content(parent.expand_button().unwrap()), "+");
        assert!(d.has_class(parent.element().unwrap(), "b-node_collapsed"));
    }

    #[test]
    fn toggle_expands_and_collapses() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();
        parent.add_child(node(&doc, 2, "B", 1), true).unwrap();
        let element = parent.element().unwrap();
        let button = parent.expand_button().unwrap();

        click(&doc, &parent);
        assert!(!parent.is_collapsed());
        assert_eq!(doc.get().classes(element), vec!["b-node", "b-node_expandable", "b-node_expanded"]);
        assert_eq!(doc.get().text_content(button), "\u{2212}");

        click(&doc, &parent);
        assert!(parent.is_collapsed());
        assert_eq!(doc.get().classes(element), vec!["b-node", "b-node_expandable", "b-node_collapsed"]);
        assert_eq!(doc.get().text_content(button), "+");
    }

    #[test]
    fn toggle_is_local() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();
        let mut child = node(&doc, 2, "B", 1);
        child.render(parent.content_element()).unwrap();
        child.add_child(node(&doc, 3, "C", 2), true).unwrap();
        parent.add_child(child, false).unwrap();

        click(&doc, &parent);
        assert!(!parent.is_collapsed());
        let child = parent.child(2).unwrap();
        assert!(child.is_collapsed());
        assert!(doc.get().has_class(child.element().unwrap(), "b-node_collapsed"));
    }

    #[test]
    fn leaf_does_not_toggle() {
        let doc = DocumentBuilderImpl::new_document();
        let mut leaf = node(&doc, 1, "A", 0);
        leaf.render(None).unwrap();

        click(&doc, &leaf);
        assert!(leaf.is_collapsed());
        assert_eq!(doc.get().classes(leaf.element().unwrap()), vec!["b-node"]);
        assert_eq!(doc.get().text_content(leaf.expand_button().unwrap()), "");

        leaf.set_collapsed(false);
        assert!(leaf.is_collapsed());
    }

    #[test]
    fn leaf_becomes_expandable_after_add_child() {
        let doc = DocumentBuilderImpl::new_document();
        let mut leaf = node(&doc, 1, "A", 0);
        leaf.render(None).unwrap();
        leaf.add_child(node(&doc, 2, "B", 1), true).unwrap();

        click(&doc, &leaf);
        assert!(!leaf.is_collapsed());
    }

    #[test]
    fn add_child_keeps_expanded_state() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();
        parent.add_child(node(&doc, 2, "B", 1), true).unwrap();
        click(&doc, &parent);

        parent.add_child(node(&doc, 3, "C", 1), true).unwrap();
        assert!(!parent.is_collapsed());
        assert!(doc.get().has_class(parent.element().unwrap(), "b-node_expanded"));
    }

    #[test]
    fn custom_config() {
        let doc = DocumentBuilderImpl::new_document();
        let mut config = TreeViewConfig::default();
        config.tag = "li".into();
        config.glyphs.collapsed = ">".into();

        let mut parent = TreeNode::with_config(&doc, &Record::new(1, "A", 0), Rc::new(config));
        parent.render(None).unwrap();
        parent.add_child(node(&doc, 2, "B", 1), true).unwrap();

        let d = doc.get();
        assert_eq!(d.tag_name(parent.element().unwrap()).as_deref(), Some("li"));
        assert_eq!(d.text_content(parent.expand_button().unwrap()), ">");
    }

    #[test]
    fn drop_detaches_and_removes_listener() {
        let doc = DocumentBuilderImpl::new_document();
        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();
        parent.add_child(node(&doc, 2, "B", 1), true).unwrap();
        assert_eq!(doc.get().listener_count(), 2);

        drop(parent);

        let d = doc.get();
        assert_eq!(d.listener_count(), 0);
        assert!(d.children(d.body()).is_empty());
    }

    #[test]
    fn drop_removes_elements_from_document() {
        let doc = DocumentBuilderImpl::new_document();
        let count = doc.get().node_count();

        let mut parent = node(&doc, 1, "A", 0);
        parent.render(None).unwrap();
        parent.add_child(node(&doc, 2, "B", 1), true).unwrap();
        parent.add_child(node(&doc, 2, "C", 1), true).unwrap();
        assert!(doc.get().node_count() > count);

        drop(parent);
        assert_eq!(doc.get().node_count(), count);
    }

    #[test]
    fn find_descendant() {
        let doc = DocumentBuilderImpl::new_document();
        let mut child = node(&doc, 2, "B", 1);
        child.add_child(node(&doc, 3, "C", 2), false).unwrap();
        let parent = node(&doc, 1, "A", 0).with_children(vec![child]);

        assert_eq!(parent.find(3).map(TreeNode::name), Some("C"));
        assert_eq!(parent.find(1).map(TreeNode::name), Some("A"));
        assert!(parent.find(4).is_none());
    }
}
