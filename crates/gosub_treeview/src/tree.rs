use crate::config::TreeViewConfig;
use crate::errors::TreeViewError;
use crate::hierarchy::{BuildReport, Hierarchy, HierarchyBuilder, HierarchyNode};
use crate::node::TreeNode;
use crate::record::{ItemId, Record, ROOT_PARENT_ID};
use gosub_shared::document::DocumentHandle;
use gosub_shared::event::EventKind;
use gosub_shared::node::NodeId;
use gosub_shared::traits::document::Document;
use log::debug;
use std::rc::Rc;

/// Renders flat records as a tree of [`TreeNode`]s
pub struct Tree {
    records: Vec<Record>,
    config: Rc<TreeViewConfig>,
}

impl Tree {
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_config(records, TreeViewConfig::default())
    }

    pub fn with_config(records: Vec<Record>, config: TreeViewConfig) -> Self {
        Self {
            records,
            config: Rc::new(config),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn config(&self) -> &TreeViewConfig {
        &self.config
    }

    /// Builds the hierarchy without rendering anything
    pub fn hierarchy(&self) -> Hierarchy {
        HierarchyBuilder::new(&self.records).build()
    }

    /// Renders all descendants of `parent` (or of the implicit root) into `container`. Every node
    /// is rendered before its children. Rendered nodes become children of `parent`; without a
    /// parent the top-level nodes are returned and must be kept alive by the caller.
    pub fn render<D: Document>(
        &self,
        document: &DocumentHandle<D>,
        container: NodeId,
        parent: Option<&mut TreeNode<D>>,
    ) -> Result<Vec<TreeNode<D>>, TreeViewError> {
        let start = parent.as_ref().map_or(ROOT_PARENT_ID, |node| node.id());
        let hierarchy = self.prepare(start)?;
        let nodes = self.render_level(document, container, hierarchy.roots())?;

        match parent {
            Some(parent) => {
                for node in nodes {
                    parent.add_child(node, false)?;
                }
                Ok(Vec::new())
            }
            None => Ok(nodes),
        }
    }

    /// Renders the complete tree into `container` and returns the mounted view
    pub fn mount<D: Document>(
        &self,
        document: &DocumentHandle<D>,
        container: NodeId,
    ) -> Result<TreeView<D>, TreeViewError> {
        let hierarchy = self.prepare(ROOT_PARENT_ID)?;
        let roots = self.render_level(document, container, hierarchy.roots())?;
        debug!("mounted {} tree nodes into {container}", hierarchy.len());

        Ok(TreeView {
            document: document.clone(),
            container,
            roots,
            report: hierarchy.report().clone(),
        })
    }

    fn prepare(&self, start: ItemId) -> Result<Hierarchy, TreeViewError> {
        let hierarchy = HierarchyBuilder::new(&self.records).build_from(start);

        hierarchy.report().log(self.config.report_orphans);
        if self.config.strict {
            hierarchy.report().check()?;
        }

        Ok(hierarchy)
    }

    fn render_level<D: Document>(
        &self,
        document: &DocumentHandle<D>,
        container: NodeId,
        level: &[HierarchyNode],
    ) -> Result<Vec<TreeNode<D>>, TreeViewError> {
        let mut nodes = Vec::with_capacity(level.len());

        for entry in level {
            let mut node = TreeNode::with_config(document, entry.record(), Rc::clone(&self.config));
            node.render(Some(container))?;

            let content = node
                .content_element()
                .ok_or(TreeViewError::NotRendered { id: node.id() })?;
            for child in self.render_level(document, content, entry.children())? {
                node.add_child(child, false)?;
            }

            nodes.push(node);
        }

        Ok(nodes)
    }
}

/// A tree that is rendered into a container of a document. Dropping the view removes the tree
/// from the document.
pub struct TreeView<D: Document> {
    document: DocumentHandle<D>,
    container: NodeId,
    roots: Vec<TreeNode<D>>,
    report: BuildReport,
}

impl<D: Document> TreeView<D> {
    pub fn roots(&self) -> &[TreeNode<D>] {
        &self.roots
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Records that could not be placed in the tree
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Depth-first search for the first node with the given id
    pub fn find(&self, id: ItemId) -> Option<&TreeNode<D>> {
        self.roots.iter().find_map(|node| node.find(id))
    }

    /// Activates the expand control of the given node, as a user click would
    pub fn toggle(&self, id: ItemId) -> Result<(), TreeViewError> {
        let node = self.find(id).ok_or(TreeViewError::UnknownNode(id))?;
        let button = node.expand_button().ok_or(TreeViewError::NotRendered { id })?;

        self.document.dispatch_event(button, EventKind::Click)?;
        Ok(())
    }

    /// Serializes the container and the tree inside it
    pub fn write(&self) -> String {
        self.document.get().write_from_node(self.container)
    }
}
