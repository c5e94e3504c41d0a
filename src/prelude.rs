pub use gosub_shared::document::DocumentHandle;
pub use gosub_shared::event::EventKind;
pub use gosub_shared::node::NodeId;
pub use gosub_shared::traits::document::{Document, DocumentBuilder};

pub use gosub_dom::{DocumentBuilderImpl, DocumentImpl};

pub use gosub_config::{config_store, config_store_write};

pub use gosub_treeview::{
    load_records, BuildReport, Hierarchy, HierarchyBuilder, Record, Tree, TreeNode, TreeView, TreeViewConfig,
    TreeViewError, ROOT_PARENT_ID,
};
