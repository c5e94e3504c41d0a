//! Expandable tree view
//!
//! Flat records (`id`, `name`, `parent id`) are turned into a hierarchy, and every record is
//! rendered as a node into a host [`Document`](gosub_shared::traits::document::Document). Nodes
//! with children get an expand control that switches them between collapsed and expanded.
//!
//! ```text
//! records -> HierarchyBuilder -> Hierarchy -> Tree::render / Tree::mount -> TreeNode(s)
//! ```
pub mod config;
pub mod errors;
pub mod hierarchy;
pub mod node;
pub mod record;
pub mod state;
pub mod tree;

pub use config::TreeViewConfig;
pub use errors::TreeViewError;
pub use hierarchy::{BuildReport, Hierarchy, HierarchyBuilder, HierarchyNode};
pub use node::TreeNode;
pub use record::{load_records, ItemId, Record, ROOT_PARENT_ID};
pub use state::VisualState;
pub use tree::{Tree, TreeView};
