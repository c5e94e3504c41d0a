//! Gosub tree view
//!
//! Renders flat parent/child records as an expandable tree into a document. The pieces live in
//! their own crates:
//!
//! - `gosub_shared`: node ids, document handles, events and the `Document` trait
//! - `gosub_dom`: an in-memory document that can be written as html
//! - `gosub_config`: the settings store that holds the `treeview.*` settings
//! - `gosub_treeview`: records, hierarchy construction and the tree nodes
pub mod prelude;
pub mod sample;
