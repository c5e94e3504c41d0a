//! Shared functionality
//!
//! This crate supplies the types and traits that are shared between the DOM implementation,
//! the configuration store and the treeview itself.
//!

pub mod document;
pub mod event;
pub mod node;
pub mod traits;
pub mod types;
