//! In-memory DOM
//!
//! A small document implementation that offers everything the treeview needs from a host
//! document: element creation, class lists, text content, tree manipulation, queries by class
//! name and click listeners. Documents can be written back as HTML.
pub mod document;
pub mod errors;
pub mod events;
pub mod node;
pub mod writer;

pub use document::builder::DocumentBuilderImpl;
pub use document::document_impl::DocumentImpl;
