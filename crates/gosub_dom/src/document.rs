pub mod builder;
pub mod document_impl;
pub mod query;
