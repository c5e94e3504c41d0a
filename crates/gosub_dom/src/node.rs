pub mod arena;
pub mod data;
pub mod node_impl;
pub mod visitor;
