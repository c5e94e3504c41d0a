//! Error results that can be returned from the DOM
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("query: generic error: {0}")]
    Query(String),
}
