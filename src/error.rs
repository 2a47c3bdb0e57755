//! Typed errors raised by the dependency graph engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An operation was requested on a graph that cannot support it,
    /// e.g. computing blast radius over an empty file set.
    #[error("invalid graph state: {0}")]
    InvalidState(&'static str),
}

pub type GraphResult<T> = std::result::Result<T, GraphError>;
