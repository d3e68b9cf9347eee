// models/src/errors.rs

pub use thiserror::Error;

use crate::identifiers::Identifier;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// `add_edge` referenced an id that was never added with `add_vertex`.
    #[error("referenced vertex {0} was not found in the graph")]
    VertexNotFound(Identifier),

    /// An edge was built against a vertex index the graph does not own.
    #[error("vertex index {0} is out of range for a graph with {1} vertices")]
    VertexIndexOutOfRange(usize, usize),

    /// `find` or `union` was called on a vertex never passed to `make_set`.
    #[error("vertex {0} is not registered in the disjoint set")]
    UnregisteredVertex(usize),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A validation error.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A vertex id was the empty string.
    #[error("identifier must not be empty")]
    EmptyIdentifier,
}

/// A type alias for a `Result` that returns a `GraphError` on failure.
pub type GraphResult<T> = Result<T, GraphError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
