// models/src/lib.rs

//! Shared graph types for the network analyzer: identifiers, vertices,
//! weighted edges, the arena-backed `Graph`, and `MstResult`.

pub mod edges;
pub mod errors;
pub mod graph;
pub mod identifiers;
pub mod mst_result;
pub mod vertices;

pub use edges::{Edge, Weight};
pub use errors::{GraphError, GraphResult, ValidationError, ValidationResult};
pub use graph::Graph;
pub use identifiers::Identifier;
pub use mst_result::MstResult;
pub use vertices::{Vertex, VertexIndex};
