// models/src/vertices.rs
use core::hash::{Hash, Hasher};
use std::fmt;

use crate::identifiers::Identifier;

/// Dense position of a vertex inside the graph that owns it.
pub type VertexIndex = usize;

/// A vertex.
///
/// Vertices are the districts of a transportation network. Identity is the
/// `id` alone; the `name` is a display label and never takes part in
/// equality or hashing.
#[derive(Clone, Debug)]
pub struct Vertex {
    /// The id of the vertex.
    pub id: Identifier,

    /// The display label of the vertex. Defaults to the id.
    pub name: String,
}

impl Vertex {
    /// Creates a new vertex whose name is its id.
    pub fn new(id: Identifier) -> Self {
        Vertex {
            name: id.to_string(),
            id,
        }
    }

    /// Creates a new vertex with a separate display name.
    pub fn with_name(id: Identifier, name: impl Into<String>) -> Self {
        Vertex {
            id,
            name: name.into(),
        }
    }

    /// Returns a reference to the vertex's ID.
    pub fn id(&self) -> &Identifier {
        &self.id
    }

    /// Returns the vertex's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
