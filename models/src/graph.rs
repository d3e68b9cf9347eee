// models/src/graph.rs
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::edges::{Edge, Weight};
use crate::errors::{GraphError, GraphResult};
use crate::identifiers::Identifier;
use crate::vertices::{Vertex, VertexIndex};

/// A weighted graph backed by an arena of vertices.
///
/// Vertices keep their insertion order, which is the enumeration order every
/// caller sees. An undirected graph stores each connection twice, once per
/// direction, and reports half of its stored edges from `edge_count`.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<Identifier, VertexIndex>,
    edges: Vec<Edge>,

    // For fast traversal (adjacency list)
    outgoing: Vec<Vec<usize>>, // vertex index -> positions in `edges`
    directed: bool,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            directed,
        }
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Adds a vertex by id, returning its index. Re-adding an existing id is a
    /// no-op that returns the existing index.
    ///
    /// # Errors
    /// Returns `GraphError::Validation` if `id` is not a valid identifier.
    pub fn add_vertex(&mut self, id: &str) -> GraphResult<VertexIndex> {
        let id = Identifier::from_str(id)?;
        Ok(self.add_vertex_with(Vertex::new(id)))
    }

    /// Adds a prebuilt vertex. The first insertion of an id wins, so a later
    /// vertex with the same id but a different name is ignored.
    pub fn add_vertex_with(&mut self, vertex: Vertex) -> VertexIndex {
        if let Some(&existing) = self.index.get(vertex.id()) {
            return existing;
        }
        let position = self.vertices.len();
        self.index.insert(vertex.id, position);
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());
        position
    }

    /// Connects two existing vertices by id.
    ///
    /// # Errors
    /// Returns `GraphError::VertexNotFound` if either id is absent. The graph
    /// is left untouched in that case.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> GraphResult<()> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.push_connection(Edge::new(from, to, weight));
        Ok(())
    }

    /// Adds a prebuilt edge (and its reverse when undirected).
    ///
    /// # Errors
    /// Returns `GraphError::VertexIndexOutOfRange` if an endpoint is not a
    /// vertex of this graph.
    pub fn insert_edge(&mut self, edge: Edge) -> GraphResult<()> {
        for endpoint in [edge.from, edge.to] {
            if endpoint >= self.vertices.len() {
                return Err(GraphError::VertexIndexOutOfRange(endpoint, self.vertices.len()));
            }
        }
        self.push_connection(edge);
        Ok(())
    }

    fn resolve(&self, id: &str) -> GraphResult<VertexIndex> {
        let id = Identifier::from_str(id)?;
        self.index
            .get(&id)
            .copied()
            .ok_or(GraphError::VertexNotFound(id))
    }

    fn push_connection(&mut self, edge: Edge) {
        self.push_stored(edge);
        if !self.directed {
            self.push_stored(edge.reversed());
        }
    }

    fn push_stored(&mut self, edge: Edge) {
        self.outgoing[edge.from].push(self.edges.len());
        self.edges.push(edge);
    }

    /// Every stored edge whose `from` is `vertex`, in stored order.
    pub fn edges_from(&self, vertex: VertexIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing
            .get(vertex)
            .into_iter()
            .flatten()
            .map(move |&position| &self.edges[position])
    }

    pub fn out_degree(&self, vertex: VertexIndex) -> usize {
        self.outgoing.get(vertex).map_or(0, Vec::len)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<VertexIndex> {
        let id = Identifier::from_str(id).ok()?;
        self.index.get(&id).copied()
    }

    /// The stored edge sequence, both directions included for undirected graphs.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.edges.len()
        } else {
            self.edges.len() / 2
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Renders an edge of this graph as `from - to (weight)`.
    pub fn edge_label(&self, edge: &Edge) -> String {
        let name = |index: VertexIndex| {
            self.vertex(index)
                .map(|vertex| vertex.name().to_string())
                .unwrap_or_else(|| format!("#{}", index))
        };
        format!("{} - {} ({})", name(edge.from), name(edge.to), edge.weight)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph{{vertices={}, edges={}, directed={}}}",
            self.vertex_count(),
            self.edge_count(),
            self.directed
        )
    }
}
