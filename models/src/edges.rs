// models/src/edges.rs
use crate::vertices::VertexIndex;

/// Non-negative road cost between two districts.
pub type Weight = u32;

/// A weighted edge between two vertices of the same graph.
///
/// Endpoints are indices into the owning `Graph`; resolve them through the
/// graph to get ids or names. Equality is exact on `from`, `to` and `weight`,
/// so `A -> B` and `B -> A` are different edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    /// Source vertex.
    pub from: VertexIndex,

    /// Target vertex.
    pub to: VertexIndex,

    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexIndex, to: VertexIndex, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Reverse the direction of the edge, keeping its weight.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// The endpoints as an unordered pair, smaller index first.
    pub fn canonical_pair(&self) -> (VertexIndex, VertexIndex) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}
