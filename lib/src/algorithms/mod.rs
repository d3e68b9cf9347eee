// lib/src/algorithms/mod.rs

//! Minimum spanning tree algorithms.
//!
//! Both variants are stateless: counters and timers live inside a single
//! `find_mst` call and come back in the `MstResult`, so one instance can be
//! shared across graphs and threads.

pub mod kruskal;
pub mod prim;

use models::errors::GraphResult;
use models::{Graph, MstResult};

pub use kruskal::KruskalAlgorithm;
pub use prim::PrimAlgorithm;

pub trait MstAlgorithm: Send + Sync {
    /// Human-readable label used in reports.
    fn name(&self) -> &'static str;

    /// Static complexity note, e.g. `O(E log V) with binary heap`.
    fn complexity(&self) -> &'static str;

    /// Computes a spanning tree (or forest, for variants that support it).
    /// The graph is only read.
    fn find_mst(&self, graph: &Graph) -> GraphResult<MstResult>;
}
