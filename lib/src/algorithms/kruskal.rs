// lib/src/algorithms/kruskal.rs

//! Minimum spanning tree via Kruskal's algorithm (undirected graphs).
//!
//! Uses the disjoint set with path compression and union by rank. On a
//! disconnected graph the result is a minimum spanning forest.

use std::collections::HashSet;
use std::time::Instant;

use models::errors::GraphResult;
use models::{Edge, Graph, MstResult};

use super::MstAlgorithm;
use crate::disjoint_set::DisjointSet;

#[derive(Clone, Copy, Debug, Default)]
pub struct KruskalAlgorithm;

impl MstAlgorithm for KruskalAlgorithm {
    fn name(&self) -> &'static str {
        "Kruskal's Algorithm"
    }

    fn complexity(&self) -> &'static str {
        "O(E log E) with union-find"
    }

    fn find_mst(&self, graph: &Graph) -> GraphResult<MstResult> {
        let started = Instant::now();
        let mut operations: u64 = 0;

        let mut edges = unique_edges(graph);
        operations += edges.len() as u64;

        // Stable: equal weights keep their post-dedup order.
        edges.sort_by_key(|edge| edge.weight);
        operations += sort_operations(edges.len());

        let mut sets = DisjointSet::with_capacity(graph.vertex_count());
        for vertex in 0..graph.vertex_count() {
            sets.make_set(vertex);
            operations += 1;
        }

        let target = graph.vertex_count().saturating_sub(1);
        let mut selected = Vec::with_capacity(target);
        let mut total_cost: u64 = 0;

        for edge in edges {
            operations += 1;

            if selected.len() == target {
                break;
            }

            let from_root = sets.find(edge.from)?;
            let to_root = sets.find(edge.to)?;
            operations += 2;

            if from_root != to_root {
                selected.push(edge);
                total_cost += u64::from(edge.weight);
                sets.union(edge.from, edge.to)?;
                operations += 3;
            }
        }

        Ok(MstResult::new(selected, total_cost, operations, started.elapsed()))
    }
}

/// One edge per unordered vertex pair, first occurrence in stored order wins.
///
/// A later copy of the pair is dropped even if its weight differs.
pub fn unique_edges(graph: &Graph) -> Vec<Edge> {
    let mut seen = HashSet::with_capacity(graph.edge_count());
    graph
        .edges()
        .iter()
        .filter(|edge| seen.insert(edge.canonical_pair()))
        .copied()
        .collect()
}

// n log n comparisons, the heuristic charge for sorting n edges.
fn sort_operations(count: usize) -> u64 {
    if count <= 1 {
        return 0;
    }
    let count = count as f64;
    (count * count.ln()) as u64
}
