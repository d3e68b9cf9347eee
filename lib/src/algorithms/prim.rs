// lib/src/algorithms/prim.rs

//! Minimum spanning tree via Prim's algorithm with a binary heap.
//!
//! Grows a single tree from the first vertex in insertion order. On a
//! disconnected graph only the start vertex's component is spanned.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use models::errors::GraphResult;
use models::{Edge, Graph, MstResult, VertexIndex, Weight};

use super::MstAlgorithm;

#[derive(Clone, Copy, Debug, Default)]
pub struct PrimAlgorithm;

// Min-heap entry: weight first, then push order so equal weights pop FIFO.
type Candidate = Reverse<(Weight, u64, VertexIndex, VertexIndex)>;

struct Frontier {
    heap: BinaryHeap<Candidate>,
    pushed: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    fn push(&mut self, edge: &Edge) {
        self.heap.push(Reverse((edge.weight, self.pushed, edge.from, edge.to)));
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<Edge> {
        self.heap
            .pop()
            .map(|Reverse((weight, _, from, to))| Edge::new(from, to, weight))
    }
}

impl MstAlgorithm for PrimAlgorithm {
    fn name(&self) -> &'static str {
        "Prim's Algorithm"
    }

    fn complexity(&self) -> &'static str {
        "O(E log V) with binary heap"
    }

    fn find_mst(&self, graph: &Graph) -> GraphResult<MstResult> {
        if graph.is_empty() {
            return Ok(MstResult::empty());
        }

        let started = Instant::now();
        let mut operations: u64 = 0;

        let mut frontier = Frontier::new();
        operations += 1;

        let start: VertexIndex = 0;
        let mut visited = vec![false; graph.vertex_count()];
        let mut visited_count = 1;
        visited[start] = true;
        operations += 1;

        for edge in graph.edges_from(start) {
            frontier.push(edge);
        }
        operations += graph.out_degree(start) as u64;

        let mut selected = Vec::with_capacity(graph.vertex_count() - 1);
        let mut total_cost: u64 = 0;

        while visited_count < graph.vertex_count() {
            let Some(edge) = frontier.pop() else {
                break;
            };
            operations += 1;

            let Some(next) = unvisited_endpoint(&edge, &visited) else {
                continue;
            };

            visited[next] = true;
            visited_count += 1;
            selected.push(edge);
            total_cost += u64::from(edge.weight);
            operations += 3;

            for outgoing in graph.edges_from(next) {
                if !visited[outgoing.to] {
                    frontier.push(outgoing);
                    operations += 1;
                }
            }
            operations += graph.out_degree(next) as u64;
        }

        Ok(MstResult::new(selected, total_cost, operations, started.elapsed()))
    }
}

/// The endpoint that is new to the tree, if exactly one of them is.
fn unvisited_endpoint(edge: &Edge, visited: &[bool]) -> Option<VertexIndex> {
    match (visited[edge.from], visited[edge.to]) {
        (true, false) => Some(edge.to),
        (false, true) => Some(edge.from),
        _ => None,
    }
}
