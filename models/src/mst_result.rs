// models/src/mst_result.rs
use std::time::Duration;

use crate::edges::Edge;

/// Outcome of one spanning-tree computation.
///
/// `operations_count` is a heuristic step counter meant only for comparing
/// algorithms against each other, not a cost model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstResult {
    edges: Vec<Edge>,
    total_cost: u64,
    operations_count: u64,
    execution_time: Duration,
}

impl MstResult {
    pub fn new(edges: Vec<Edge>, total_cost: u64, operations_count: u64, execution_time: Duration) -> Self {
        Self {
            edges,
            total_cost,
            operations_count,
            execution_time,
        }
    }

    /// No edges, no cost, no work.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0, Duration::ZERO)
    }

    /// Selected edges, in selection order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn operations_count(&self) -> u64 {
        self.operations_count
    }

    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1_000.0
    }

    /// Milliseconds with three decimals, for log summaries.
    pub fn formatted_execution_time(&self) -> String {
        format!("{:.3}", self.execution_time_ms())
    }
}
