// lib/src/analysis/report.rs

use models::{Graph, MstResult};

/// One input graph together with the numeric id it was supplied under.
#[derive(Clone, Debug)]
pub struct GraphRecord {
    pub id: u32,
    pub graph: Graph,
}

impl GraphRecord {
    pub fn new(id: u32, graph: Graph) -> Self {
        Self { id, graph }
    }
}

/// Both algorithm results for one graph.
#[derive(Clone, Debug)]
pub struct GraphAnalysis {
    pub graph_id: u32,
    pub graph: Graph,
    pub prim: MstResult,
    pub kruskal: MstResult,
}

impl GraphAnalysis {
    /// The Kruskal forest has `V - 1` edges exactly when the graph is connected.
    pub fn is_connected(&self) -> bool {
        self.kruskal.edges().len() == self.graph.vertex_count().saturating_sub(1)
    }

    /// Connected graphs must get the same total from both algorithms.
    pub fn has_cost_mismatch(&self) -> bool {
        self.is_connected() && self.prim.total_cost() != self.kruskal.total_cost()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnalysisReport {
    analyses: Vec<GraphAnalysis>,
}

impl AnalysisReport {
    pub fn new(analyses: Vec<GraphAnalysis>) -> Self {
        Self { analyses }
    }

    pub fn analyses(&self) -> &[GraphAnalysis] {
        &self.analyses
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    pub fn summary(&self) -> AnalysisSummary {
        let mut summary = AnalysisSummary {
            graph_count: self.analyses.len(),
            ..AnalysisSummary::default()
        };
        if self.analyses.is_empty() {
            return summary;
        }

        let mut prim_time_ms = 0.0;
        let mut kruskal_time_ms = 0.0;
        for analysis in &self.analyses {
            summary.total_prim_operations += analysis.prim.operations_count();
            summary.total_kruskal_operations += analysis.kruskal.operations_count();
            prim_time_ms += analysis.prim.execution_time_ms();
            kruskal_time_ms += analysis.kruskal.execution_time_ms();
            if analysis.has_cost_mismatch() {
                summary.cost_mismatches += 1;
            }
        }
        let count = self.analyses.len() as f64;
        summary.average_prim_time_ms = prim_time_ms / count;
        summary.average_kruskal_time_ms = kruskal_time_ms / count;
        summary
    }
}

/// Aggregate performance comparison across every analyzed graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisSummary {
    pub graph_count: usize,
    pub total_prim_operations: u64,
    pub total_kruskal_operations: u64,
    pub average_prim_time_ms: f64,
    pub average_kruskal_time_ms: f64,
    pub cost_mismatches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Edge;
    use std::time::Duration;

    fn pair_graph() -> Graph {
        let mut graph = Graph::undirected();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_edge("A", "B", 4).unwrap();
        graph
    }

    fn result(cost: u64, operations: u64, millis: u64) -> MstResult {
        MstResult::new(vec![Edge::new(0, 1, cost as u32)], cost, operations, Duration::from_millis(millis))
    }

    #[test]
    fn should_flag_mismatch_on_connected_graph() {
        let analysis = GraphAnalysis {
            graph_id: 1,
            graph: pair_graph(),
            prim: result(4, 10, 1),
            kruskal: result(5, 10, 1),
        };
        assert!(analysis.is_connected());
        assert!(analysis.has_cost_mismatch());
    }

    #[test]
    fn should_not_flag_mismatch_on_disconnected_graph() {
        let mut graph = pair_graph();
        graph.add_vertex("C").unwrap();
        let analysis = GraphAnalysis {
            graph_id: 2,
            graph,
            prim: result(4, 10, 1),
            kruskal: MstResult::empty(),
        };
        assert!(!analysis.is_connected());
        assert!(!analysis.has_cost_mismatch());
    }

    #[test]
    fn should_summarize_operations_and_times() {
        let report = AnalysisReport::new(vec![
            GraphAnalysis { graph_id: 1, graph: pair_graph(), prim: result(4, 10, 2), kruskal: result(4, 20, 4) },
            GraphAnalysis { graph_id: 2, graph: pair_graph(), prim: result(4, 30, 4), kruskal: result(4, 40, 8) },
        ]);
        let summary = report.summary();
        assert_eq!(summary.graph_count, 2);
        assert_eq!(summary.total_prim_operations, 40);
        assert_eq!(summary.total_kruskal_operations, 60);
        assert!((summary.average_prim_time_ms - 3.0).abs() < 1e-9);
        assert!((summary.average_kruskal_time_ms - 6.0).abs() < 1e-9);
        assert_eq!(summary.cost_mismatches, 0);
    }

    #[test]
    fn should_summarize_empty_report() {
        let summary = AnalysisReport::default().summary();
        assert_eq!(summary, AnalysisSummary::default());
    }
}
