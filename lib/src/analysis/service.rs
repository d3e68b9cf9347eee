// lib/src/analysis/service.rs

use std::path::Path;

use log::{debug, info, warn};

use models::errors::GraphResult;

use crate::algorithms::{KruskalAlgorithm, MstAlgorithm, PrimAlgorithm};
use crate::analysis::report::{AnalysisReport, AnalysisSummary, GraphAnalysis, GraphRecord};
use crate::config::AnalysisConfig;
use crate::errors::{AnalysisError, Result};
use crate::fileio::JsonDataHandler;

/// Something about a graph's two results worth warning about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anomaly {
    /// A connected graph where the two totals differ.
    CostMismatch { prim: u64, kruskal: u64 },
    /// Prim reached `spanned` of `vertices`; Kruskal returned a forest.
    Disconnected { spanned: usize, vertices: usize },
}

/// Runs both spanning-tree algorithms over a batch of graphs and compares them.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    prim: PrimAlgorithm,
    kruskal: KruskalAlgorithm,
    data_handler: JsonDataHandler,
    config: AnalysisConfig,
}

impl AnalysisService {
    pub fn new(config: AnalysisConfig) -> Self {
        AnalysisService {
            prim: PrimAlgorithm,
            kruskal: KruskalAlgorithm,
            data_handler: JsonDataHandler::new(config.execution_time_precision),
            config,
        }
    }

    /// Load, analyze, save, summarize: one full pass over the configured files.
    pub async fn perform_complete_analysis(&self) -> Result<AnalysisReport> {
        info!("Starting MST analysis for transportation network");

        if self.config.create_directories {
            self.create_directories().await?;
        }

        let input = self.config.input_path.as_path();
        let records = self.data_handler.load_graphs_from_file(input).await?;
        info!("Loaded {} graphs from {}", records.len(), input.display());

        let report = self.analyze_graphs(records)?;

        let output = self.config.output_path.as_path();
        self.data_handler.save_analysis_results(&report, output).await?;
        info!("Results saved to {}", output.display());

        self.display_analysis_summary(&report);
        Ok(report)
    }

    async fn create_directories(&self) -> Result<()> {
        for path in [&self.config.input_path, &self.config.output_path] {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    pub fn analyze_graphs(&self, records: Vec<GraphRecord>) -> Result<AnalysisReport> {
        let mut analyses = Vec::with_capacity(records.len());
        for record in records {
            let graph_id = record.id;
            info!("Analyzing graph {}: {}", graph_id, record.graph);
            let analysis = self
                .analyze_single_graph(record)
                .map_err(|source| AnalysisError::InvalidGraph { graph_id, source })?;
            info!("Completed analysis for graph {}", graph_id);
            analyses.push(analysis);
        }
        Ok(AnalysisReport::new(analyses))
    }

    pub fn analyze_single_graph(&self, record: GraphRecord) -> GraphResult<GraphAnalysis> {
        let prim = self.prim.find_mst(&record.graph)?;
        debug!(
            "{} ({}) on graph {}: cost {}, {} operations",
            self.prim.name(),
            self.prim.complexity(),
            record.id,
            prim.total_cost(),
            prim.operations_count()
        );

        let kruskal = self.kruskal.find_mst(&record.graph)?;
        debug!(
            "{} ({}) on graph {}: cost {}, {} operations",
            self.kruskal.name(),
            self.kruskal.complexity(),
            record.id,
            kruskal.total_cost(),
            kruskal.operations_count()
        );

        let analysis = GraphAnalysis {
            graph_id: record.id,
            graph: record.graph,
            prim,
            kruskal,
        };

        self.check_consistency(&analysis);
        Ok(analysis)
    }

    /// Logs a warning for a cost mismatch or a disconnected graph and returns
    /// what was found. Neither fails the run.
    pub fn check_consistency(&self, analysis: &GraphAnalysis) -> Option<Anomaly> {
        let anomaly = if analysis.has_cost_mismatch() {
            Anomaly::CostMismatch {
                prim: analysis.prim.total_cost(),
                kruskal: analysis.kruskal.total_cost(),
            }
        } else if !analysis.is_connected() {
            Anomaly::Disconnected {
                spanned: analysis.prim.edges().len() + 1,
                vertices: analysis.graph.vertex_count(),
            }
        } else {
            return None;
        };

        match anomaly {
            Anomaly::CostMismatch { prim, kruskal } => warn!(
                "MST cost mismatch between algorithms for graph {}: prim={} kruskal={}",
                analysis.graph_id, prim, kruskal
            ),
            Anomaly::Disconnected { spanned, vertices } => warn!(
                "Graph {} is disconnected: {} spans {} of {} vertices, {} built a spanning forest",
                analysis.graph_id,
                self.prim.name(),
                spanned,
                vertices,
                self.kruskal.name()
            ),
        }
        Some(anomaly)
    }

    pub fn display_analysis_summary(&self, report: &AnalysisReport) {
        let rule = "=".repeat(80);
        info!("{}", rule);
        info!("MINIMUM SPANNING TREE ANALYSIS SUMMARY");
        info!("{}", rule);

        for analysis in report.analyses() {
            info!(
                "Graph {}: {} districts, {} possible roads | MST Cost: {}",
                analysis.graph_id,
                analysis.graph.vertex_count(),
                analysis.graph.edge_count(),
                analysis.prim.total_cost()
            );
            info!(
                "  Prim: {} operations, {} ms | Kruskal: {} operations, {} ms",
                analysis.prim.operations_count(),
                analysis.prim.formatted_execution_time(),
                analysis.kruskal.operations_count(),
                analysis.kruskal.formatted_execution_time()
            );
        }

        info!("PERFORMANCE COMPARISON:");
        log_summary(&report.summary());
    }
}

fn log_summary(summary: &AnalysisSummary) {
    info!("Total Prim operations: {}", summary.total_prim_operations);
    info!("Total Kruskal operations: {}", summary.total_kruskal_operations);
    info!("Average Prim time: {:.3} ms", summary.average_prim_time_ms);
    info!("Average Kruskal time: {:.3} ms", summary.average_kruskal_time_ms);
    if summary.cost_mismatches > 0 {
        warn!(
            "{} of {} graphs had mismatched MST costs",
            summary.cost_mismatches, summary.graph_count
        );
    }
}

async fn create_dir_all(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| AnalysisError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Edge, Graph, MstResult};
    use std::time::Duration;

    fn record(id: u32, ids: &[&str], edges: &[(&str, &str, u32)]) -> GraphRecord {
        let mut graph = Graph::undirected();
        for vertex in ids {
            graph.add_vertex(vertex).unwrap();
        }
        for (from, to, weight) in edges {
            graph.add_edge(from, to, *weight).unwrap();
        }
        GraphRecord::new(id, graph)
    }

    fn two_triangles() -> GraphRecord {
        record(
            2,
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B", 3),
                ("B", "C", 1),
                ("A", "C", 2),
                ("D", "E", 7),
                ("E", "F", 4),
                ("D", "F", 5),
            ],
        )
    }

    #[test]
    fn should_analyze_connected_graph() {
        let service = AnalysisService::new(AnalysisConfig::default());
        let analysis = service
            .analyze_single_graph(record(1, &["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)]))
            .unwrap();
        assert_eq!(analysis.prim.total_cost(), 3);
        assert_eq!(analysis.kruskal.total_cost(), 3);
        assert!(analysis.is_connected());
        assert!(!analysis.has_cost_mismatch());
    }

    #[test]
    fn should_keep_asymmetry_on_disconnected_graph() {
        let service = AnalysisService::new(AnalysisConfig::default());
        let analysis = service.analyze_single_graph(two_triangles()).unwrap();

        assert_eq!(analysis.kruskal.edges().len(), 4);
        assert_eq!(analysis.kruskal.total_cost(), (1 + 2) + (4 + 5));

        assert_eq!(analysis.prim.edges().len(), 2);
        assert_eq!(analysis.prim.total_cost(), 1 + 2);
        assert!(analysis.prim.edges().iter().all(|edge| edge.from < 3 && edge.to < 3));

        assert!(!analysis.is_connected());
        assert!(!analysis.has_cost_mismatch());
    }

    #[test]
    fn should_report_cost_mismatch_on_connected_graph() {
        let service = AnalysisService::new(AnalysisConfig::default());
        let mut analysis = service
            .analyze_single_graph(record(1, &["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)]))
            .unwrap();
        assert_eq!(service.check_consistency(&analysis), None);

        analysis.kruskal = MstResult::new(
            vec![Edge::new(0, 1, 1), Edge::new(0, 2, 5)],
            6,
            0,
            Duration::ZERO,
        );
        assert_eq!(
            service.check_consistency(&analysis),
            Some(Anomaly::CostMismatch { prim: 3, kruskal: 6 })
        );
    }

    #[test]
    fn should_report_disconnected_graph_without_mismatch() {
        let service = AnalysisService::new(AnalysisConfig::default());
        let analysis = service.analyze_single_graph(two_triangles()).unwrap();
        assert_eq!(
            service.check_consistency(&analysis),
            Some(Anomaly::Disconnected { spanned: 3, vertices: 6 })
        );
    }

    #[test]
    fn should_analyze_batch_in_order() {
        let service = AnalysisService::new(AnalysisConfig::default());
        let report = service
            .analyze_graphs(vec![two_triangles(), record(9, &[], &[]), record(4, &["Solo"], &[])])
            .unwrap();
        let ids: Vec<_> = report.analyses().iter().map(|analysis| analysis.graph_id).collect();
        assert_eq!(ids, vec![2, 9, 4]);
        for degenerate in &report.analyses()[1..] {
            assert!(degenerate.prim.edges().is_empty());
            assert!(degenerate.kruskal.edges().is_empty());
            assert_eq!(degenerate.prim.total_cost(), 0);
            assert_eq!(degenerate.kruskal.total_cost(), 0);
        }
        assert_eq!(report.summary().graph_count, 3);
    }
}
