// lib/src/fileio/json_data_handler.rs

//! Reads graph batches from JSON and writes analysis results back as JSON.
//!
//! Input:
//! ```json
//! {"graphs": [{"id": 1, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 4}]}]}
//! ```
//! Output: `{"results": [{"graph_id", "input_stats", "prim", "kruskal"}]}`.

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use models::{Graph, MstResult, Weight};

use crate::analysis::{AnalysisReport, GraphAnalysis, GraphRecord};
use crate::config::DEFAULT_EXECUTION_TIME_PRECISION;
use crate::errors::{AnalysisError, Result};

#[derive(Debug, Deserialize)]
struct InputDocument {
    graphs: Vec<InputGraph>,
}

#[derive(Debug, Deserialize)]
struct InputGraph {
    id: u32,
    #[serde(default)]
    nodes: Vec<String>,
    #[serde(default)]
    edges: Vec<InputEdge>,
}

#[derive(Debug, Deserialize)]
struct InputEdge {
    from: String,
    to: String,
    weight: Weight,
}

#[derive(Debug, Serialize)]
pub struct OutputDocument {
    pub results: Vec<GraphOutput>,
}

#[derive(Debug, Serialize)]
pub struct GraphOutput {
    pub graph_id: u32,
    pub input_stats: InputStats,
    pub prim: AlgorithmOutput,
    pub kruskal: AlgorithmOutput,
}

#[derive(Debug, Serialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Serialize)]
pub struct AlgorithmOutput {
    pub mst_edges: Vec<EdgeOutput>,
    pub total_cost: u64,
    pub operations_count: u64,
    pub execution_time_ms: f64,
}

/// A selected edge, endpoints written as vertex ids.
#[derive(Debug, Serialize)]
pub struct EdgeOutput {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

#[derive(Clone, Copy, Debug)]
pub struct JsonDataHandler {
    execution_time_precision: u32,
}

impl Default for JsonDataHandler {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTION_TIME_PRECISION)
    }
}

impl JsonDataHandler {
    pub fn new(execution_time_precision: u32) -> Self {
        Self {
            execution_time_precision,
        }
    }

    pub async fn load_graphs_from_file(&self, path: &Path) -> Result<Vec<GraphRecord>> {
        info!("Loading graphs from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AnalysisError::io(path, e))?;
        self.parse_graphs(&content)
    }

    pub async fn save_analysis_results(&self, report: &AnalysisReport, path: &Path) -> Result<()> {
        info!("Saving results to: {}", path.display());
        let json = self.render_report(report)?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| AnalysisError::io(path, e))
    }

    /// Builds one undirected graph per entry. An edge naming an unknown node
    /// fails the whole batch with the graph id attached.
    pub fn parse_graphs(&self, json: &str) -> Result<Vec<GraphRecord>> {
        let document: InputDocument = serde_json::from_str(json)?;
        document
            .graphs
            .into_iter()
            .map(|input| -> Result<GraphRecord> {
                let graph_id = input.id;
                let graph = build_graph(input).map_err(|source| AnalysisError::InvalidGraph { graph_id, source })?;
                debug!(
                    "Parsed graph {} with {} vertices and {} edges",
                    graph_id,
                    graph.vertex_count(),
                    graph.edge_count()
                );
                Ok(GraphRecord::new(graph_id, graph))
            })
            .collect()
    }

    pub fn render_report(&self, report: &AnalysisReport) -> Result<String> {
        let document = OutputDocument {
            results: report.analyses().iter().map(|analysis| self.graph_output(analysis)).collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn graph_output(&self, analysis: &GraphAnalysis) -> GraphOutput {
        GraphOutput {
            graph_id: analysis.graph_id,
            input_stats: InputStats {
                vertices: analysis.graph.vertex_count(),
                edges: analysis.graph.edge_count(),
            },
            prim: self.algorithm_output(&analysis.graph, &analysis.prim),
            kruskal: self.algorithm_output(&analysis.graph, &analysis.kruskal),
        }
    }

    fn algorithm_output(&self, graph: &Graph, result: &MstResult) -> AlgorithmOutput {
        let id_of = |index| {
            graph
                .vertex(index)
                .map(|vertex| vertex.id().to_string())
                .unwrap_or_default()
        };
        AlgorithmOutput {
            mst_edges: result
                .edges()
                .iter()
                .map(|edge| EdgeOutput {
                    from: id_of(edge.from),
                    to: id_of(edge.to),
                    weight: edge.weight,
                })
                .collect(),
            total_cost: result.total_cost(),
            operations_count: result.operations_count(),
            execution_time_ms: round_to(result.execution_time_ms(), self.execution_time_precision),
        }
    }
}

fn build_graph(input: InputGraph) -> models::GraphResult<Graph> {
    let mut graph = Graph::undirected();
    for node in &input.nodes {
        graph.add_vertex(node)?;
    }
    for edge in &input.edges {
        graph.add_edge(&edge.from, &edge.to, edge.weight)?;
    }
    Ok(graph)
}

/// Rounds half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
