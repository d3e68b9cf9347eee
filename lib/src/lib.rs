// lib/src/lib.rs

//! Minimum spanning tree analysis for transportation networks.
//!
//! The core (`disjoint_set`, `algorithms`) is synchronous and free of logging.
//! `analysis`, `fileio` and `config` wrap it into a batch pass over a JSON file.

pub mod algorithms;
pub mod analysis;
pub mod config;
pub mod disjoint_set;
pub mod errors;
pub mod fileio;

pub use models::{Edge, Graph, GraphError, GraphResult, Identifier, MstResult, Vertex, VertexIndex, Weight};

// Explicit re-exports
pub use crate::algorithms::{KruskalAlgorithm, MstAlgorithm, PrimAlgorithm};
pub use crate::analysis::{AnalysisReport, AnalysisService, Anomaly, AnalysisSummary, GraphAnalysis, GraphRecord};
pub use crate::config::{load_analysis_config, AnalysisConfig};
pub use crate::disjoint_set::DisjointSet;
pub use crate::errors::*;
pub use crate::fileio::JsonDataHandler;
