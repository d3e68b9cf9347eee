// lib/src/analysis/mod.rs

pub mod report;
pub mod service;

pub use report::{AnalysisReport, AnalysisSummary, GraphAnalysis, GraphRecord};
pub use service::{AnalysisService, Anomaly};
