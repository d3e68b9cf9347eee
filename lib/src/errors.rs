// lib/src/errors.rs

use std::path::PathBuf;
use thiserror::Error;

use models::errors::GraphError;

/// Failures of the outer layers: loading input, writing results, reading
/// configuration. Graph construction errors carry the offending graph id.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("File I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error in {path}: {source}")]
    ConfigurationError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid graph {graph_id}: {source}")]
    InvalidGraph {
        graph_id: u32,
        #[source]
        source: GraphError,
    },
}

impl AnalysisError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalysisError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
