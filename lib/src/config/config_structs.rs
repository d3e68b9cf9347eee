// lib/src/config/config_structs.rs

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;
use crate::errors::{AnalysisError, Result};

/// Represents the `[analysis]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// JSON file holding the graphs to analyze.
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    /// JSON file the results are written to.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Decimal places kept for `execution_time_ms` in the output file.
    #[serde(default = "default_execution_time_precision")]
    pub execution_time_precision: u32,
    /// Create the parent directories of the input and output files.
    #[serde(default = "default_create_directories")]
    pub create_directories: bool,
    #[serde(default = "default_debug")]
    pub debug: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input_path: default_input_path(),
            output_path: default_output_path(),
            execution_time_precision: default_execution_time_precision(),
            create_directories: default_create_directories(),
            debug: default_debug(),
        }
    }
}

/// Represents the entire structure of the config file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    analysis: AnalysisConfig,
}

impl AnalysisConfig {
    /// Parses the TOML text of a config file. Missing keys take their defaults.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| AnalysisError::ConfigurationError {
            path: origin.to_path_buf(),
            source,
        })?;
        Ok(file.analysis.normalized())
    }

    fn normalized(mut self) -> Self {
        self.execution_time_precision = self.execution_time_precision.min(MAX_EXECUTION_TIME_PRECISION);
        self
    }

    pub fn with_input_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.input_path = path;
        }
        self
    }

    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.output_path = path;
        }
        self
    }

    pub fn with_execution_time_precision(mut self, precision: Option<u32>) -> Self {
        if let Some(precision) = precision {
            self.execution_time_precision = precision;
        }
        self.normalized()
    }

    /// Debug output can be switched on from the command line but never off.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug |= debug;
        self
    }
}

/// Loads the analysis configuration.
///
/// With an explicit `path` the file must exist. Without one,
/// `DEFAULT_CONFIG_FILE` in the working directory is used when present and
/// the built-in defaults otherwise.
pub fn load_analysis_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let (config_path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !required && !config_path.exists() {
        debug!("No config file at {}, using defaults", config_path.display());
        return Ok(AnalysisConfig::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| AnalysisError::io(&config_path, e))?;
    AnalysisConfig::from_toml_str(&content, &config_path)
}
