// lib/src/config/config_defaults.rs

use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "data/input/ass_3_input.json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/output/ass_3_output.json";
pub const DEFAULT_CONFIG_FILE: &str = "mst_analysis.toml";
pub const DEFAULT_EXECUTION_TIME_PRECISION: u32 = 2;
pub const MAX_EXECUTION_TIME_PRECISION: u32 = 9;

pub fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

pub fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

pub fn default_execution_time_precision() -> u32 {
    DEFAULT_EXECUTION_TIME_PRECISION
}

pub fn default_create_directories() -> bool {
    true
}

pub fn default_debug() -> bool {
    false
}
