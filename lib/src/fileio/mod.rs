// lib/src/fileio/mod.rs

pub mod json_data_handler;

pub use json_data_handler::{round_to, JsonDataHandler};
