//! Command implementations

pub mod generate;

pub use generate::{DEFAULT_BLOB_PATH, DEFAULT_INDEX_PATH, GenerateConfig, generate};
