//! Generate command
//!
//! Thin adapter around the pure `pack` pass: opens the two destinations,
//! writes the blob bytes and the index literal, and hands the stats back for
//! display. Both files are created or truncated; handles are scoped values
//! dropped on every exit path. There is no partial-output cleanup: a failure
//! mid-write aborts the run and leaves whatever was written on disk.

use crate::core::Wordlist;
use crate::packer::{PackStats, pack};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Default index destination, matching the downstream build's include
pub const DEFAULT_INDEX_PATH: &str = "wordlist_index2.h";

/// Default blob destination
pub const DEFAULT_BLOB_PATH: &str = "wordlist2.bin";

/// Destinations for the generated artifacts
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub index_path: PathBuf,
    pub blob_path: PathBuf,
}

impl GenerateConfig {
    /// Config with the default output filenames
    #[must_use]
    pub fn new() -> Self {
        Self {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            blob_path: PathBuf::from(DEFAULT_BLOB_PATH),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Pack a wordlist and write both artifacts to disk
///
/// For a fixed input table, repeated runs overwrite the destinations with
/// byte-identical content.
///
/// # Errors
///
/// Returns an error if either destination cannot be created or written.
pub fn generate(config: &GenerateConfig, wordlist: &Wordlist) -> Result<PackStats> {
    let output = pack(wordlist);

    fs::write(&config.blob_path, &output.blob)
        .with_context(|| format!("failed to write blob to {}", config.blob_path.display()))?;

    fs::write(&config.index_path, output.index.as_bytes())
        .with_context(|| format!("failed to write index to {}", config.index_path.display()))?;

    Ok(output.stats)
}
