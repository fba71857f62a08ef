//! Blob/index generation
//!
//! Pure single-pass transformation of a leveled wordlist into the blob bytes,
//! the index array literal, and a stats record. File writing lives in
//! `commands`; nothing here touches the filesystem.

mod encode;

pub use encode::{INDEX_ARRAY_NAME, PackOutput, PackStats, pack};
