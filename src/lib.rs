//! Wordpack
//!
//! Generates the two artifacts a dictionary-based text compressor consumes at
//! build time: a binary blob of concatenated UTF-8 word encodings and a C
//! array literal of byte offsets into that blob.
//!
//! # Quick Start
//!
//! ```rust
//! use wordpack::core::Wordlist;
//! use wordpack::packer::pack;
//!
//! let wordlist = Wordlist::from_slices(&[&["a", "bb"], &["ccc"]]);
//! let output = pack(&wordlist);
//!
//! assert_eq!(output.index, "const int wordlist_index[] = {0,1,3,6};");
//! assert_eq!(output.blob, b"abbccc");
//! ```

// Core domain types
pub mod core;

// Blob/index generation
pub mod packer;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
