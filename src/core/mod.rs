//! Core domain types
//!
//! The leveled wordlist table that every other module consumes.

mod wordlist;

pub use wordlist::Wordlist;
