//! Single-pass blob and index generation
//!
//! One linear pass over the flattened wordlist with an accumulating byte
//! offset. The blob is the concatenation of every word's UTF-8 bytes with no
//! delimiters; the index is a C array literal holding each word's starting
//! offset plus a final sentinel equal to the total byte count, so a consumer
//! can recover word boundaries by subtracting consecutive entries.

use crate::core::Wordlist;
use std::fmt::Write as _;

/// Name of the generated C array, fixed by the downstream native build
pub const INDEX_ARRAY_NAME: &str = "wordlist_index";

/// Statistics gathered during the pack pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackStats {
    /// Words per level, in level order
    pub level_words: Vec<usize>,
    /// Total word count across all levels
    pub total_words: usize,
    /// Total encoded byte count (the blob's length)
    pub total_bytes: usize,
    /// Largest single-word encoded byte length observed
    pub max_word_bytes: usize,
}

impl PackStats {
    /// Number of levels in the source table
    #[inline]
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.level_words.len()
    }
}

/// Result of packing a wordlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    /// Index file content: `const int wordlist_index[] = {o0,...,TOTAL};`
    pub index: String,
    /// Blob file content: concatenated word bytes, no delimiters
    pub blob: Vec<u8>,
    /// Diagnostic statistics
    pub stats: PackStats,
}

/// Pack a wordlist into blob bytes, index text, and stats
///
/// Pure function of its input: no I/O, no randomness, no timestamps.
/// Packing the same table twice yields identical output.
///
/// Offsets are assigned in traversal order starting at 0; a zero-length word
/// produces two equal consecutive entries. The index text carries no trailing
/// newline: the downstream build includes it verbatim and the literal ends at
/// the closing brace.
///
/// # Examples
/// ```
/// use wordpack::core::Wordlist;
/// use wordpack::packer::pack;
///
/// let output = pack(&Wordlist::from_slices(&[&["a", "bb"], &["ccc"]]));
/// assert_eq!(output.index, "const int wordlist_index[] = {0,1,3,6};");
/// assert_eq!(output.blob, b"abbccc");
/// assert_eq!(output.stats.total_bytes, 6);
/// ```
#[must_use]
pub fn pack(wordlist: &Wordlist) -> PackOutput {
    let mut index = format!("const int {INDEX_ARRAY_NAME}[] = {{");
    let mut blob = Vec::new();
    let mut level_words = Vec::with_capacity(wordlist.level_count());

    let mut total_words = 0;
    let mut total_bytes = 0;
    let mut max_word_bytes = 0;

    for level in wordlist.levels() {
        level_words.push(level.len());
        for word in level {
            let encoded = word.as_bytes();
            blob.extend_from_slice(encoded);
            // Infallible: writing to a String cannot fail
            let _ = write!(index, "{total_bytes},");

            max_word_bytes = max_word_bytes.max(encoded.len());
            total_words += 1;
            total_bytes += encoded.len();
        }
    }

    let _ = write!(index, "{total_bytes}}};");

    PackOutput {
        index,
        blob,
        stats: PackStats {
            level_words,
            total_words,
            total_bytes,
            max_word_bytes,
        },
    }
}
