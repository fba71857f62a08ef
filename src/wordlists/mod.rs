//! Word lists
//!
//! Provides the embedded default wordlist compiled into the binary, plus a
//! loader for external leveled wordlist files.

mod embedded;
pub mod loader;

pub use embedded::{WORDLIST, WORDLIST_LEVELS, WORDLIST_WORDS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_count_matches_const() {
        assert_eq!(WORDLIST.len(), WORDLIST_LEVELS);
    }

    #[test]
    fn word_count_matches_const() {
        let total: usize = WORDLIST.iter().map(|level| level.len()).sum();
        assert_eq!(total, WORDLIST_WORDS);
    }

    #[test]
    fn no_level_is_empty() {
        for level in WORDLIST {
            assert!(!level.is_empty());
        }
    }

    #[test]
    fn words_are_trimmed_and_nonempty() {
        for &word in WORDLIST.iter().flat_map(|level| level.iter()) {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim());
        }
    }
}
