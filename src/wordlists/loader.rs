//! Wordlist loading utilities
//!
//! Loads a leveled wordlist from a text file. Words appear one per line;
//! blank lines separate levels. Lines are trimmed, and runs of blank lines
//! collapse to a single level boundary, so a file cannot express an empty
//! level or an empty-string word (the `Wordlist` type itself still permits
//! both when constructed in memory).

use crate::core::Wordlist;
use std::fs;
use std::io;
use std::path::Path;

/// Load a leveled wordlist from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordpack::wordlists::loader::load_from_file;
///
/// let wordlist = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {wordlist}");
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Wordlist> {
    let content = fs::read_to_string(path)?;
    Ok(parse_levels(&content))
}

fn parse_levels(content: &str) -> Wordlist {
    let mut levels: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                levels.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed.to_string());
        }
    }
    if !current.is_empty() {
        levels.push(current);
    }

    Wordlist::from_levels(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_levels_on_blank_lines() {
        let wl = parse_levels("a\nbb\n\nccc\n");
        assert_eq!(wl.level_count(), 2);
        let words: Vec<&str> = wl.iter_words().collect();
        assert_eq!(words, vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn parse_collapses_blank_runs() {
        let wl = parse_levels("a\n\n\n\nbb\n");
        assert_eq!(wl.level_count(), 2);
        assert_eq!(wl.word_count(), 2);
    }

    #[test]
    fn parse_trims_whitespace() {
        let wl = parse_levels("  a  \n\tbb\n");
        let words: Vec<&str> = wl.iter_words().collect();
        assert_eq!(words, vec!["a", "bb"]);
    }

    #[test]
    fn parse_ignores_leading_and_trailing_blanks() {
        let wl = parse_levels("\n\na\n\n");
        assert_eq!(wl.level_count(), 1);
        assert_eq!(wl.word_count(), 1);
    }

    #[test]
    fn parse_empty_input() {
        let wl = parse_levels("");
        assert_eq!(wl.level_count(), 0);
        assert!(wl.is_empty());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_from_file("no/such/wordlist.txt").is_err());
    }

    #[test]
    fn load_roundtrip_through_tempfile() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "the\nof\n\nand\n").unwrap();
        drop(file);

        let wl = load_from_file(&path).unwrap();
        assert_eq!(wl.level_count(), 2);
        let words: Vec<&str> = wl.iter_words().collect();
        assert_eq!(words, vec!["the", "of", "and"]);
    }
}
