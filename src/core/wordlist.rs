//! Leveled wordlist representation
//!
//! A Wordlist is an ordered sequence of levels, each an ordered sequence of
//! words. Order is significant: it fixes the traversal order that both the
//! blob and the index are written in. Level boundaries exist only for
//! grouping and diagnostics; they are not retained in the generated output.
//!
//! The table is deliberately permissive. Words may be empty, may repeat
//! within or across levels, and may contain arbitrary text. The input is
//! developer-controlled static data, so no validation pass runs here.

use std::fmt;

/// An ordered table of word levels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    levels: Vec<Vec<String>>,
}

impl Wordlist {
    /// Create a Wordlist from owned levels
    ///
    /// # Examples
    /// ```
    /// use wordpack::core::Wordlist;
    ///
    /// let wl = Wordlist::from_levels(vec![vec!["a".to_string()], vec!["bb".to_string()]]);
    /// assert_eq!(wl.level_count(), 2);
    /// assert_eq!(wl.word_count(), 2);
    /// ```
    #[must_use]
    pub fn from_levels(levels: Vec<Vec<String>>) -> Self {
        Self { levels }
    }

    /// Create a Wordlist from an embedded nested slice table
    ///
    /// # Examples
    /// ```
    /// use wordpack::core::Wordlist;
    /// use wordpack::wordlists::WORDLIST;
    ///
    /// let wl = Wordlist::from_slices(WORDLIST);
    /// assert_eq!(wl.level_count(), WORDLIST.len());
    /// ```
    #[must_use]
    pub fn from_slices(levels: &[&[&str]]) -> Self {
        Self {
            levels: levels
                .iter()
                .map(|level| level.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    /// The levels in their given order
    #[inline]
    #[must_use]
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    /// Number of levels, including empty ones
    #[inline]
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of words across all levels
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Whether the table contains no words at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(Vec::is_empty)
    }

    /// Iterate over every word in traversal order
    ///
    /// Levels are visited in their given sequence order, words in their given
    /// order within each level. This is the order the blob is concatenated in
    /// and the order index offsets are assigned in.
    pub fn iter_words(&self) -> impl Iterator<Item = &str> {
        self.levels
            .iter()
            .flat_map(|level| level.iter().map(String::as_str))
    }
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} levels, {} words",
            self.level_count(),
            self.word_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Wordlist {
        Wordlist::from_slices(&[&["a", "bb"], &["ccc"]])
    }

    #[test]
    fn counts() {
        let wl = sample();
        assert_eq!(wl.level_count(), 2);
        assert_eq!(wl.word_count(), 3);
        assert!(!wl.is_empty());
    }

    #[test]
    fn traversal_order_is_level_then_word() {
        let wl = sample();
        let words: Vec<&str> = wl.iter_words().collect();
        assert_eq!(words, vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn empty_level_contributes_no_words() {
        let wl = Wordlist::from_slices(&[&[], &["x"], &[]]);
        assert_eq!(wl.level_count(), 3);
        assert_eq!(wl.word_count(), 1);
        let words: Vec<&str> = wl.iter_words().collect();
        assert_eq!(words, vec!["x"]);
    }

    #[test]
    fn empty_table() {
        let wl = Wordlist::default();
        assert_eq!(wl.level_count(), 0);
        assert_eq!(wl.word_count(), 0);
        assert!(wl.is_empty());
        assert_eq!(wl.iter_words().count(), 0);
    }

    #[test]
    fn permissive_construction() {
        // Empty strings and duplicates pass through untouched
        let wl = Wordlist::from_slices(&[&["dup", "", "dup"]]);
        assert_eq!(wl.word_count(), 3);
        let words: Vec<&str> = wl.iter_words().collect();
        assert_eq!(words, vec!["dup", "", "dup"]);
    }

    #[test]
    fn from_levels_preserves_order() {
        let wl = Wordlist::from_levels(vec![
            vec!["z".to_string(), "y".to_string()],
            vec!["x".to_string()],
        ]);
        let words: Vec<&str> = wl.iter_words().collect();
        assert_eq!(words, vec!["z", "y", "x"]);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", sample()), "2 levels, 3 words");
    }
}
