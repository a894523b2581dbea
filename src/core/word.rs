//! Word normalization and letter multisets
//!
//! A `LetterPool` holds the letters of a root word with their multiplicity, so
//! "tree" offers one `t`, one `r` and two `e`s.

use rustc_hash::FxHashMap;

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 3;

/// Lowercase a raw submission and strip surrounding whitespace
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in a word, counted as characters rather than bytes
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Multiset of letters available for spelling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (and leaves the pool untouched) when none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// How many copies of `letter` remain
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters remaining
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a copy; stops at the first letter that is not available.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("tree");
    /// assert!(pool.can_spell("tee"));
    /// assert!(!pool.can_spell("eee"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut pool = self.clone();
        word.chars().all(|letter| pool.take(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("SILK"), "silk");
        assert_eq!(normalize("\t worm \n"), "worm");
        assert_eq!(normalize("MiLk"), "milk");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\n\t"), "");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" ice cream "), "ice cream");
    }

    #[test]
    fn letter_count_counts_chars() {
        assert_eq!(letter_count("silk"), 4);
        assert_eq!(letter_count("café"), 4);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::new("tree");
        assert_eq!(pool.count('t'), 1);
        assert_eq!(pool.count('r'), 1);
        assert_eq!(pool.count('e'), 2);
        assert_eq!(pool.count('z'), 0);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn take_consumes_one_occurrence() {
        let mut pool = LetterPool::new("tree");
        assert!(pool.take('e'));
        assert_eq!(pool.count('e'), 1);
        assert!(pool.take('e'));
        assert!(!pool.take('e'));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn take_missing_letter_fails() {
        let mut pool = LetterPool::new("silk");
        assert!(!pool.take('w'));
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let pool = LetterPool::new("tree");
        assert!(pool.can_spell("tree"));
        assert!(pool.can_spell("ret"));
        assert!(!pool.can_spell("eee"));
        assert!(!pool.can_spell("trees"));
    }

    #[test]
    fn can_spell_ignores_order() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("milk"));
        assert!(pool.can_spell("mrowklis"));
    }

    #[test]
    fn can_spell_does_not_consume() {
        let pool = LetterPool::new("silk");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("silk"));
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::default();
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }
}
