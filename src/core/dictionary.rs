//! Dictionary lookup
//!
//! The validator never decides on its own whether a word is real; it asks a
//! `Dictionary`. The shipped implementation is a plain word list, tests swap in
//! their own.

use super::word::normalize;
use rustc_hash::FxHashSet;

/// Language tag used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Answers whether a word is a recognized dictionary word
pub trait Dictionary {
    /// `word` is already normalized; `locale` is a language tag such as `en` or `en-US`
    fn is_known_word(&self, word: &str, locale: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_known_word(word, locale)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_known_word(word, locale)
    }
}

/// A dictionary backed by an in-memory word list for a single language
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
    locale: String,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Entries are normalized; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new(["Silk", "worm"], "en");
    /// assert!(dictionary.is_known_word("silk", "en-GB"));
    /// assert!(!dictionary.is_known_word("silk", "fr"));
    /// ```
    pub fn new<I, S>(words: I, locale: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            words,
            locale: locale.into(),
        }
    }

    /// Language tag this word list belongs to
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        locales_match(&self.locale, locale) && self.contains(word)
    }
}

/// Compare two language tags by their primary subtag, ignoring case
fn locales_match(left: &str, right: &str) -> bool {
    primary_subtag(left).eq_ignore_ascii_case(primary_subtag(right))
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}
