//! Word lists for Word Scramble
//!
//! Embedded start words and dictionary, plus the random root word picker.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Root word used when the start word list is empty
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// The pool of root words a round is drawn from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartWords {
    words: Vec<String>,
}

impl StartWords {
    /// Blank entries are dropped so a pick is never empty
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let words = words
            .into_iter()
            .filter(|word| !word.trim().is_empty())
            .collect();
        Self { words }
    }

    /// Pick a root word uniformly at random
    ///
    /// Falls back to `DEFAULT_ROOT_WORD` when the list is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        if let Some(word) = self.words.choose(rng) {
            word.as_str()
        } else {
            debug!("no start words, using '{DEFAULT_ROOT_WORD}'");
            DEFAULT_ROOT_WORD
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
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
