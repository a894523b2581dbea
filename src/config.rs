//! Game configuration
//!
//! Collects the settings the binary accepts and turns them into a ready game.

use crate::core::{DEFAULT_LOCALE, Game, Validator, WordListDictionary};
use crate::wordlists::StartWords;
use crate::wordlists::loader::{
    embedded_dictionary, embedded_start_words, load_dictionary, load_start_words,
};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

/// Where the word lists come from and how root words are drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Start word list; the embedded list when `None`
    pub start_words: Option<PathBuf>,
    /// Dictionary word list; the embedded list when `None`
    pub dictionary: Option<PathBuf>,
    /// Language tag passed to the dictionary
    pub locale: String,
    /// Seed for root word selection, random when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: None,
            dictionary: None,
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load the word lists and start the first round on a random root word
    ///
    /// # Errors
    ///
    /// Returns an error if a configured word list file is missing or unreadable.
    /// The game cannot start without its start words.
    pub fn build_game(&self) -> Result<Game<WordListDictionary>> {
        let (validator, start_words) = self.load_parts()?;
        Ok(Game::new(validator, start_words, self.rng()))
    }

    /// Load the word lists and start the first round on `root_word`
    ///
    /// # Errors
    ///
    /// Returns an error if a configured word list is unreadable or `root_word`
    /// is blank.
    pub fn build_game_with_root(&self, root_word: &str) -> Result<Game<WordListDictionary>> {
        let (validator, start_words) = self.load_parts()?;
        Game::with_root(validator, start_words, self.rng(), root_word)
            .with_context(|| format!("cannot start a round on '{root_word}'"))
    }

    fn load_parts(&self) -> Result<(Validator<WordListDictionary>, StartWords)> {
        let start_words = match &self.start_words {
            Some(path) => load_start_words(path).context("failed to load start words")?,
            None => embedded_start_words(),
        };

        let dictionary = match &self.dictionary {
            Some(path) => {
                load_dictionary(path, &self.locale).context("failed to load dictionary")?
            }
            None => embedded_dictionary(),
        };

        let validator = Validator::new(dictionary, self.locale.clone());
        info!(
            start_words = start_words.len(),
            dictionary = validator.dictionary().len(),
            dictionary_locale = validator.dictionary().locale(),
            locale = %self.locale,
            "word lists ready"
        );

        Ok((validator, start_words))
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
