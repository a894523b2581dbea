//! Submission validation
//!
//! A candidate goes through four checks in a fixed order: length, letters
//! available in the root word, not already used, known to the dictionary. The
//! first failing check decides the rejection the player sees.

use super::dictionary::Dictionary;
use super::word::{LetterPool, MIN_WORD_LENGTH, letter_count, normalize};
use std::fmt;

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    TooShort,
    NotConstructible,
    AlreadyUsed,
    NotAWord,
}

impl Rejection {
    /// Short headline for the rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::NotConstructible => "Word not possible.",
            Self::AlreadyUsed => "Word used already!",
            Self::NotAWord => "That's not a real word, lol.",
        }
    }

    /// Longer explanation, phrased against the current root word
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShort => {
                format!("Word can't be shorter than {MIN_WORD_LENGTH} letters")
            }
            Self::NotConstructible => format!("You can't spell that word from {root_word}"),
            Self::AlreadyUsed => "Try again.".to_string(),
            Self::NotAWord => "You can't just make them up boo".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted { word: String, score_delta: u32 },
    Rejected(Rejection),
}

impl ValidationResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Applies the submission rules against an injected dictionary
#[derive(Debug, Clone)]
pub struct Validator<D> {
    dictionary: D,
    locale: String,
}

impl<D: Dictionary> Validator<D> {
    pub fn new(dictionary: D, locale: impl Into<String>) -> Self {
        Self {
            dictionary,
            locale: locale.into(),
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// At least `MIN_WORD_LENGTH` letters
    #[must_use]
    pub fn check_length(word: &str) -> bool {
        letter_count(word) >= MIN_WORD_LENGTH
    }

    /// Every letter of `word` can be drawn from `root_word`, each at most once
    #[must_use]
    pub fn check_constructible(word: &str, root_word: &str) -> bool {
        LetterPool::new(root_word).can_spell(word)
    }

    /// `word` has not been accepted before in this round
    #[must_use]
    pub fn check_original(word: &str, used_words: &[String]) -> bool {
        !used_words.iter().any(|used| normalize(used) == word)
    }

    /// The dictionary recognizes `word` for this validator's locale
    #[must_use]
    pub fn check_real(&self, word: &str) -> bool {
        self.dictionary.is_known_word(word, &self.locale)
    }

    /// Run all checks against a raw submission
    ///
    /// The order is length, constructibility, originality, then the dictionary.
    /// An accepted word scores one point per letter.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, ValidationResult, Validator, WordListDictionary};
    ///
    /// let validator = Validator::new(WordListDictionary::new(["silk"], "en"), "en");
    ///
    /// assert_eq!(
    ///     validator.validate(" Silk ", "silkworm", &[]),
    ///     ValidationResult::Accepted { word: "silk".to_string(), score_delta: 4 }
    /// );
    /// assert_eq!(
    ///     validator.validate("si", "silkworm", &[]),
    ///     ValidationResult::Rejected(Rejection::TooShort)
    /// );
    /// ```
    pub fn validate(&self, raw: &str, root_word: &str, used_words: &[String]) -> ValidationResult {
        let word = normalize(raw);

        if !Self::check_length(&word) {
            return ValidationResult::Rejected(Rejection::TooShort);
        }

        if !Self::check_constructible(&word, root_word) {
            return ValidationResult::Rejected(Rejection::NotConstructible);
        }

        if !Self::check_original(&word, used_words) {
            return ValidationResult::Rejected(Rejection::AlreadyUsed);
        }

        if !self.check_real(&word) {
            return ValidationResult::Rejected(Rejection::NotAWord);
        }

        let score_delta = u32::try_from(letter_count(&word)).unwrap_or(u32::MAX);
        ValidationResult::Accepted { word, score_delta }
    }
}
