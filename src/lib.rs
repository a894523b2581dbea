//! Word Scramble
//!
//! A word game: build as many words as you can from the letters of a random
//! root word. Words need at least three letters, may use each letter of the
//! root word once, cannot repeat, and must be real. Each accepted word scores
//! one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Game, ValidationResult, Validator, WordListDictionary};
//! use word_scramble::wordlists::loader::embedded_start_words;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let validator = Validator::new(WordListDictionary::new(["silk", "worm"], "en"), "en");
//! let mut game = Game::with_root(
//!     validator,
//!     embedded_start_words(),
//!     StdRng::seed_from_u64(1),
//!     "silkworm",
//! )
//! .unwrap();
//!
//! let result = game.submit("silk");
//! assert!(matches!(result, Some(ValidationResult::Accepted { score_delta: 4, .. })));
//! assert_eq!(game.score(), 4);
//! ```

// Core domain types
pub mod core;

// Fatal startup errors
pub mod error;

// Settings and game construction
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

#[cfg(test)]
mod log_capture;
