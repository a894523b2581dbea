//! Core game types for Word Scramble
//!
//! Validation rules and the round state container. Nothing here touches the
//! terminal; the only outside collaborator is the injected `Dictionary`.

mod dictionary;
mod game;
mod validator;
mod word;

pub use dictionary::{DEFAULT_LOCALE, Dictionary, WordListDictionary};
pub use game::{Game, GameState};
pub use validator::{Rejection, ValidationResult, Validator};
pub use word::{LetterPool, MIN_WORD_LENGTH, letter_count, normalize};
