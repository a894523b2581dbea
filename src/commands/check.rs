//! One-shot check command
//!
//! Plays a list of words into a single round and reports how each one fared.

use crate::core::{Dictionary, Game, ValidationResult};

/// One submitted word and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub input: String,
    /// `None` for blank input, which is skipped
    pub result: Option<ValidationResult>,
}

/// Result of playing a list of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub root_word: String,
    pub entries: Vec<CheckEntry>,
    pub score: u32,
    pub accepted: usize,
}

/// Submit every word in order to the current round
///
/// Earlier words count as used for later ones, so repeating a word is
/// reported as already used.
pub fn run_check<D: Dictionary, S: AsRef<str>>(game: &mut Game<D>, words: &[S]) -> CheckReport {
    let entries = words
        .iter()
        .map(|word| {
            let input = word.as_ref();
            CheckEntry {
                input: input.to_string(),
                result: game.submit(input),
            }
        })
        .collect();

    CheckReport {
        root_word: game.root_word().to_string(),
        entries,
        score: game.score(),
        accepted: game.used_words().len(),
    }
}
