//! Formatting utilities shared by the terminal front ends

use crate::core::{Rejection, letter_count};

/// Letter count of a word as a circled number, e.g. `④` for "silk"
///
/// Counts past twenty fall back to `(21)`.
#[must_use]
pub fn letter_badge(word: &str) -> String {
    let count = letter_count(word);
    match u32::try_from(count) {
        Ok(n @ 1..=20) => char::from_u32(0x245F + n).map_or_else(|| format!("({n})"), String::from),
        _ => format!("({count})"),
    }
}

/// A rejection as a single line: title, then the explanation in parentheses
#[must_use]
pub fn rejection_text(rejection: Rejection, root_word: &str) -> String {
    format!("{} ({})", rejection.title(), rejection.message(root_word))
}

/// Status line with the score and number of words found
#[must_use]
pub fn score_line(score: u32, word_count: usize) -> String {
    let noun = if word_count == 1 { "word" } else { "words" };
    format!("Score: {score} | {word_count} {noun}")
}
