//! Display functions for line-oriented output

use super::formatters::{letter_badge, score_line};
use crate::commands::CheckReport;
use crate::core::ValidationResult;
use colored::Colorize;
use std::io::{self, Write};

/// Banner announcing the root word of a new round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_header<W: Write>(out: &mut W, root_word: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        root_word.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Outcome of one submission; blank submissions print nothing
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_result<W: Write>(
    out: &mut W,
    result: Option<&ValidationResult>,
    root_word: &str,
) -> io::Result<()> {
    match result {
        None => Ok(()),
        Some(ValidationResult::Accepted { word, score_delta }) => writeln!(
            out,
            "{} {} {}",
            "✓".green().bold(),
            word.bright_white().bold(),
            format!("+{score_delta}").green()
        ),
        Some(ValidationResult::Rejected(reason)) => writeln!(
            out,
            "{} {} {}",
            "✗".red().bold(),
            reason.title().red().bold(),
            reason.message(root_word).bright_black()
        ),
    }
}

/// Accepted words with their letter counts, most recent first
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_used_words<W: Write>(out: &mut W, used_words: &[String]) -> io::Result<()> {
    if used_words.is_empty() {
        return writeln!(out, "No words yet.");
    }

    for word in used_words {
        writeln!(out, "  {} {word}", letter_badge(word).cyan())?;
    }
    Ok(())
}

/// Score and word count
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_score<W: Write>(out: &mut W, score: u32, word_count: usize) -> io::Result<()> {
    writeln!(out, "{}", score_line(score, word_count).bright_cyan())
}

/// Print the outcome of a `check` run to stdout
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_check_report(report: &CheckReport) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_check_report(&mut out, report)?;
    out.flush()
}

/// Every submission of a `check` run followed by the final score
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_check_report<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    write_round_header(out, &report.root_word)?;

    for entry in &report.entries {
        match &entry.result {
            Some(result) => {
                write!(out, "{:<16} ", entry.input)?;
                write_result(out, Some(result), &report.root_word)?;
            }
            None => writeln!(out, "{:<16} {}", "(blank)", "skipped".bright_black())?,
        }
    }

    writeln!(out)?;
    write_score(out, report.score, report.accepted)
}
