//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::core::{Dictionary, Game};
use crate::output::{write_result, write_round_header, write_score, write_used_words};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// A line typed in simple mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Submit(String),
    NewWord,
    Restart,
    Words,
    Help,
    Quit,
}

impl SimpleCommand {
    /// Commands start with ':' so they can never collide with a word
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":new" | ":n" => Self::NewWord,
            ":restart" | ":r" => Self::Restart,
            ":words" | ":w" => Self::Words,
            ":help" | ":h" | ":?" => Self::Help,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Reads until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<D, R, W>(game: &mut Game<D>, mut input: R, out: &mut W) -> Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "\n{}",
        "Word Scramble - make words from the letters of the root word"
            .bright_cyan()
            .bold()
    )?;
    write_help(out)?;
    write_round_header(out, game.root_word())?;

    let mut line = String::new();
    loop {
        write!(out, "Word: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match SimpleCommand::parse(&line) {
            SimpleCommand::Submit(raw) => {
                let result = game.submit(&raw);
                write_result(out, result.as_ref(), game.root_word())?;
                if result.is_some_and(|r| r.is_accepted()) {
                    write_score(out, game.score(), game.used_words().len())?;
                }
            }
            SimpleCommand::NewWord => {
                game.new_round();
                write_round_header(out, game.root_word())?;
                write_score(out, game.score(), game.used_words().len())?;
            }
            SimpleCommand::Restart => {
                game.restart();
                writeln!(out, "{}", "Game restarted, score reset.".yellow())?;
                write_round_header(out, game.root_word())?;
            }
            SimpleCommand::Words => {
                write_used_words(out, game.used_words())?;
                write_score(out, game.score(), game.used_words().len())?;
            }
            SimpleCommand::Help => write_help(out)?,
            SimpleCommand::Quit => break,
        }
    }

    write_score(out, game.score(), game.used_words().len())?;
    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Type a word of 3+ letters and press Enter.")?;
    writeln!(
        out,
        "Commands: :new (new word), :restart (reset score), :words, :help, :quit"
    )
}
