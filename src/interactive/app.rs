//! TUI application state and logic

use crate::core::{Dictionary, Game, ValidationResult};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the text box accepts
const MAX_INPUT_LEN: usize = 32;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<D> {
    pub game: Game<D>,
    pub input: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Modal popup shown for a rejected word until a key is pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub fn new(game: Game<D>) -> Self {
        let mut app = Self {
            game,
            input: String::new(),
            alert: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Make words from the letters of the root word. Enter submits.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the text box contents
    ///
    /// Accepted words clear the box; rejected ones stay so they can be fixed.
    pub fn submit_input(&mut self) {
        let Some(result) = self.game.submit(&self.input) else {
            return;
        };

        match result {
            ValidationResult::Accepted { word, score_delta } => {
                self.input.clear();
                self.add_message(
                    &format!("{word} +{score_delta} (score {})", self.game.score()),
                    MessageStyle::Success,
                );
            }
            ValidationResult::Rejected(reason) => {
                let text = format!("{}: {reason}", self.input.trim());
                self.add_message(&text, MessageStyle::Error);
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(self.game.root_word()),
                });
            }
        }
    }

    /// Draw a new root word, keeping the score
    pub fn new_word(&mut self) {
        self.game.new_round();
        self.input.clear();
        self.alert = None;
        let text = format!("New word: {}", self.game.root_word().to_uppercase());
        self.add_message(&text, MessageStyle::Info);
    }

    /// Draw a new root word and reset the score
    pub fn restart(&mut self) {
        self.game.restart();
        self.input.clear();
        self.alert = None;
        self.messages.clear();
        let text = format!(
            "Game restarted on {}. Score reset.",
            self.game.root_word().to_uppercase()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Any key closes the alert without doing anything else
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_word();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && self.input.chars().count() < MAX_INPUT_LEN
                {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, D>(terminal: &mut Terminal<B>, mut app: App<D>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
