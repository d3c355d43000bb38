//! TUI application state and logic

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::game::{GameState, Session, Statistics};
use crate::wordlists::{IndexSource, WordPool};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use tracing::debug;

/// Application state
pub struct App<S: IndexSource> {
    pub pool: WordPool,
    source: S,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

impl<S: IndexSource> App<S> {
    /// Draw the first secret and set up a fresh game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` if the pool has no words.
    pub fn new(mut pool: WordPool, mut source: S) -> Result<Self, GameError> {
        let secret = pool.pick_random(&mut source)?;

        Ok(Self {
            pool,
            source,
            session: Session::new(secret),
            input_buffer: String::with_capacity(WORD_LENGTH),
            messages: vec![Message {
                text: format!("Welcome! Type a {WORD_LENGTH}-letter word and press Enter."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    pub fn type_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit_guess(&mut self) {
        let guess = match Word::new(&self.input_buffer) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let Err(e) = self.session.submit(guess) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();

        match self.session.state() {
            GameState::InProgress { .. } => {}
            GameState::Won { attempts } => {
                self.finish_game();
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it at the end! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_next_step_hint();
            }
            GameState::Lost => {
                self.finish_game();
                let text = format!(
                    "Out of guesses. The word was '{}'.",
                    self.session.secret().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
                self.add_next_step_hint();
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(self.session.state());
        self.input_mode = InputMode::GameOver;
        debug!(state = ?self.session.state(), "tui game finished");
    }

    fn add_next_step_hint(&mut self) {
        if self.pool.is_empty() {
            self.add_message("No words left in the pool. Press 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match self.pool.pick_random(&mut self.source) {
            Ok(secret) => {
                self.session = Session::new(secret);
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best feedback seen so far for every guessed letter
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<u8, Feedback> {
        let mut states: FxHashMap<u8, Feedback> = FxHashMap::default();
        for turn in self.session.history() {
            for (&letter, &feedback) in turn.guess.chars().iter().zip(turn.verdict.feedback()) {
                let best = states.entry(letter).or_insert(feedback);
                *best = (*best).max(feedback);
            }
        }
        states
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if !self.pool.is_empty() => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: IndexSource>(app: App<S>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, S: IndexSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
