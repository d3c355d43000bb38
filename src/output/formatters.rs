//! Formatting utilities for terminal output
//!
//! Verdicts become a sequence of tiles first; every display form is built
//! from tiles so the mapping can be tested without escape codes.

use crate::core::{Feedback, Verdict, Word};
use clap::ValueEnum;
use colored::Colorize;

/// One displayed letter with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub feedback: Feedback,
}

/// How guesses are drawn on a line-based terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderStyle {
    /// Colored letters: green exact, yellow present, red absent
    #[default]
    Color,
    /// Letters followed by emoji squares
    Emoji,
    /// `[X]` exact, `(X)` present, ` x ` absent
    Plain,
}

/// Pair each guess letter (uppercased) with its feedback
#[must_use]
pub fn tiles(guess: &Word, verdict: &Verdict) -> Vec<Tile> {
    guess
        .chars()
        .iter()
        .zip(verdict.feedback())
        .map(|(&letter, &feedback)| Tile {
            letter: char::from(letter.to_ascii_uppercase()),
            feedback,
        })
        .collect()
}

/// Bracket markers, no color
#[must_use]
pub fn plain_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| match tile.feedback {
            Feedback::Exact => format!("[{}]", tile.letter),
            Feedback::Present => format!("({})", tile.letter),
            Feedback::Absent => format!(" {} ", tile.letter.to_ascii_lowercase()),
        })
        .collect()
}

/// ANSI-colored letters
#[must_use]
pub fn colored_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| {
            let letter = tile.letter.to_string();
            match tile.feedback {
                Feedback::Exact => letter.green().bold().to_string(),
                Feedback::Present => letter.yellow().bold().to_string(),
                Feedback::Absent => letter.red().to_string(),
            }
        })
        .collect()
}

/// Letters then emoji squares, e.g. `CRANE 🟩⬜🟨⬜⬜`
#[must_use]
pub fn emoji_tiles(tiles: &[Tile]) -> String {
    let letters: String = tiles.iter().map(|tile| tile.letter).collect();
    let squares: String = tiles.iter().map(|tile| tile.feedback.emoji()).collect();
    format!("{letters} {squares}")
}

/// Render a scored guess in the requested style
#[must_use]
pub fn render_guess(guess: &Word, verdict: &Verdict, style: RenderStyle) -> String {
    let tiles = tiles(guess, verdict);
    match style {
        RenderStyle::Color => colored_tiles(&tiles),
        RenderStyle::Emoji => emoji_tiles(&tiles),
        RenderStyle::Plain => plain_tiles(&tiles),
    }
}
