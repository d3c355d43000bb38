//! Error types shared across the game

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures surfaced by the word source, selector, scorer and session
#[derive(Debug)]
pub enum GameError {
    /// The word list resource could not be read
    SourceUnavailable { path: PathBuf, source: io::Error },
    /// No words left to draw a secret from
    EmptyPool,
    /// Raw strings handed to the scorer had the wrong length
    LengthMismatch { guess: usize, secret: usize },
    /// A guess was submitted after the game had already finished
    SessionOver,
    /// The player's input stream ended before the game finished
    InputClosed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { path, source } => {
                write!(f, "Could not read word list {}: {source}", path.display())
            }
            Self::EmptyPool => write!(f, "Word list is empty, no secret word to pick"),
            Self::LengthMismatch { guess, secret } => write!(
                f,
                "Guess and secret must both be {} letters (got {guess} and {secret})",
                crate::core::WORD_LENGTH
            ),
            Self::SessionOver => write!(f, "The game is already over"),
            Self::InputClosed => write!(f, "Input closed before the game finished"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl GameError {
    /// Whether this error means a game could not be set up at all
    ///
    /// These are reported to the player; anything else is a bug or an I/O failure.
    #[must_use]
    pub const fn is_setup_failure(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. } | Self::EmptyPool)
    }
}
