//! Single-game state machine
//!
//! `InProgress { attempt }` starts at 1 and advances after every scored guess
//! that misses. A perfect verdict moves to `Won`; a miss on the last attempt
//! moves to `Lost`. Both are terminal.

use crate::core::{MAX_ATTEMPTS, Verdict, Word};
use crate::error::GameError;
use tracing::debug;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for guess number `attempt` (1-based)
    InProgress { attempt: usize },
    /// Solved on guess number `attempts`
    Won { attempts: usize },
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub verdict: Verdict,
}

/// A game against one secret word
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    state: GameState,
    history: Vec<Turn>,
}

impl Session {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            state: GameState::InProgress { attempt: 1 },
            history: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Score a guess and advance the state machine
    ///
    /// # Errors
    /// Returns `GameError::SessionOver` if the game already ended; the state is
    /// left untouched.
    pub fn submit(&mut self, guess: Word) -> Result<Verdict, GameError> {
        let GameState::InProgress { attempt } = self.state else {
            return Err(GameError::SessionOver);
        };

        let verdict = Verdict::calculate(&guess, &self.secret);
        debug!(attempt, guess = %guess, verdict = %verdict.to_digits(), "scored guess");

        self.state = if verdict.is_perfect() {
            GameState::Won { attempts: attempt }
        } else if attempt >= MAX_ATTEMPTS {
            GameState::Lost
        } else {
            GameState::InProgress {
                attempt: attempt + 1,
            }
        };
        debug!(state = ?self.state, "session advanced");

        self.history.push(Turn { guess, verdict });
        Ok(verdict)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The attempt number awaiting a guess, if the game is still running
    #[must_use]
    pub const fn attempt(&self) -> Option<usize> {
        match self.state {
            GameState::InProgress { attempt } => Some(attempt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }
}
