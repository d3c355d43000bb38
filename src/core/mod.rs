//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

mod verdict;
mod word;

pub use verdict::{Feedback, Verdict};
pub use word::{Word, WordError, is_valid};

/// Number of letters in every secret and every guess
pub const WORD_LENGTH: usize = 5;

/// Number of guesses the player gets per game
pub const MAX_ATTEMPTS: usize = 6;
