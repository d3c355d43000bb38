//! Wordle
//!
//! Guess a secret five-letter word in six tries. Each guess is scored letter
//! by letter: exact, present elsewhere, or absent, with duplicate letters
//! counted against how many times they occur in the secret.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Verdict, Word};
//!
//! let guess = Word::new("books").unwrap();
//! let secret = Word::new("brook").unwrap();
//!
//! let verdict = Verdict::calculate(&guess, &secret);
//! assert_eq!(verdict.to_digits(), "2 1 2 1 0");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game state machine
pub mod game;

// Word lists and the secret pool
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
