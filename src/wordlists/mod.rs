//! Word lists for the game
//!
//! Provides the embedded default list, file loading, and the secret word pool.

mod embedded;
pub mod loader;
pub mod pool;

pub use embedded::{WORDS, WORDS_COUNT};
pub use pool::{IndexSource, WordPool};
