//! Game state
//!
//! The per-game state machine and running statistics.

mod session;
mod stats;

pub use session::{GameState, Session, Turn};
pub use stats::Statistics;
