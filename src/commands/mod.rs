//! Command implementations

pub mod play;

pub use play::{PlayConfig, obtain_guess, play_session, run_play};
