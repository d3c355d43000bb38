//! Terminal output formatting
//!
//! Display utilities for the line-based game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_setup_error, write_intro, write_outcome, write_statistics, write_turn};
pub use formatters::{RenderStyle, Tile, render_guess, tiles};
