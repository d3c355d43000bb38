//! Full-screen terminal interface

mod app;
pub mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
