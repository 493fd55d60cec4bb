//! Interactive TUI interface
//!
//! A ratatui front end that turns terminal key presses into game key codes.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
