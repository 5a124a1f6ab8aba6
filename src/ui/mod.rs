//! Ratatui front-end. The [`App`] owns a reading session, translates key
//! presses into session operations, and draws whatever panel the session
//! says is visible.

mod app;
mod clipboard;
mod forms;
mod helpers;
mod reading;
mod screens;
mod terminal;

pub use app::App;
pub use clipboard::{osc52_sequence, TerminalShare};
pub use terminal::run_app;
