//! Core library surface for the Scripture Reader TUI: a King James Bible
//! reader with per-chapter notes, verse highlights, and theme-based verse
//! discovery.
pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod ui;

/// Persistence entry points used by `main.rs`.
pub use db::{data_dir, ensure_schema, KeyValueStore, SqliteStore};

pub use config::Config;
pub use session::{ReadingSession, SessionServices};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
