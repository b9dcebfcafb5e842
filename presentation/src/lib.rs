//! Presentation layer for portfolio-twin
//!
//! This crate contains the CLI definition, the one-shot `--ask` output,
//! the reply spinner, and the interactive portfolio TUI.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::ask::run_ask;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ReplySpinner;
pub use tui::{TuiApp, TuiSettings};
