//! TUI (Text User Interface) module for portfolio-twin
//!
//! Renders the portfolio as a scrollable terminal page with a hero star
//! field, reveal-on-scroll sections and a floating chat panel backed by
//! the [`ChatSessionController`](twin_application::ChatSessionController).

mod app;
pub mod mode;
pub mod page;
pub mod section;
pub mod starfield;
mod state;
pub mod widgets;

pub use app::TuiApp;
pub use mode::{Focus, KeyAction};
pub use section::Section;
pub use state::{TuiSettings, TuiState, Visibility};
