//! Infrastructure layer for portfolio-twin
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration and profile file loading.

pub mod config;
pub mod gemini;
pub mod profile;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use gemini::{GeminiConfig, GeminiGateway};
pub use profile::{ProfileError, ProfileLoader};
