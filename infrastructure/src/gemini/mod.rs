//! Gemini generateContent adapter

mod gateway;
pub mod types;

pub use gateway::{GeminiConfig, GeminiGateway};
