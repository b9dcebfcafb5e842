//! Application layer for portfolio-twin
//!
//! This crate contains the chat session use case, port definitions, and
//! chat settings. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatSettings;
pub use ports::{
    chat_event::ChatEvent,
    generation_gateway::{GatewayError, GenerationGateway, GenerationRequest},
};
pub use use_cases::chat_session::{
    ChatSessionController, PendingTurn, SubmitRejected, TurnOutcome,
};
