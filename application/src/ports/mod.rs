//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement
//! and the events the presentation layer consumes.

pub mod chat_event;
pub mod generation_gateway;
