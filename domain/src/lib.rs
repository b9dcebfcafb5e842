//! Domain layer for portfolio-twin
//!
//! This crate contains the core entities and value objects of the portfolio
//! chat widget. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Chat
//!
//! - **Transcript**: greeting-seeded, append-only list of [`Message`]s
//! - **SessionStatus**: `Idle` or `Sending` (one request in flight)
//! - **DraftInput**: what the visitor is typing right now
//!
//! ## Persona
//!
//! A [`Profile`] describes the site owner; [`PersonaContext`] turns it into
//! the fixed system instruction sent with every model call.
//!
//! ## Reveal
//!
//! [`RevealTracker`] implements one-shot reveal-on-scroll for page blocks.

pub mod chat;
pub mod core;
pub mod persona;
pub mod reveal;
pub mod util;

// Re-export commonly used types
pub use chat::{
    DEFAULT_FALLBACK_REPLY,
    draft::DraftInput,
    message::{Message, Role},
    status::SessionStatus,
    transcript::Transcript,
};
pub use core::error::DomainError;
pub use persona::{
    context::PersonaContext,
    profile::{
        Article, Certificate, Contact, Education, Experience, Profile, Project, SkillGroup, Stat,
    },
};
pub use reveal::{DEFAULT_THRESHOLD, Extent, RevealTracker};
