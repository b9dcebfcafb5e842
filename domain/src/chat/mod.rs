//! Chat domain.
//!
//! - [`message::Message`] — a single immutable turn
//! - [`transcript::Transcript`] — append-only, greeting-seeded history
//! - [`status::SessionStatus`] — Idle / Sending
//! - [`draft::DraftInput`] — uncommitted user text

pub mod draft;
pub mod message;
pub mod status;
pub mod transcript;

/// Reply shown whenever the real one cannot be obtained or parsed.
pub const DEFAULT_FALLBACK_REPLY: &str =
    "I'm having a bit of trouble connecting to my brain right now. Please try again later!";
