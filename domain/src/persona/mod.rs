//! Persona domain.
//!
//! - [`profile::Profile`] — structured data about the portfolio owner
//! - [`context::PersonaContext`] — the system instruction derived from it

pub mod context;
mod defaults;
pub mod profile;
