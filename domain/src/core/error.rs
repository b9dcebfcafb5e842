//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Reveal threshold must be in (0, 1], got {0}")]
    InvalidThreshold(String),
}
