//! Session status value object

use serde::{Deserialize, Serialize};

/// Request lifecycle of a chat session.
///
/// `Sending` means exactly one request is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    Idle,
    Sending,
}

impl SessionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionStatus::Idle)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SessionStatus::Sending)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "idle"),
            SessionStatus::Sending => write!(f, "sending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SessionStatus::default(), SessionStatus::Idle);
        assert!(SessionStatus::default().is_idle());
        assert!(!SessionStatus::default().is_sending());
    }
}
