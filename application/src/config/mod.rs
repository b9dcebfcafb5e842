//! Application-level chat settings.
//!
//! Resolved from the file configuration and the profile by the
//! infrastructure layer, then handed to the controller.

use twin_domain::{DEFAULT_FALLBACK_REPLY, Profile};

/// Canned texts used by the chat session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    /// First assistant turn, present before any interaction
    pub greeting: String,
    /// Shown whenever a real reply cannot be obtained
    pub fallback_reply: String,
}

impl ChatSettings {
    /// Greeting derived from the profile, default fallback reply
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            greeting: profile.greeting(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_fallback_reply(mut self, reply: impl Into<String>) -> Self {
        self.fallback_reply = reply.into();
        self
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from_profile(&Profile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_profile() {
        let settings = ChatSettings::default();
        assert!(settings.greeting.contains("Kaustav's AI Twin"));
        assert_eq!(settings.fallback_reply, DEFAULT_FALLBACK_REPLY);
    }

    #[test]
    fn test_builder_overrides() {
        let settings = ChatSettings::default()
            .with_greeting("Hello")
            .with_fallback_reply("Sorry");
        assert_eq!(settings.greeting, "Hello");
        assert_eq!(settings.fallback_reply, "Sorry");
    }
}
