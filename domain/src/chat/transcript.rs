//! Transcript — the ordered, append-only list of chat turns

use super::message::Message;

/// Ordered sequence of [`Message`]s owned by one chat session.
///
/// Always starts with a single assistant greeting and only ever grows:
/// there is no way to remove, edit or reorder a turn.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript seeded with the assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
        }
    }

    /// Append a turn and return a reference to it.
    pub fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        // Just pushed, so never empty.
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the greeting is present from construction.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Role;

    #[test]
    fn test_seeded_with_single_greeting() {
        let transcript = Transcript::with_greeting("Hi!");
        assert_eq!(transcript.len(), 1);
        assert!(!transcript.is_empty());
        let first = transcript.last().unwrap();
        assert_eq!(first.role(), Role::Assistant);
        assert_eq!(first.text(), "Hi!");
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut transcript = Transcript::with_greeting("Hi!");
        transcript.append(Message::user("one"));
        transcript.append(Message::assistant("two"));
        transcript.append(Message::user("three"));

        let texts: Vec<&str> = transcript.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["Hi!", "one", "two", "three"]);
        let roles: Vec<Role> = transcript.iter().map(|m| m.role()).collect();
        assert_eq!(
            roles,
            vec![Role::Assistant, Role::User, Role::Assistant, Role::User]
        );
    }

    #[test]
    fn test_append_returns_new_turn() {
        let mut transcript = Transcript::with_greeting("Hi!");
        let appended = transcript.append(Message::user("question"));
        assert_eq!(appended.text(), "question");
    }
}
