//! Console formatting for chat turns

use colored::Colorize;
use twin_domain::{Message, Role};

/// Formats chat turns for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One message with a colored role label
    pub fn format_message(message: &Message, assistant_name: &str) -> String {
        let label = match message.role() {
            Role::User => "You:".cyan().bold(),
            Role::Assistant => format!("{}:", assistant_name).green().bold(),
        };
        format!("{} {}\n", label, message.text())
    }

    /// Bare reply text (for --quiet and pipes)
    pub fn format_plain(message: &Message) -> String {
        format!("{}\n", message.text())
    }

    /// Header line naming the model
    pub fn header(title: &str, model: &str) -> String {
        format!(
            "{} {}\n",
            title.bold(),
            format!("({})", model).dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_contains_label_and_text() {
        colored::control::set_override(false);
        let user = ConsoleFormatter::format_message(&Message::user("hi"), "AI Kaustav");
        assert_eq!(user, "You: hi\n");

        let reply = ConsoleFormatter::format_message(&Message::assistant("hello"), "AI Kaustav");
        assert_eq!(reply, "AI Kaustav: hello\n");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(
            ConsoleFormatter::format_plain(&Message::assistant("just text")),
            "just text\n"
        );
    }
}
