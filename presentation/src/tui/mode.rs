//! Key handling
//!
//! Keys go either to the page (navigation) or to the chat panel (text
//! input), depending on which one has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::Color;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Page,
    Chat,
}

impl Focus {
    /// Indicator string for the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Focus::Page => "PAGE",
            Focus::Chat => "CHAT",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Focus::Page => Color::Blue,
            Focus::Chat => Color::Green,
        }
    }
}

/// Semantic action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,

    // Page navigation
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    JumpTo(char),

    // Chat panel
    ToggleChat,
    CloseChat,
    SwitchFocus,
    InsertChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Submit,
    ChatScrollUp,
    ChatScrollDown,

    None,
}

/// Map a key event to an action for the given focus
pub fn handle_key_event(focus: Focus, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match focus {
        Focus::Page => handle_page_key(key),
        Focus::Chat => handle_chat_key(key),
    }
}

fn handle_page_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::PageDown | KeyCode::Char(' ') => KeyAction::PageDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::Char('g') | KeyCode::Home => KeyAction::ScrollToTop,
        KeyCode::Char('G') | KeyCode::End => KeyAction::ScrollToBottom,
        KeyCode::Char(c @ '1'..='9') => KeyAction::JumpTo(c),
        KeyCode::Char('c') => KeyAction::ToggleChat,
        KeyCode::Tab => KeyAction::SwitchFocus,
        _ => KeyAction::None,
    }
}

fn handle_chat_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::CloseChat,
        KeyCode::Tab => KeyAction::SwitchFocus,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Delete => KeyAction::Delete,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        KeyCode::Up | KeyCode::PageUp => KeyAction::ChatScrollUp,
        KeyCode::Down | KeyCode::PageDown => KeyAction::ChatScrollDown,
        KeyCode::Char(c) => KeyAction::InsertChar(c),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(Focus::Page, ctrl_c), KeyAction::Quit);
        assert_eq!(handle_key_event(Focus::Chat, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_page_keys() {
        assert_eq!(handle_key_event(Focus::Page, key(KeyCode::Char('j'))), KeyAction::ScrollDown);
        assert_eq!(handle_key_event(Focus::Page, key(KeyCode::Char('3'))), KeyAction::JumpTo('3'));
        assert_eq!(handle_key_event(Focus::Page, key(KeyCode::Char('c'))), KeyAction::ToggleChat);
        assert_eq!(handle_key_event(Focus::Page, key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_chat_keys_type_text() {
        // Letters that navigate the page are plain text in the chat
        assert_eq!(
            handle_key_event(Focus::Chat, key(KeyCode::Char('q'))),
            KeyAction::InsertChar('q')
        );
        assert_eq!(
            handle_key_event(Focus::Chat, key(KeyCode::Char('j'))),
            KeyAction::InsertChar('j')
        );
        assert_eq!(handle_key_event(Focus::Chat, key(KeyCode::Enter)), KeyAction::Submit);
        assert_eq!(handle_key_event(Focus::Chat, key(KeyCode::Esc)), KeyAction::CloseChat);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(Focus::Page, release), KeyAction::None);
    }
}
