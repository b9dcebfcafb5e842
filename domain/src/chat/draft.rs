//! Draft input — the user's uncommitted text

/// Current uncommitted user text with a byte cursor.
///
/// The cursor always sits on a UTF-8 character boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in bytes
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when there is nothing but whitespace to send
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the whole draft, cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor (Backspace)
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_len = self.text[..self.cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.text.remove(self.cursor - prev_len);
        self.cursor -= prev_len;
    }

    /// Delete the character under the cursor (Delete)
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Clear without returning the contents
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut draft = DraftInput::new();
        for c in "héllo".chars() {
            draft.insert_char(c);
        }
        assert_eq!(draft.text(), "héllo");
        assert_eq!(draft.cursor(), "héllo".len());

        draft.backspace();
        draft.backspace();
        draft.backspace();
        assert_eq!(draft.text(), "hé");
        draft.backspace();
        assert_eq!(draft.text(), "h");
        assert_eq!(draft.cursor(), 1);
    }

    #[test]
    fn test_cursor_moves_over_multibyte_chars() {
        let mut draft = DraftInput::new();
        draft.set("a✨b");
        draft.cursor_left();
        assert_eq!(draft.cursor(), 4);
        draft.cursor_left();
        assert_eq!(draft.cursor(), 1);
        draft.insert_char('!');
        assert_eq!(draft.text(), "a!✨b");
        draft.cursor_right();
        assert_eq!(draft.cursor(), 5);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut draft = DraftInput::new();
        draft.set("abc");
        draft.cursor_home();
        draft.delete();
        assert_eq!(draft.text(), "bc");
        draft.cursor_end();
        draft.delete();
        assert_eq!(draft.text(), "bc");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut draft = DraftInput::new();
        draft.set("x");
        draft.cursor_home();
        draft.backspace();
        assert_eq!(draft.text(), "x");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut draft = DraftInput::new();
        draft.set("question");
        draft.clear();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn test_is_blank() {
        let mut draft = DraftInput::new();
        assert!(draft.is_blank());
        draft.set("  \t ");
        assert!(draft.is_blank());
        draft.set(" hi ");
        assert!(!draft.is_blank());
    }
}
