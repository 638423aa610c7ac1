/// Single-line text buffer backing the dialog popups.
///
/// The cursor is a character index, not a byte index, so arrow keys move
/// over multi-byte characters correctly.
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Replace the contents and park the cursor at the end, e.g. when a
    /// rename/edit dialog opens pre-filled with the current text.
    pub fn set(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.buffer = text;
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_insert_and_edit_in_middle() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputState::new();
        input.insert_char('x');
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "x");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = InputState::new();
        input.set("abc".to_string());
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = InputState::new();
        input.insert_char('é');
        input.insert_char('ü');
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.as_str(), "éxü");
        input.move_end();
        input.backspace();
        assert_eq!(input.as_str(), "éx");
    }

    #[test]
    fn test_set_parks_cursor_at_end() {
        let mut input = InputState::new();
        input.set("hello".to_string());
        assert_eq!(input.cursor_pos(), 5);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputState::new();
        input.set("done".to_string());
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }
}
