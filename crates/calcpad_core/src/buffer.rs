//! Expression buffer with cursor-aware editing.
//!
//! Offsets are in Unicode scalar values. The selection always satisfies
//! `start <= end <= chars_len()`.

use std::fmt;
use std::ops::Range;

/// Editable expression text plus the current selection.
///
/// `has_focus` is supplied by the front end. Edits always apply, but the caret
/// is only placed at the edit point while the buffer is focused; an unfocused
/// buffer collapses its caret to the end of the text, as a text field does
/// when its value is replaced from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
    start: usize,
    end: usize,
    has_focus: bool,
}

impl ExpressionBuffer {
    /// Creates an empty, unfocused buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current text.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the buffer length in Unicode scalar values.
    pub fn chars_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` when the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the selection as a char range.
    pub fn selection(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether the buffer currently holds input focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Records whether the buffer holds input focus.
    pub fn set_focus(&mut self, focused: bool) {
        self.has_focus = focused;
    }

    /// Selects `[a, b]`, clamped to the text and ordered.
    pub fn set_selection(&mut self, a: usize, b: usize) {
        let len = self.chars_len();
        let (a, b) = (a.min(len), b.min(len));
        self.start = a.min(b);
        self.end = a.max(b);
    }

    /// Moves the caret one character left, collapsing any selection to its start.
    pub fn move_caret_left(&mut self) {
        let target = if self.start == self.end {
            self.start.saturating_sub(1)
        } else {
            self.start
        };
        self.set_selection(target, target);
    }

    /// Moves the caret one character right, collapsing any selection to its end.
    pub fn move_caret_right(&mut self) {
        let target = if self.start == self.end {
            self.end + 1
        } else {
            self.end
        };
        self.set_selection(target, target);
    }

    /// Collapses the caret to the start of the text.
    pub fn caret_home(&mut self) {
        self.set_selection(0, 0);
    }

    /// Collapses the caret to the end of the text.
    pub fn caret_end(&mut self) {
        let len = self.chars_len();
        self.set_selection(len, len);
    }

    /// Replaces the selection with `text`.
    ///
    /// A collapsed selection is a plain insert at the caret. When focused the
    /// caret lands right after the inserted text.
    pub fn insert_at_cursor(&mut self, text: &str) {
        let start = self.start;
        self.replace_chars(self.start..self.end, text);
        self.place_caret(start + text.chars().count());
    }

    /// Deletes the character before a collapsed caret, or the selected range.
    ///
    /// # Returns
    /// Number of characters removed.
    pub fn backspace(&mut self) -> usize {
        let (range, caret) = if self.start == self.end && self.start > 0 {
            (self.start - 1..self.start, self.start - 1)
        } else {
            (self.start..self.end, self.start)
        };
        let removed = range.len();
        self.replace_chars(range, "");
        self.place_caret(caret);
        removed
    }

    /// Inserts a unary minus at the cursor.
    ///
    /// This never looks for the nearest number to wrap; an empty buffer simply
    /// receives a leading `-`.
    pub fn negate(&mut self) {
        self.insert_at_cursor("-");
    }

    /// Replaces the whole text and collapses the caret to its end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret_end();
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.start = 0;
        self.end = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    fn replace_chars(&mut self, range: Range<usize>, replacement: &str) {
        let byte_start = self.byte_offset(range.start);
        let byte_end = self.byte_offset(range.end);
        self.text.replace_range(byte_start..byte_end, replacement);
    }

    fn place_caret(&mut self, caret: usize) {
        if self.has_focus {
            self.set_selection(caret, caret);
        } else {
            self.caret_end();
        }
    }
}

impl fmt::Display for ExpressionBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text.as_str())
    }
}
