//! Clipboard seam for copying the current result.

use std::io;

/// Destination for copied text.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    /// Returns an error when the clipboard cannot be written; callers ignore it.
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard that keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
