//! Terminal clipboard using the OSC 52 escape sequence.

use base64::{engine::general_purpose, Engine as _};
use calcpad_core::clipboard::Clipboard;
use std::io::{self, Write};

/// Writes copied text to the terminal as an OSC 52 "set clipboard" request.
///
/// Terminals that do not support OSC 52 ignore the sequence.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// The OSC 52 sequence that places `text` on the system clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!(
        "\x1b]52;c;{}\x07",
        general_purpose::STANDARD.encode(text.as_bytes())
    )
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()
    }
}
