//! Theme palettes and ANSI styling for the terminal front end.

use calcpad_core::prefs::Theme;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Rgb(pub u8, pub u8, pub u8);

pub(super) const DARK_BG: Rgb = Rgb(0x0d, 0x11, 0x17);
pub(super) const DARK_TEXT: Rgb = Rgb(0xc9, 0xd1, 0xd9);
pub(super) const DARK_MUTED: Rgb = Rgb(0x6e, 0x76, 0x81);
pub(super) const LIGHT_BG: Rgb = Rgb(0xf6, 0xf8, 0xfa);
pub(super) const LIGHT_TEXT: Rgb = Rgb(0x1f, 0x23, 0x28);
pub(super) const LIGHT_MUTED: Rgb = Rgb(0x65, 0x6d, 0x76);
pub(super) const COLOR_ERROR: Rgb = Rgb(0xf8, 0x51, 0x49);

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
pub(super) struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
}

impl Palette {
    pub(super) fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: DARK_BG,
                text: DARK_TEXT,
                muted: DARK_MUTED,
            },
            Theme::Light => Self {
                background: LIGHT_BG,
                text: LIGHT_TEXT,
                muted: LIGHT_MUTED,
            },
        }
    }
}

/// Parse `#rgb` or `#rrggbb`. Other accent values (named colours, CSS
/// functions) are kept verbatim by the session but cannot be drawn here.
pub(super) fn parse_hex_color(value: &str) -> Option<Rgb> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => {
            let expand = |idx: usize| channel(idx..idx + 1).map(|value| value * 17);
            Some(Rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}

/// SGR attributes for one painted span.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub inverse: bool,
}

impl Style {
    fn sgr(&self) -> String {
        let mut codes: Vec<String> = Vec::new();
        if self.bold {
            codes.push("1".to_string());
        }
        if self.inverse {
            codes.push("7".to_string());
        }
        if let Some(Rgb(r, g, b)) = self.fg {
            codes.push(format!("38;2;{};{};{}", r, g, b));
        }
        if let Some(Rgb(r, g, b)) = self.bg {
            codes.push(format!("48;2;{};{};{}", r, g, b));
        }
        codes.join(";")
    }
}

/// Wraps `text` in escape sequences when colour output is enabled.
pub(super) fn paint(enabled: bool, style: Style, text: &str) -> String {
    let sgr = style.sgr();
    if !enabled || sgr.is_empty() {
        return text.to_string();
    }
    format!("\x1b[{}m{}\x1b[0m", sgr, text)
}
