//! Text frames for the interactive session.

use super::style::{paint, parse_hex_color, Palette, Style, COLOR_ERROR};
use calcpad_core::history::HistoryLog;
use calcpad_core::{CalcSession, Tone};
use chrono::{Local, TimeZone};
use std::time::Instant;

const CARET: char = '|';

/// Expression text with the caret drawn as `|` and a selection as `[...]`.
pub(super) fn buffer_with_caret(text: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for (idx, ch) in text.chars().enumerate() {
        if idx == start {
            out.push(if start == end { CARET } else { '[' });
        }
        if idx == end && start != end {
            out.push(']');
        }
        out.push(ch);
    }
    let len = text.chars().count();
    if start == len {
        out.push(if start == end { CARET } else { '[' });
    }
    if end == len && start != end {
        out.push(']');
    }
    out
}

/// Render the status frame: header, expression line, display line.
pub(super) fn render_frame(session: &CalcSession, now: Instant, color: bool) -> String {
    let prefs = session.preferences();
    let palette = Palette::for_theme(prefs.theme);
    let accent = parse_hex_color(&prefs.accent);
    let base = Style {
        fg: Some(palette.text),
        bg: Some(palette.background),
        ..Style::default()
    };

    let mut header = format!("calcpad | {} | accent {}", prefs.theme, prefs.accent);
    let memory = session.memory();
    if memory.value() != 0.0 {
        header.push_str(&format!(" | M {}", memory.display()));
    }
    if session.in_flight() > 0 {
        header.push_str(&format!(" | {} pending", session.in_flight()));
    }
    if session.copy_feedback_active(now) {
        header.push_str(" | copied");
    }
    let header_style = Style {
        fg: Some(accent.unwrap_or(palette.muted)),
        bold: true,
        ..base
    };

    let selection = session.buffer().selection();
    let expression = format!(
        "> {}",
        buffer_with_caret(session.buffer().as_str(), selection.start, selection.end)
    );

    let display = session.display();
    let display_style = match display.tone {
        Tone::Ok => Style {
            fg: Some(accent.unwrap_or(palette.text)),
            bold: true,
            ..base
        },
        Tone::Error => Style {
            fg: Some(COLOR_ERROR),
            bold: true,
            inverse: session.error_pulse_active(now),
            ..base
        },
    };

    [
        paint(color, header_style, &header),
        paint(color, base, &expression),
        paint(color, display_style, &format!("  {}", display.text)),
    ]
    .join("\n")
}

fn clock_time(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|time| time.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

/// Numbered history listing, newest first, as `:use N` expects it.
pub(crate) fn render_history(history: &HistoryLog) -> String {
    if history.is_empty() {
        return "No history yet".to_string();
    }
    history
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "{:>3}. {}  {} = {}",
                idx + 1,
                clock_time(entry.timestamp),
                entry.expression,
                entry.result
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
