//! Theme and accent preferences.

use crate::constants::{ACCENT_KEY, THEME_KEY};
use crate::store::DurableStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme of the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted presentation preferences. Each field has its own store key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    /// Colour string applied verbatim; never validated.
    pub accent: String,
}

impl Preferences {
    /// Load persisted preferences, using `default_accent` when none is stored.
    pub fn load(store: &DurableStore, default_accent: &str) -> Self {
        Self {
            theme: store.get(THEME_KEY, Theme::default()),
            accent: store.get(ACCENT_KEY, default_accent.to_string()),
        }
    }

    /// Flip between dark and light and persist the theme.
    pub fn toggle_theme(&mut self, store: &DurableStore) -> Theme {
        self.theme = self.theme.toggled();
        store.set(THEME_KEY, &self.theme);
        self.theme
    }

    /// Apply and persist an accent colour as given.
    pub fn set_accent(&mut self, store: &DurableStore, accent: &str) {
        self.accent = accent.to_string();
        store.set(ACCENT_KEY, &self.accent);
    }

    /// Write both preferences to the store.
    pub fn persist(&self, store: &DurableStore) {
        store.set(THEME_KEY, &self.theme);
        store.set(ACCENT_KEY, &self.accent);
    }
}
