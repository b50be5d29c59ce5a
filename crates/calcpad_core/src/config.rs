//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_ACCENT, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};
use std::env;
use std::path::PathBuf;

/// Runtime configuration for a calculator session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the evaluation service.
    pub server_url: String,
    /// Directory holding the persisted session keys.
    pub data_dir: PathBuf,
    /// Transport timeout applied to each evaluation request.
    pub timeout_secs: u64,
    /// Accent applied when none has been persisted yet.
    pub default_accent: String,
    /// Keep session state in memory only.
    pub ephemeral: bool,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    if let (Ok(drive), Ok(path)) = (env::var("HOMEDRIVE"), env::var("HOMEPATH")) {
        if !drive.trim().is_empty() && !path.trim().is_empty() {
            return Some(PathBuf::from(format!("{}{}", drive, path)));
        }
    }

    std::env::current_dir().ok()
}

/// Default data directory (`~/.cache/calcpad`).
pub fn default_data_dir() -> PathBuf {
    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".cache").join("calcpad")
}

/// Resolve a user-supplied data directory, expanding a leading `~/`.
pub fn resolve_data_dir(raw: &str) -> PathBuf {
    PathBuf::from(expand_tilde(raw.trim().to_string()))
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn non_blank_env(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            server_url: non_blank_env("CALCPAD_SERVER")
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            data_dir: non_blank_env("CALCPAD_DATA_DIR")
                .map(|raw| resolve_data_dir(&raw))
                .unwrap_or_else(default_data_dir),
            timeout_secs: env::var("CALCPAD_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            default_accent: non_blank_env("CALCPAD_DEFAULT_ACCENT")
                .unwrap_or_else(|| DEFAULT_ACCENT.to_string()),
            ephemeral: env_flag_enabled("CALCPAD_EPHEMERAL"),
        }
    }
}
