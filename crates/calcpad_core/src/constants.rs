//! Shared constants used across calcpad crates.

/// Default evaluation service base URL.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Path segments of the evaluation endpoint below the server base URL.
pub const EVAL_ENDPOINT_SEGMENTS: [&str; 2] = ["api", "calc"];

/// Default transport timeout for evaluation requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Accent colour used until the user picks one.
pub const DEFAULT_ACCENT: &str = "#7c5cff";

/// Maximum number of entries kept in the history log.
pub const HISTORY_CAPACITY: usize = 30;

/// Store key for the history log.
pub const HISTORY_KEY: &str = "calc.history";
/// Store key for the memory register.
pub const MEMORY_KEY: &str = "calc.memory";
/// Store key for the selected theme.
pub const THEME_KEY: &str = "calc.theme";
/// Store key for the accent colour.
pub const ACCENT_KEY: &str = "calc.accent";

/// Message shown when submitting an empty expression.
pub const EMPTY_EXPRESSION_MESSAGE: &str = "Enter an expression";
/// Message shown when the evaluation request cannot complete.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
/// Message shown when the service rejects an expression without a reason.
pub const GENERIC_ERROR_MESSAGE: &str = "Error";

/// Duration of the error pulse started by a failed evaluation, in milliseconds.
pub const ERROR_PULSE_MS: u64 = 300;
/// Duration of the "copied" marker after a successful copy, in milliseconds.
pub const COPY_FEEDBACK_MS: u64 = 800;
