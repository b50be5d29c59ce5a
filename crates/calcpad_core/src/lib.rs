//! Core session library for calcpad (buffer, history, memory, preferences, storage).

/// Expression buffer with cursor-aware editing.
pub mod buffer;
/// Clipboard seam for copying results.
pub mod clipboard;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants (store keys, messages, defaults).
pub mod constants;
/// Error types for storage and serialization.
pub mod error;
/// Evaluation service protocol types.
pub mod eval;
/// Result and number formatting.
pub mod format;
/// Bounded result history.
pub mod history;
/// Memory register.
pub mod memory;
/// Theme and accent preferences.
pub mod prefs;
/// Session state owner.
pub mod session;
/// Durable key/value store.
pub mod store;

pub use config::Config;
pub use constants::{DEFAULT_SERVER_URL, HISTORY_CAPACITY};
pub use error::AppError;
pub use eval::{EvalOutcome, EvalRequest, EvalResponse, EvalTicket, Evaluator, TransportError};
pub use session::{CalcSession, Display, EvalState, Submission, Tone};
pub use store::{DurableStore, FileStore, KeyValueStore, MemoryStore};
