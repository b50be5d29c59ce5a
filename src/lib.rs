//! Root crate facade for calcpad.
//!
//! Re-exports the session core and the terminal client so embedders can depend
//! on a single crate.

pub use calcpad_client::{app, backend, cli, clipboard, open_store, run, ClientError};
pub use calcpad_core::{
    buffer, config, constants, error, eval, format, history, memory, prefs, session, store,
    AppError, CalcSession, Config, Display, DurableStore, EvalState, FileStore, MemoryStore,
    Submission, Tone,
};
