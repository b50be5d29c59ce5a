//! Evaluation backend: HTTP evaluator plus the worker that keeps requests off
//! the interactive thread.

mod http;
mod protocol;
mod worker;

pub use http::{eval_url, normalize_server, HttpEvaluator};
pub use protocol::{BackendCmd, BackendEvent};
pub use worker::{spawn_backend, BackendHandle};
