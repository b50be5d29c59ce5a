//! Background worker that runs evaluation requests off the interactive thread.

use crate::backend::{BackendCmd, BackendEvent};
use calcpad_core::{EvalTicket, Evaluator, TransportError};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<BackendCmd>,
    pub evt_rx: Receiver<BackendEvent>,
}

impl BackendHandle {
    /// Build a handle from caller-owned channels so tests can script events.
    #[cfg(test)]
    pub(crate) fn from_test_channels(
        cmd_tx: Sender<BackendCmd>,
        evt_rx: Receiver<BackendEvent>,
    ) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

/// Spawn the backend worker thread.
///
/// Each evaluation runs on its own short-lived thread so a slow request never
/// holds back a later one; events arrive in completion order and the session
/// applies them as they come.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(evaluator: Arc<dyn Evaluator>) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("calcpad-backend".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                match cmd {
                    BackendCmd::Evaluate { ticket } => {
                        dispatch_evaluation(&evaluator, &evt_tx, ticket);
                    }
                }
            }
            debug!("backend command channel closed");
        })
        .expect("spawn backend worker");

    BackendHandle { cmd_tx, evt_rx }
}

fn dispatch_evaluation(
    evaluator: &Arc<dyn Evaluator>,
    evt_tx: &Sender<BackendEvent>,
    ticket: EvalTicket,
) {
    let worker_evaluator = Arc::clone(evaluator);
    let worker_tx = evt_tx.clone();
    let worker_ticket = ticket.clone();
    let spawned = thread::Builder::new()
        .name(format!("calcpad-eval-{}", ticket.id))
        .spawn(move || {
            debug!(request = worker_ticket.id, "evaluating expression");
            let outcome = worker_evaluator.evaluate(&worker_ticket.request());
            let _ = worker_tx.send(BackendEvent::Settled {
                ticket: worker_ticket,
                outcome,
            });
        });
    if let Err(err) = spawned {
        error!("failed to spawn evaluation thread: {}", err);
        // The session still counts the ticket as in flight; settle it as a failure.
        let _ = evt_tx.send(BackendEvent::Settled {
            ticket,
            outcome: Err(TransportError::Request(err.to_string())),
        });
    }
}
