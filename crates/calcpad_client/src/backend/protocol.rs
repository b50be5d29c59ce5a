//! Protocol types for the evaluation backend worker.

use calcpad_core::{EvalOutcome, EvalTicket};

/// Commands issued by the interactive thread for the backend worker.
#[derive(Debug)]
pub enum BackendCmd {
    /// Evaluate the ticket's expression against the service.
    Evaluate { ticket: EvalTicket },
}

/// Events produced by the backend worker and polled by the interactive thread.
#[derive(Debug)]
pub enum BackendEvent {
    /// A request finished, successfully or not.
    Settled {
        ticket: EvalTicket,
        outcome: EvalOutcome,
    },
}
