//! Interactive terminal front end.
//!
//! [`CalcApp`] owns the session and the backend handle. Every input line is
//! decoded into one control, applied on the calling thread, and answered with
//! a [`Reply`]. Evaluation results come back as [`BackendEvent`]s that the
//! event loop feeds to [`CalcApp::apply_event`].

mod command;
mod render;
mod style;

pub use command::{parse_command, Command, CommandError, HELP};
pub(crate) use render::render_history;

use crate::backend::{BackendCmd, BackendEvent, BackendHandle};
use calcpad_core::clipboard::Clipboard;
use calcpad_core::{CalcSession, Submission, TransportError};
use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// What the event loop should print after handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Redraw the status frame.
    Frame(String),
    /// Show a message, then the frame.
    Message { text: String, frame: String },
    Quit,
}

/// Terminal calculator bound to one session and one backend worker.
pub struct CalcApp {
    session: CalcSession,
    backend: BackendHandle,
    clipboard: Box<dyn Clipboard>,
    color: bool,
}

impl CalcApp {
    pub fn new(
        session: CalcSession,
        backend: BackendHandle,
        clipboard: Box<dyn Clipboard>,
        color: bool,
    ) -> Self {
        Self {
            session,
            backend,
            clipboard,
            color,
        }
    }

    pub fn session(&self) -> &CalcSession {
        &self.session
    }

    /// Receiver for settled evaluations; clone it into the event loop.
    pub fn events(&self) -> Receiver<BackendEvent> {
        self.backend.evt_rx.clone()
    }

    /// Current status frame.
    pub fn frame(&self) -> String {
        render::render_frame(&self.session, Instant::now(), self.color)
    }

    /// When the next transient marker disappears and the frame needs a redraw.
    pub fn redraw_at(&self) -> Option<Instant> {
        self.session.feedback_expires_at(Instant::now())
    }

    /// Decode and apply one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_command(line) {
            Ok(command) => self.handle_command(command),
            Err(err) => self.message(err.to_string()),
        }
    }

    /// Apply one decoded control.
    pub fn handle_command(&mut self, command: Command) -> Reply {
        debug!(?command, "handling command");
        match command {
            Command::Type(text) => {
                self.session.set_input_focus(true);
                let len = self.session.buffer().chars_len();
                self.session.set_selection(0, len);
                self.session.insert_text(&text);
                self.submit();
            }
            Command::Submit => self.submit(),
            Command::Insert(text) => {
                self.session.set_input_focus(true);
                self.session.insert_text(&text);
            }
            Command::Keypad(text) => {
                self.session.set_input_focus(false);
                self.session.insert_text(&text);
            }
            Command::Backspace => {
                self.session.set_input_focus(false);
                self.session.backspace();
            }
            Command::ClearEntry => self.session.clear_entry(),
            Command::AllClear => self.session.all_clear(),
            Command::Negate => {
                self.session.set_input_focus(false);
                self.session.negate();
            }
            Command::MemoryClear => self.session.memory_clear(),
            Command::MemoryRecall => {
                self.session.set_input_focus(false);
                self.session.memory_recall();
            }
            Command::MemoryAdd => self.session.memory_add(),
            Command::MemorySubtract => self.session.memory_subtract(),
            Command::ShowHistory => {
                return self.message(render_history(self.session.history()));
            }
            Command::UseHistory(number) => {
                let loaded = number
                    .checked_sub(1)
                    .is_some_and(|index| self.session.select_history(index));
                if !loaded {
                    return self.message(format!("No history entry {}", number));
                }
            }
            Command::ClearHistory => self.session.clear_history(),
            Command::ToggleTheme => {
                self.session.toggle_theme();
            }
            Command::SetAccent(accent) => self.session.set_accent(&accent),
            Command::Copy => {
                if !self.session.copy_result(self.clipboard.as_mut()) {
                    return self.message("Nothing copied".to_string());
                }
            }
            Command::CaretLeft => self.focused(CalcSession::caret_left),
            Command::CaretRight => self.focused(CalcSession::caret_right),
            Command::CaretHome => self.focused(CalcSession::caret_home),
            Command::CaretEnd => self.focused(CalcSession::caret_end),
            Command::Select(start, end) => {
                self.session.set_input_focus(true);
                self.session.set_selection(start, end);
            }
            Command::Help => return self.message(HELP.to_string()),
            Command::Quit => return Reply::Quit,
        }
        Reply::Frame(self.frame())
    }

    /// Settle a backend event and redraw.
    pub fn apply_event(&mut self, event: BackendEvent) -> Reply {
        match event {
            BackendEvent::Settled { ticket, outcome } => {
                self.session.apply_outcome(&ticket, outcome);
            }
        }
        Reply::Frame(self.frame())
    }

    /// Apply every event already waiting, without blocking.
    ///
    /// # Returns
    /// Number of events applied.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Persist the session before exit.
    /// Waits up to `timeout` for in-flight evaluations to settle, applying
    /// each response as it arrives. Returns how many were applied.
    pub fn settle_pending(&mut self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut applied = 0;
        while self.session.in_flight() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.backend.evt_rx.recv_timeout(remaining) {
                Ok(event) => {
                    self.apply_event(event);
                    applied += 1;
                }
                Err(err) => {
                    warn!(
                        "giving up on {} pending evaluation(s): {}",
                        self.session.in_flight(),
                        err
                    );
                    break;
                }
            }
        }
        applied
    }

    pub fn shutdown(self) {
        self.session.flush();
    }

    fn focused(&mut self, action: fn(&mut CalcSession)) {
        self.session.set_input_focus(true);
        action(&mut self.session);
    }

    fn message(&self, text: String) -> Reply {
        Reply::Message {
            text,
            frame: self.frame(),
        }
    }

    fn submit(&mut self) {
        let Submission::Pending(ticket) = self.session.submit() else {
            return;
        };
        if let Err(err) = self.backend.cmd_tx.send(BackendCmd::Evaluate {
            ticket: ticket.clone(),
        }) {
            warn!("backend worker unavailable: {}", err);
            self.session.apply_outcome(
                &ticket,
                Err(TransportError::Request("backend worker unavailable".to_string())),
            );
        }
    }
}
