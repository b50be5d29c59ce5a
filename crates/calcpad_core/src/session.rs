//! Session state owner: buffer, display, history, memory, and preferences.
//!
//! A [`CalcSession`] is built from a [`DurableStore`] and owned by the front
//! end. Every user-facing control is one method. Evaluation is split in two:
//! [`CalcSession::submit`] issues a ticket and [`CalcSession::apply_outcome`]
//! settles it, so the network call can happen elsewhere.

use crate::buffer::ExpressionBuffer;
use crate::clipboard::Clipboard;
use crate::constants::{
    COPY_FEEDBACK_MS, EMPTY_EXPRESSION_MESSAGE, ERROR_PULSE_MS, GENERIC_ERROR_MESSAGE,
    NETWORK_ERROR_MESSAGE,
};
use crate::eval::{EvalOutcome, EvalResponse, EvalTicket, Evaluator};
use crate::history::{HistoryEntry, HistoryLog};
use crate::memory::MemoryRegister;
use crate::prefs::{Preferences, Theme};
use crate::store::DurableStore;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Whether the display line reports a result or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Error,
}

/// The result line shown under the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub text: String,
    pub tone: Tone,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            text: String::new(),
            tone: Tone::Ok,
        }
    }
}

/// Evaluation lifecycle as seen by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalState {
    Idle,
    Pending,
    Settled(Tone),
}

/// What a submit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The buffer was blank; the display already shows why.
    Rejected,
    /// Send this ticket to the evaluator and settle it with `apply_outcome`.
    Pending(EvalTicket),
}

/// All mutable state of one calculator session.
pub struct CalcSession {
    store: DurableStore,
    buffer: ExpressionBuffer,
    display: Display,
    history: HistoryLog,
    memory: MemoryRegister,
    prefs: Preferences,
    eval_state: EvalState,
    next_request_id: u64,
    in_flight: usize,
    error_pulse_at: Option<Instant>,
    copied_at: Option<Instant>,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn strip_result_prefix(text: &str) -> &str {
    match text.strip_prefix('=') {
        Some(rest) => rest.trim_start(),
        None => text,
    }
}

impl CalcSession {
    /// Build a session from persisted state.
    ///
    /// Missing or corrupt entries fall back to an empty history, zero memory,
    /// the dark theme, and `default_accent`.
    pub fn load(store: DurableStore, default_accent: &str) -> Self {
        let history = HistoryLog::load(&store);
        let memory = MemoryRegister::load(&store);
        let prefs = Preferences::load(&store, default_accent);
        Self {
            store,
            buffer: ExpressionBuffer::new(),
            display: Display::default(),
            history,
            memory,
            prefs,
            eval_state: EvalState::Idle,
            next_request_id: 0,
            in_flight: 0,
            error_pulse_at: None,
            copied_at: None,
        }
    }

    /// Write every persisted entity back to the store.
    pub fn flush(&self) {
        self.history.persist(&self.store);
        self.memory.persist(&self.store);
        self.prefs.persist(&self.store);
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn memory(&self) -> &MemoryRegister {
        &self.memory
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn eval_state(&self) -> EvalState {
        self.eval_state
    }

    /// Number of submitted requests that have not settled yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether the error pulse started by the last failure is still running.
    pub fn error_pulse_active(&self, now: Instant) -> bool {
        self.error_pulse_at.is_some_and(|started| {
            now.saturating_duration_since(started) < Duration::from_millis(ERROR_PULSE_MS)
        })
    }

    /// Whether the "copied" marker from the last copy is still showing.
    pub fn copy_feedback_active(&self, now: Instant) -> bool {
        self.copied_at.is_some_and(|copied| {
            now.saturating_duration_since(copied) < Duration::from_millis(COPY_FEEDBACK_MS)
        })
    }

    /// Earliest expiry of a transient marker still showing at `now`.
    ///
    /// Front ends use it to schedule the redraw that removes the marker.
    pub fn feedback_expires_at(&self, now: Instant) -> Option<Instant> {
        let pulse_end = self
            .error_pulse_at
            .map(|started| started + Duration::from_millis(ERROR_PULSE_MS));
        let copied_end = self
            .copied_at
            .map(|copied| copied + Duration::from_millis(COPY_FEEDBACK_MS));
        [pulse_end, copied_end]
            .into_iter()
            .flatten()
            .filter(|deadline| *deadline > now)
            .min()
    }

    fn show(&mut self, text: impl Into<String>, tone: Tone) {
        self.display = Display {
            text: text.into(),
            tone,
        };
    }

    fn show_error(&mut self, text: impl Into<String>) {
        self.show(text, Tone::Error);
        self.error_pulse_at = Some(Instant::now());
    }

    // Edit buffer controls.

    /// Tell the session whether the expression field holds input focus.
    pub fn set_input_focus(&mut self, focused: bool) {
        self.buffer.set_focus(focused);
    }

    /// Select a char range in the expression.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.buffer.set_selection(start, end);
    }

    pub fn caret_left(&mut self) {
        self.buffer.move_caret_left();
    }

    pub fn caret_right(&mut self) {
        self.buffer.move_caret_right();
    }

    pub fn caret_home(&mut self) {
        self.buffer.caret_home();
    }

    pub fn caret_end(&mut self) {
        self.buffer.caret_end();
    }

    pub fn insert_text(&mut self, text: &str) {
        self.buffer.insert_at_cursor(text);
    }

    pub fn backspace(&mut self) {
        self.buffer.backspace();
    }

    pub fn negate(&mut self) {
        self.buffer.negate();
    }

    /// Empty the expression and the display; history and memory stay.
    pub fn clear_entry(&mut self) {
        self.buffer.clear();
        self.show("", Tone::Ok);
    }

    /// Empty the expression, the display, and the history log.
    pub fn all_clear(&mut self) {
        self.buffer.clear();
        self.show("", Tone::Ok);
        self.history.clear(&self.store);
    }

    // Memory register controls.

    pub fn memory_clear(&mut self) {
        self.memory.clear(&self.store);
    }

    /// Insert the memory value at the cursor.
    pub fn memory_recall(&mut self) {
        let text = self.memory.display();
        self.buffer.insert_at_cursor(&text);
        self.memory.persist(&self.store);
    }

    pub fn memory_add(&mut self) {
        self.memory.add(&self.store, &self.display.text);
    }

    pub fn memory_subtract(&mut self) {
        self.memory.subtract(&self.store, &self.display.text);
    }

    // History controls.

    /// Load history entry `index` into the buffer and display without
    /// re-evaluating it.
    ///
    /// # Returns
    /// `false` when there is no entry at `index`.
    pub fn select_history(&mut self, index: usize) -> bool {
        let Some(entry) = self.history.get(index).cloned() else {
            return false;
        };
        self.buffer.set_text(&entry.expression);
        self.show(format!("= {}", entry.result), Tone::Ok);
        true
    }

    pub fn clear_history(&mut self) {
        self.history.clear(&self.store);
    }

    // Preferences.

    pub fn toggle_theme(&mut self) -> Theme {
        self.prefs.toggle_theme(&self.store)
    }

    pub fn set_accent(&mut self, accent: &str) {
        self.prefs.set_accent(&self.store, accent);
    }

    // Copy.

    /// Copy the displayed result (without its `= ` prefix) to `clipboard`.
    ///
    /// # Returns
    /// `true` when something was copied. Clipboard failures are ignored.
    pub fn copy_result(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let text = strip_result_prefix(&self.display.text).trim().to_string();
        if text.is_empty() {
            return false;
        }
        match clipboard.write_text(&text) {
            Ok(()) => {
                self.copied_at = Some(Instant::now());
                true
            }
            Err(err) => {
                debug!("copy to clipboard failed: {}", err);
                false
            }
        }
    }

    // Evaluation.

    /// Submit the current expression.
    ///
    /// A blank buffer is rejected locally with "Enter an expression".
    pub fn submit(&mut self) -> Submission {
        let expression = self.buffer.as_str().trim().to_string();
        if expression.is_empty() {
            self.show(EMPTY_EXPRESSION_MESSAGE, Tone::Error);
            self.eval_state = EvalState::Settled(Tone::Error);
            return Submission::Rejected;
        }
        self.next_request_id += 1;
        self.in_flight += 1;
        self.eval_state = EvalState::Pending;
        Submission::Pending(EvalTicket {
            id: self.next_request_id,
            expression,
        })
    }

    /// Settle a submitted ticket.
    ///
    /// Responses are applied in arrival order; a later response overwrites
    /// the display of an earlier one. The buffer is never touched. The state
    /// stays `Pending` until no request is left in flight.
    pub fn apply_outcome(&mut self, ticket: &EvalTicket, outcome: EvalOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(EvalResponse::Success { result }) => {
                let formatted = result.to_display();
                info!(request = ticket.id, "evaluation settled ok");
                self.show(format!("= {}", formatted), Tone::Ok);
                self.history.record(
                    &self.store,
                    HistoryEntry::new(ticket.expression.clone(), formatted, now_millis()),
                );
                self.eval_state = EvalState::Settled(Tone::Ok);
            }
            Ok(EvalResponse::Failure { error }) => {
                info!(request = ticket.id, "evaluation rejected: {}", error);
                let message = if error.trim().is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    error
                };
                self.show_error(message);
                self.eval_state = EvalState::Settled(Tone::Error);
            }
            Err(err) => {
                info!(request = ticket.id, "evaluation transport failure: {}", err);
                self.show_error(NETWORK_ERROR_MESSAGE);
                self.eval_state = EvalState::Settled(Tone::Error);
            }
        }
        if self.in_flight > 0 {
            self.eval_state = EvalState::Pending;
        }
    }

    /// Submit and settle synchronously against `evaluator`.
    pub fn evaluate_with(&mut self, evaluator: &dyn Evaluator) {
        if let Submission::Pending(ticket) = self.submit() {
            let outcome = evaluator.evaluate(&ticket.request());
            self.apply_outcome(&ticket, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::constants::{HISTORY_CAPACITY, HISTORY_KEY, MEMORY_KEY, THEME_KEY};
    use crate::eval::{EvalRequest, ResultValue, TransportError};
    use crate::store::MemoryStore;
    use std::io;
    use std::sync::Mutex;

    struct ScriptedEvaluator {
        outcome: EvalOutcome,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedEvaluator {
        fn new(outcome: EvalOutcome) -> Self {
            Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().expect("requests").clone()
        }
    }

    impl Evaluator for ScriptedEvaluator {
        fn evaluate(&self, request: &EvalRequest) -> EvalOutcome {
            self.requests
                .lock()
                .expect("requests")
                .push(request.expression.clone());
            self.outcome.clone()
        }
    }

    struct BrokenClipboard {
        attempts: usize,
    }

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> io::Result<()> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn success(value: f64) -> EvalOutcome {
        Ok(EvalResponse::Success {
            result: ResultValue::Number(value),
        })
    }

    fn session_with(backend: &MemoryStore) -> CalcSession {
        CalcSession::load(DurableStore::new(backend.clone()), "#7c5cff")
    }

    fn typed(session: &mut CalcSession, text: &str) {
        session.set_input_focus(true);
        session.insert_text(text);
    }

    #[test]
    fn successful_evaluation_updates_display_and_history() {
        let backend = MemoryStore::new();
        let mut session = session_with(&backend);
        typed(&mut session, "2+2");
        let evaluator = ScriptedEvaluator::new(success(4.0));

        session.evaluate_with(&evaluator);

        assert_eq!(session.display().text, "= 4");
        assert_eq!(session.display().tone, Tone::Ok);
        let first = session.history().get(0).expect("history entry");
        assert_eq!(first.expression, "2+2");
        assert_eq!(first.result, "4");
        assert!(first.timestamp > 0);
        assert_eq!(session.buffer().as_str(), "2+2");
        assert_eq!(session.eval_state(), EvalState::Settled(Tone::Ok));
        assert!(backend.raw(HISTORY_KEY).is_some());
    }

    #[test]
    fn service_error_keeps_buffer_and_history() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "1/0");
        let evaluator = ScriptedEvaluator::new(Ok(EvalResponse::Failure {
            error: "Division by zero".to_string(),
        }));

        session.evaluate_with(&evaluator);

        assert_eq!(session.display().text, "Division by zero");
        assert_eq!(session.display().tone, Tone::Error);
        assert_eq!(session.buffer().as_str(), "1/0");
        assert!(session.history().is_empty());
        assert!(session.error_pulse_active(Instant::now()));
        assert!(!session.error_pulse_active(Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn blank_service_error_uses_generic_message() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "2+");
        let evaluator = ScriptedEvaluator::new(Ok(EvalResponse::Failure {
            error: "  ".to_string(),
        }));
        session.evaluate_with(&evaluator);
        assert_eq!(session.display().text, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn transport_error_shows_network_error() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "3*3");
        let evaluator = ScriptedEvaluator::new(Err(TransportError::Request(
            "connection refused".to_string(),
        )));

        session.evaluate_with(&evaluator);

        assert_eq!(session.display().text, NETWORK_ERROR_MESSAGE);
        assert_eq!(session.buffer().as_str(), "3*3");
        assert!(session.history().is_empty());
        assert!(session.error_pulse_active(Instant::now()));
    }

    #[test]
    fn blank_submit_never_calls_the_evaluator() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "   ");
        let evaluator = ScriptedEvaluator::new(success(1.0));

        session.evaluate_with(&evaluator);

        assert!(evaluator.requests().is_empty());
        assert_eq!(session.display().text, EMPTY_EXPRESSION_MESSAGE);
        assert_eq!(session.eval_state(), EvalState::Settled(Tone::Error));
        assert!(!session.error_pulse_active(Instant::now()));
        assert_eq!(session.in_flight(), 0);
    }

    #[test]
    fn submit_trims_expression_in_ticket() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "  7-2 ");
        let evaluator = ScriptedEvaluator::new(success(5.0));
        session.evaluate_with(&evaluator);
        assert_eq!(evaluator.requests(), vec!["7-2".to_string()]);
        assert_eq!(session.history().get(0).map(|e| e.expression.as_str()), Some("7-2"));
    }

    #[test]
    fn last_arriving_response_wins() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "1+1");
        let Submission::Pending(first) = session.submit() else {
            panic!("expected pending submission");
        };
        typed(&mut session, "0");
        let Submission::Pending(second) = session.submit() else {
            panic!("expected pending submission");
        };
        assert!(second.id > first.id);
        assert_eq!(session.in_flight(), 2);
        assert_eq!(session.eval_state(), EvalState::Pending);

        session.apply_outcome(&second, success(11.0));
        session.apply_outcome(&first, success(2.0));

        assert_eq!(session.display().text, "= 2");
        assert_eq!(session.in_flight(), 0);
        let recorded: Vec<&str> = session
            .history()
            .entries()
            .iter()
            .map(|entry| entry.expression.as_str())
            .collect();
        assert_eq!(recorded, vec!["1+1", "1+10"]);
    }

    #[test]
    fn all_clear_empties_buffer_display_and_history() {
        let backend = MemoryStore::new();
        let mut session = session_with(&backend);
        typed(&mut session, "2+2");
        session.evaluate_with(&ScriptedEvaluator::new(success(4.0)));
        session.memory_add();

        session.all_clear();

        assert!(session.buffer().is_empty());
        assert!(session.display().text.is_empty());
        assert!(session.history().is_empty());
        assert_eq!(backend.raw(HISTORY_KEY).as_deref(), Some("[]"));
        assert_eq!(session.memory().value(), 4.0);
    }

    #[test]
    fn clear_entry_keeps_history_and_memory() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "6");
        session.evaluate_with(&ScriptedEvaluator::new(success(6.0)));
        session.memory_add();

        session.clear_entry();

        assert!(session.buffer().is_empty());
        assert!(session.display().text.is_empty());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.memory().value(), 6.0);
    }

    #[test]
    fn memory_accumulates_displayed_results() {
        let backend = MemoryStore::new();
        let mut session = session_with(&backend);
        typed(&mut session, "5");
        session.evaluate_with(&ScriptedEvaluator::new(success(5.0)));
        session.memory_add();
        session.clear_entry();
        typed(&mut session, "2");
        session.evaluate_with(&ScriptedEvaluator::new(success(2.0)));
        session.memory_subtract();

        assert_eq!(session.memory().value(), 3.0);
        assert_eq!(backend.raw(MEMORY_KEY).as_deref(), Some("3.0"));

        session.clear_entry();
        session.memory_recall();
        assert_eq!(session.buffer().as_str(), "3");

        session.memory_clear();
        assert_eq!(session.memory().value(), 0.0);
    }

    #[test]
    fn memory_uses_rounded_display_value() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "1/3");
        session.evaluate_with(&ScriptedEvaluator::new(success(1.0 / 3.0)));
        session.memory_add();
        session.memory_add();
        session.memory_add();
        assert_eq!(session.memory().value(), 0.333333333333 * 3.0);
    }

    #[test]
    fn memory_add_after_error_adds_zero() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "1/0");
        session.evaluate_with(&ScriptedEvaluator::new(Ok(EvalResponse::Failure {
            error: "Division by zero".to_string(),
        })));
        session.memory_add();
        assert_eq!(session.memory().value(), 0.0);
    }

    #[test]
    fn select_history_restores_expression_without_evaluating() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "9*9");
        session.evaluate_with(&ScriptedEvaluator::new(success(81.0)));
        session.clear_entry();

        assert!(session.select_history(0));
        assert_eq!(session.buffer().as_str(), "9*9");
        assert_eq!(session.display().text, "= 81");
        assert_eq!(session.history().len(), 1);
        assert!(!session.select_history(5));
    }

    #[test]
    fn history_is_capped_through_the_session() {
        let mut session = session_with(&MemoryStore::new());
        for n in 0..=HISTORY_CAPACITY {
            session.clear_entry();
            typed(&mut session, &n.to_string());
            session.evaluate_with(&ScriptedEvaluator::new(success(n as f64)));
        }
        assert_eq!(session.history().len(), HISTORY_CAPACITY);
        assert_eq!(
            session.history().get(0).map(|e| e.result.as_str()),
            Some("30")
        );
        assert_eq!(
            session
                .history()
                .get(HISTORY_CAPACITY - 1)
                .map(|e| e.result.as_str()),
            Some("1")
        );
    }

    #[test]
    fn copy_result_strips_prefix_and_ignores_failures() {
        let mut session = session_with(&MemoryStore::new());
        let mut clipboard = MemoryClipboard::new();
        assert!(!session.copy_result(&mut clipboard));

        typed(&mut session, "2+2");
        session.evaluate_with(&ScriptedEvaluator::new(success(4.0)));
        assert!(session.copy_result(&mut clipboard));
        assert_eq!(clipboard.contents(), Some("4"));
        assert!(session.copy_feedback_active(Instant::now()));

        let mut broken = BrokenClipboard { attempts: 0 };
        assert!(!session.copy_result(&mut broken));
        assert_eq!(broken.attempts, 1);
        assert_eq!(session.display().text, "= 4");
    }

    #[test]
    fn state_stays_pending_until_every_request_settles() {
        let mut session = session_with(&MemoryStore::new());
        typed(&mut session, "1+1");
        let Submission::Pending(first) = session.submit() else {
            panic!("expected first ticket");
        };
        let Submission::Pending(second) = session.submit() else {
            panic!("expected second ticket");
        };
        assert_eq!(session.in_flight(), 2);

        session.apply_outcome(&second, success(2.0));
        assert_eq!(session.display().text, "= 2");
        assert_eq!(session.in_flight(), 1);
        assert_eq!(session.eval_state(), EvalState::Pending);

        session.apply_outcome(
            &first,
            Err(TransportError::Request("timed out".to_string())),
        );
        assert_eq!(session.in_flight(), 0);
        assert_eq!(session.display().text, "Network error");
        assert_eq!(session.eval_state(), EvalState::Settled(Tone::Error));
    }

    #[test]
    fn transient_markers_expire() {
        let mut session = session_with(&MemoryStore::new());
        let start = Instant::now();
        assert_eq!(session.feedback_expires_at(start), None);

        typed(&mut session, "1/0");
        session.evaluate_with(&ScriptedEvaluator::new(Err(TransportError::Request(
            "refused".to_string(),
        ))));
        let now = Instant::now();
        assert!(session.error_pulse_active(now));
        let deadline = session.feedback_expires_at(now).expect("pulse deadline");
        assert!(deadline > now);
        assert!(deadline <= now + Duration::from_millis(ERROR_PULSE_MS));

        let later = now + Duration::from_millis(ERROR_PULSE_MS + 1);
        assert!(!session.error_pulse_active(later));
        assert_eq!(session.feedback_expires_at(later), None);
    }

    #[test]
    fn state_round_trips_through_the_store() {
        let backend = MemoryStore::new();
        let mut session = session_with(&backend);
        typed(&mut session, "2+2");
        session.evaluate_with(&ScriptedEvaluator::new(success(4.0)));
        session.memory_add();
        session.toggle_theme();
        session.set_accent("#ff8800");
        session.flush();

        let reloaded = session_with(&backend);
        assert_eq!(reloaded.history(), session.history());
        assert_eq!(reloaded.memory(), session.memory());
        assert_eq!(reloaded.preferences(), session.preferences());
        assert_eq!(reloaded.preferences().theme, Theme::Light);
    }

    #[test]
    fn corrupt_store_loads_defaults() {
        let backend = MemoryStore::new();
        backend.insert_raw(HISTORY_KEY, "{");
        backend.insert_raw(MEMORY_KEY, "[1]");
        backend.insert_raw(THEME_KEY, "42");
        let session = session_with(&backend);
        assert!(session.history().is_empty());
        assert_eq!(session.memory().value(), 0.0);
        assert_eq!(session.preferences().theme, Theme::Dark);
        assert_eq!(session.preferences().accent, "#7c5cff");
    }

    #[test]
    fn unavailable_store_never_blocks_actions() {
        let backend = MemoryStore::new();
        backend.set_unavailable(true);
        let mut session = session_with(&backend);
        typed(&mut session, "2+3");
        session.evaluate_with(&ScriptedEvaluator::new(success(5.0)));
        session.memory_add();
        session.toggle_theme();

        assert_eq!(session.display().text, "= 5");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.memory().value(), 5.0);
        assert_eq!(session.preferences().theme, Theme::Light);
    }
}
