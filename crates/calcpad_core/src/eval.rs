//! Evaluation service protocol and the evaluator seam.
//!
//! The service is opaque: it receives `{ "expression": ... }` and answers with
//! an envelope that is either `{ "ok": true, "result": ... }` or
//! `{ "ok": false, "error": ... }`. Anything else is a transport failure.

use crate::format::{format_number, format_numeric_text};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request payload sent to the evaluation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalRequest {
    pub expression: String,
}

/// Result value of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

impl ResultValue {
    /// Format the value for the display line and history.
    pub fn to_display(&self) -> String {
        match self {
            ResultValue::Number(value) => format_number(*value),
            ResultValue::Text(text) => format_numeric_text(text),
        }
    }
}

/// Decoded service envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResponse {
    Success { result: ResultValue },
    /// The service rejected the expression.
    Failure { error: String },
}

#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    result: Option<ResultValue>,
    #[serde(default)]
    error: Option<String>,
}

impl EvalResponse {
    /// Decode a response body.
    ///
    /// # Errors
    /// Returns [`TransportError::Malformed`] when the body is not a valid
    /// envelope, including a success envelope without a result.
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        let envelope: Envelope = serde_json::from_str(body)
            .map_err(|err| TransportError::Malformed(err.to_string()))?;
        if envelope.ok {
            let result = envelope.result.ok_or_else(|| {
                TransportError::Malformed("success envelope without a result".to_string())
            })?;
            return Ok(EvalResponse::Success { result });
        }
        Ok(EvalResponse::Failure {
            error: envelope.error.unwrap_or_default(),
        })
    }
}

/// The request could not complete or its answer could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Settled result of one evaluation attempt.
pub type EvalOutcome = Result<EvalResponse, TransportError>;

/// Something that can evaluate an expression, usually over the network.
pub trait Evaluator: Send + Sync {
    /// Evaluate `request`, blocking until the service answers.
    fn evaluate(&self, request: &EvalRequest) -> EvalOutcome;
}

/// Identifies one submitted evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTicket {
    pub id: u64,
    /// Trimmed expression as submitted.
    pub expression: String,
}

impl EvalTicket {
    /// Request payload for this ticket.
    pub fn request(&self) -> EvalRequest {
        EvalRequest {
            expression: self.expression.clone(),
        }
    }
}
