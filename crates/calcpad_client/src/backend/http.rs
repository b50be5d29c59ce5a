//! Blocking HTTP evaluator for the remote evaluation service.

use crate::error::ClientError;
use calcpad_core::constants::EVAL_ENDPOINT_SEGMENTS;
use calcpad_core::eval::{EvalOutcome, EvalRequest, EvalResponse};
use calcpad_core::{Evaluator, TransportError};
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Evaluator that POSTs `{ "expression": ... }` to `<server>/api/calc`.
///
/// The HTTP status is not consulted; the body alone decides the outcome.
#[derive(Debug, Clone)]
pub struct HttpEvaluator {
    client: Client,
    endpoint: Url,
}

impl HttpEvaluator {
    /// Build an evaluator for `server` with a per-request `timeout`.
    ///
    /// # Errors
    /// Returns an error when the server URL is unusable or the HTTP client
    /// cannot be built.
    pub fn new(server: &str, timeout: Duration) -> Result<Self, ClientError> {
        let endpoint = eval_url(server)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint receiving evaluation requests.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Evaluator for HttpEvaluator {
    fn evaluate(&self, request: &EvalRequest) -> EvalOutcome {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        debug!(status = status.as_u16(), "evaluation response received");
        EvalResponse::from_json(&body)
    }
}

/// Evaluation endpoint below `server`, keeping any base path.
///
/// # Errors
/// Returns [`ClientError::InvalidServerUrl`] when `server` is not an absolute
/// URL that can carry path segments.
pub fn eval_url(server: &str) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidServerUrl {
        url: server.to_string(),
        reason,
    };
    let mut url = Url::parse(server).map_err(|err| invalid(err.to_string()))?;
    let mut path = url
        .path_segments_mut()
        .map_err(|_| invalid("cannot be used as an API base".to_string()))?;
    path.pop_if_empty();
    for segment in EVAL_ENDPOINT_SEGMENTS {
        path.push(segment);
    }
    drop(path);
    Ok(url)
}

/// Canonicalize a server URL: `http://localhost` becomes `http://127.0.0.1`
/// and trailing slashes are dropped. Unparseable input is returned unchanged.
pub fn normalize_server(server: &str) -> String {
    let trimmed = server.trim();
    if let Ok(mut url) = Url::parse(trimmed) {
        let should_normalize_localhost =
            url.scheme().eq_ignore_ascii_case("http") && url.host_str() == Some("localhost");
        if should_normalize_localhost && url.set_host(Some("127.0.0.1")).is_err() {
            return trimmed.to_string();
        }
        let mut normalized = url.to_string();
        while normalized.ends_with('/') {
            normalized.pop();
        }
        return normalized;
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_matrix() {
        let cases = [
            ("http://localhost:5000", "http://127.0.0.1:5000"),
            ("https://localhost:5000", "https://localhost:5000"),
            ("http://127.0.0.1:5000/", "http://127.0.0.1:5000"),
            ("  http://calc.internal/base/ ", "http://calc.internal/base"),
            ("not a url", "not a url"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_server(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn eval_url_appends_endpoint_to_base_path() {
        let url = eval_url("http://127.0.0.1:5000").expect("eval url");
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/calc");

        let url = eval_url("http://127.0.0.1:5000/calc-service/").expect("eval url");
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/calc-service/api/calc");
    }

    #[test]
    fn eval_url_rejects_unusable_servers() {
        assert!(matches!(
            eval_url("127.0.0.1:5000/x"),
            Err(ClientError::InvalidServerUrl { .. })
        ));
        assert!(matches!(
            eval_url("mailto:calc@example.com"),
            Err(ClientError::InvalidServerUrl { .. })
        ));
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let evaluator = HttpEvaluator::new(&format!("http://{}", addr), Duration::from_secs(2))
            .expect("evaluator");
        let outcome = evaluator.evaluate(&EvalRequest {
            expression: "2+2".to_string(),
        });
        assert!(matches!(outcome, Err(TransportError::Request(_))));
    }
}
