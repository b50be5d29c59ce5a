//! Stub evaluation service for integration tests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::oneshot;

/// Stub service answering `POST /api/calc` from a fixed script.
pub struct StubServer {
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
    addr: SocketAddr,
}

async fn calc(Json(body): Json<Value>) -> Response {
    let expression = body
        .get("expression")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    match expression.as_str() {
        "2+2" => Json(json!({ "ok": true, "result": 4 })).into_response(),
        "0.1+0.2" => Json(json!({ "ok": true, "result": 0.30000000000000004 })).into_response(),
        "3*500000000" => Json(json!({ "ok": true, "result": "1500000000" })).into_response(),
        "1/0" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "error": "Division by zero" })),
        )
            .into_response(),
        "(" => (StatusCode::BAD_REQUEST, Json(json!({ "ok": false }))).into_response(),
        "html" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_millis(400)).await;
            Json(json!({ "ok": true, "result": 1 })).into_response()
        }
        "fast" => Json(json!({ "ok": true, "result": 2 })).into_response(),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "error": format!("Cannot evaluate {}", expression) })),
        )
            .into_response(),
    }
}

impl StubServer {
    /// Start the stub on an auto-assigned loopback port.
    pub fn start() -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread = thread::Builder::new()
            .name("calcpad-stub-server".into())
            .spawn(move || {
                let rt = tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(2)
                    .enable_all()
                    .build()
                    .expect("stub runtime");
                rt.block_on(async move {
                    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                        .await
                        .expect("bind stub server");
                    ready_tx
                        .send(listener.local_addr().expect("stub addr"))
                        .expect("report stub addr");
                    let app = Router::new().route("/api/calc", post(calc));
                    axum::serve(listener, app)
                        .with_graceful_shutdown(async {
                            let _ = shutdown_rx.await;
                        })
                        .await
                        .expect("serve stub");
                });
            })
            .expect("spawn stub server");

        let addr = ready_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server ready");
        Self {
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
            addr,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}
