#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A local transaction service answering every build request with a fixed reply.
pub struct MockServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockServer {
    /// Serves on an ephemeral port from a dedicated thread, so both blocking
    /// and async tests can use it.
    pub fn spawn(status: StatusCode, body: &str) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.to_string(),
            captured: captured.clone(),
        };

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind mock server");
                tx.send(listener.local_addr().expect("Failed to read address"))
                    .expect("Failed to publish address");

                let app = Router::new()
                    .route("/v2/services/transactions/build", post(build_handler))
                    .route("/v2/services/health", get(health_handler))
                    .with_state(state);
                axum::serve(listener, app).await.expect("Mock server failed");
            });
        });

        let addr = rx.recv().expect("Mock server did not start");
        Self {
            base_url: format!("http://{addr}/v2/services"),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn build_handler(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.captured.lock().unwrap().push(CapturedRequest {
        headers,
        body: body.to_vec(),
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

async fn health_handler(State(state): State<MockState>, headers: HeaderMap) -> impl IntoResponse {
    state.captured.lock().unwrap().push(CapturedRequest {
        headers,
        body: Vec::new(),
    });
    (StatusCode::OK, "OK")
}

/// Base URL of a port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v2/services")
}

/// Serves one response whose body ends before its declared length.
pub fn spawn_truncated() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            let partial = "{\"hash\":\"f00d\",";
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 256\r\n\r\n{partial}"
            );
            stream.write_all(response.as_bytes()).ok();
            stream.flush().ok();
        }
    });

    format!("http://{addr}/v2/services")
}

fn read_request(stream: &mut std::net::TcpStream) {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        data.extend_from_slice(&chunk[..n]);

        let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&data[..end]).to_lowercase();
        let length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if data.len() >= end + 4 + length {
            return;
        }
    }
}
