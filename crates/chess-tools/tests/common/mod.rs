//! Shared helpers for chess-tools integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chess_tools::{async_trait, ChessApiConfig, ChessClient, FetchError, JsonSource};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const BASE: &str = "https://api.chess.com/pub/";

/// Serves canned JSON per URL; anything else is a 404.
#[derive(Default)]
pub struct ScriptedSource {
    responses: HashMap<String, Value>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `{BASE}{path}` with `body`.
    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(format!("{}{}", BASE, path), body);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonSource for ScriptedSource {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: StatusCode::NOT_FOUND,
                url: url.to_string(),
            })
    }
}

pub fn client_for(source: Arc<ScriptedSource>) -> ChessClient {
    ChessClient::with_source(ChessApiConfig::default(), source)
}

/// Accept one HTTP connection on a local port, answer it with `status` and
/// `body`, and hand back the raw request text.
pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}
