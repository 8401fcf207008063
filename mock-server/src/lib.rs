use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the server saw for one request to `/echo`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Echo {
    /// First value of header `name` (lowercase).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every header name except the ones added by the connection itself.
    pub fn header_names(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| !matches!(*k, "host" | "accept" | "accept-encoding" | "content-length"))
            .collect()
    }
}

/// Number of requests `/echo` has answered.
pub type Hits = Arc<AtomicUsize>;

/// Bytes served by `/invalid-utf8`: `ok`, a lone continuation byte, `!`.
pub const INVALID_UTF8: &[u8] = b"ok\x80!";

pub fn app() -> Router {
    let hits: Hits = Arc::new(AtomicUsize::new(0));
    Router::new()
        .route("/echo", any(echo))
        .route("/hits", get(echo_hits))
        .route("/redirect", any(redirect))
        .route("/status/{code}", any(status))
        .route("/slow/{ms}", any(slow))
        .route("/large/{len}", any(large))
        .route("/invalid-utf8", any(invalid_utf8))
        .with_state(hits)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    State(hits): State<Hits>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Json<Echo> {
    hits.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(%method, %uri, "echo");
    let headers = headers
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    })
}

async fn echo_hits(State(hits): State<Hits>) -> String {
    hits.load(Ordering::SeqCst).to_string()
}

/// `302 Found` to `/echo` with a text body.
async fn redirect() -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    (StatusCode::FOUND, [(header::LOCATION, "/echo")], "moved to /echo")
}

async fn status(Path(code): Path<u16>) -> (StatusCode, String) {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, format!("status {}", status.as_u16()))
}

async fn slow(Path(ms): Path<u64>) -> String {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    format!("slept {ms}ms")
}

/// `len` bytes of `a`.
async fn large(Path(len): Path<usize>) -> String {
    "a".repeat(len)
}

async fn invalid_utf8() -> Vec<u8> {
    INVALID_UTF8.to_vec()
}
