use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::Path,
    http::{HeaderMap, Method, StatusCode},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// What `/echo` saw of the incoming request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    /// The body parsed as JSON, or `null` when it was empty or not JSON.
    pub body: Value,
}

/// What `/upload` received.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Upload {
    pub content_type: Option<String>,
    pub bytes: usize,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/status/{code}", get(status))
        .route("/items/{id}", get(get_item))
        .route("/text", get(text))
        .route("/upload", post(upload))
        .route("/delay/{ms}", get(delay))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    tracing::info!(addr = ?listener.local_addr().ok(), "mock server listening");
    axum::serve(listener, app()).await
}

/// Header names are lower-cased by the HTTP stack.
fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    Json(Echo {
        method: method.as_str().to_string(),
        headers: header_map(&headers),
        body,
    })
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    let msg = status.canonical_reason().unwrap_or("custom status");
    Ok((status, Json(json!({ "msg": msg.to_lowercase() }))))
}

async fn get_item(Path(id): Path<u64>) -> (StatusCode, Json<Value>) {
    if id == 0 {
        return (StatusCode::NOT_FOUND, Json(json!({ "msg": "not found" })));
    }
    (StatusCode::OK, Json(json!({ "id": id })))
}

/// Longest wait `/delay` accepts, in milliseconds.
pub const MAX_DELAY_MS: u64 = 10_000;

async fn delay(Path(ms): Path<u64>) -> Json<Value> {
    let ms = ms.min(MAX_DELAY_MS);
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    Json(json!({ "delayed_ms": ms }))
}

async fn text() -> &'static str {
    "plain text, not json"
}

async fn upload(headers: HeaderMap, body: Bytes) -> Json<Upload> {
    Json(Upload {
        content_type: headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        bytes: body.len(),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
