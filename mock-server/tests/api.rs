use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, Upload};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_headers_and_body() {
    let resp = app()
        .oneshot(json_request("PATCH", "/echo", r#"{"name":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "PATCH");
    assert_eq!(
        echo.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(echo.body, json!({"name": "x"}));
}

#[tokio::test]
async fn echo_without_body_reports_null() {
    let resp = app().oneshot(empty_request("GET", "/echo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "GET");
    assert!(echo.body.is_null());
}

// --- status ---

#[tokio::test]
async fn status_route_returns_requested_code_with_json() {
    let resp = app()
        .oneshot(empty_request("GET", "/status/503"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"msg": "service unavailable"}));
}

#[tokio::test]
async fn status_route_rejects_non_numeric_code() {
    let resp = app()
        .oneshot(empty_request("GET", "/status/abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- items ---

#[tokio::test]
async fn item_found() {
    let resp = app().oneshot(empty_request("GET", "/items/7")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"id": 7}));
}

#[tokio::test]
async fn item_zero_not_found() {
    let resp = app().oneshot(empty_request("GET", "/items/0")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"msg": "not found"}));
}

// --- text ---

#[tokio::test]
async fn text_route_is_not_json() {
    let resp = app().oneshot(empty_request("GET", "/text")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert!(serde_json::from_slice::<Value>(&body).is_err());
}

// --- upload ---

#[tokio::test]
async fn upload_reports_content_type_and_size() {
    let req = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(http::header::CONTENT_TYPE, "multipart/form-data; boundary=B")
        .body("--B--\r\n".to_string())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let upload: Upload = body_json(resp).await;
    assert_eq!(
        upload.content_type.as_deref(),
        Some("multipart/form-data; boundary=B")
    );
    assert_eq!(upload.bytes, 7);
    assert_eq!(upload.body, "--B--\r\n");
}

#[tokio::test]
async fn upload_rejects_get() {
    let resp = app().oneshot(empty_request("GET", "/upload")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- delay ---

#[tokio::test]
async fn delay_waits_then_reports_duration() {
    let started = std::time::Instant::now();
    let resp = app().oneshot(empty_request("GET", "/delay/30")).await.unwrap();

    assert!(started.elapsed() >= std::time::Duration::from_millis(30));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"delayed_ms": 30}));
}
