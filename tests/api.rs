//! HTTP API tests driven through the router

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use stopwatch::{create_router, AppState};

fn app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(20554, "127.0.0.1".to_string()));
    (create_router(Arc::clone(&state)), state)
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn start_then_stop() {
    let (app, state) = app();

    let (status, body) = call(&app, Method::POST, "/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["message"], "Stopwatch started");
    assert!(state.current().unwrap().is_running());

    let (status, body) = call(&app, Method::POST, "/stop").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "stopped");
    assert!(body["stopwatch"]["description"]
        .as_str()
        .unwrap()
        .starts_with("Ended, was running"));

    let elapsed = body["stopwatch"]["elapsed_nanos"].as_u64().unwrap();
    let (_, again) = call(&app, Method::POST, "/stop").await;
    assert_eq!(again["stopwatch"]["elapsed_nanos"].as_u64().unwrap(), elapsed);
}

#[tokio::test]
async fn stop_on_fresh_server_is_a_no_op() {
    let (app, _) = app();

    let (status, body) = call(&app, Method::POST, "/stop").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "on_hold");
    assert_eq!(body["message"], "Stopwatch was not running");
    assert_eq!(body["stopwatch"]["elapsed_nanos"], 0);
}

#[tokio::test]
async fn reset_clears_elapsed() {
    let (app, _) = app();

    call(&app, Method::POST, "/start").await;
    let (_, body) = call(&app, Method::POST, "/reset").await;
    assert_eq!(body["status"], "on_hold");
    assert_eq!(body["stopwatch"]["elapsed_seconds"], 0.0);
    assert_eq!(body["stopwatch"]["description"], "Not yet started");
}

#[tokio::test]
async fn status_reports_server_metadata() {
    let (app, _) = app();

    let (_, body) = call(&app, Method::GET, "/status").await;
    assert_eq!(body["stopwatch"]["status"], "on_hold");
    assert_eq!(body["port"], 20554);
    assert_eq!(body["host"], "127.0.0.1");
    assert_eq!(body["last_action"], Value::Null);

    call(&app, Method::POST, "/start").await;
    let (_, body) = call(&app, Method::GET, "/status").await;
    assert_eq!(body["stopwatch"]["status"], "running");
    assert_eq!(body["last_action"], "start");
}

#[tokio::test]
async fn health_is_ok() {
    let (app, _) = app();

    let (status, body) = call(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn transitions_need_post() {
    let (app, _) = app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/start")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
