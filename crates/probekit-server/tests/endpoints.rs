#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use probekit_server::{app_state::AppState, config, router};

fn app_with(cfg: config::ServerConfig) -> (AppState, Router) {
    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());
    (state, app)
}

fn app() -> (AppState, Router) {
    app_with(config::ServerConfig::default())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_echo(app: &Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/echo")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn status_is_ok() {
    let (_, app) = app();
    let (status, body) = get_json(&app, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_live_version() {
    let (_, app) = app();

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["uptimeSecs"].is_u64());

    let (status, body) = get_json(&app, "/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");

    let (status, body) = get_json(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "probekit-server");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn ready_flips_to_503_when_draining() {
    let (state, app) = app();

    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    state.set_draining();
    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "draining");
}

#[tokio::test]
async fn metrics_counts_every_route_including_errors() {
    let (_, app) = app();

    get_json(&app, "/status").await;
    get_json(&app, "/teapot").await;
    let (status, body) = get_json(&app, "/no/such/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = get_json(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    // the /metrics request itself has started but not completed
    assert_eq!(body["totalRequests"], 4);
    assert_eq!(body["responseTime"]["samples"], 3);
    assert_eq!(body["statusCodes"], json!({ "200": 1, "404": 1, "418": 1 }));
}

#[tokio::test]
async fn metrics_on_fresh_server() {
    let (_, app) = app();
    let (_, body) = get_json(&app, "/metrics").await;
    assert_eq!(
        body,
        json!({
            "totalRequests": 1,
            "responseTime": { "avg": 0, "min": 0, "max": 0, "samples": 0 },
            "statusCodes": {}
        })
    );
}

#[tokio::test]
async fn method_not_allowed_is_recorded() {
    let (state, app) = app();
    let req = Request::builder().uri("/api/echo").body(Body::empty()).unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let snap = state.recorder().snapshot();
    assert_eq!(snap.status_codes.get(&405), Some(&1));
}

#[tokio::test]
async fn prometheus_text_reflects_snapshot() {
    let (_, app) = app();
    get_json(&app, "/status").await;

    let req = Request::builder().uri("/metrics/prometheus").body(Body::empty()).unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()["content-type"].to_str().unwrap().starts_with("text/plain"));

    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("probekit_requests_total 2\n"));
    assert!(text.contains("probekit_responses_total{code=\"200\"} 1\n"));
    assert!(text.contains("probekit_response_time_samples 1\n"));
    assert!(text.contains("probekit_draining 0\n"));
}

#[tokio::test]
async fn echo_returns_body() {
    let (_, app) = app();
    let (status, body) = post_echo(&app, r#"{"hello":"world","n":[1,2,3]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["echo"], json!({ "hello": "world", "n": [1, 2, 3] }));
    assert!(body["receivedAt"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn echo_rejects_invalid_json() {
    let (state, app) = app();
    let (status, body) = post_echo(&app, "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    assert_eq!(state.recorder().snapshot().status_codes.get(&400), Some(&1));
}

#[tokio::test]
async fn echo_rejects_oversized_body() {
    let mut cfg = config::ServerConfig::default();
    cfg.server.max_body_bytes = 16;
    let (_, app) = app_with(cfg);

    let big = format!(r#"{{"pad":"{}"}}"#, "x".repeat(64));
    let (status, body) = post_echo(&app, big).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn jokes_rotate_and_teapot_is_418() {
    let (_, app) = app();

    let (_, first) = get_json(&app, "/joke").await;
    let (_, second) = get_json(&app, "/joke").await;
    assert_eq!(first["id"], 0);
    assert_eq!(second["id"], 1);
    assert_ne!(first["joke"], second["joke"]);

    let (status, body) = get_json(&app, "/teapot").await;
    assert_eq!(status, StatusCode::IM_A_TEAPOT);
    assert_eq!(body["status"], "teapot");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_lose_no_updates() {
    let (state, app) = app();

    let mut handles = Vec::with_capacity(1000);
    for i in 0..1000 {
        let app = app.clone();
        let uri = if i % 10 == 0 { "/teapot" } else { "/status" };
        handles.push(tokio::spawn(async move {
            let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
            app.oneshot(req).await.unwrap().status()
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let snap = state.recorder().snapshot();
    assert_eq!(snap.total_requests, 1000);
    assert_eq!(snap.completed(), 1000);
    assert_eq!(snap.status_codes.get(&418), Some(&100));
    assert_eq!(snap.status_codes.get(&200), Some(&900));
    assert_eq!(snap.response_time.samples, 1000);
}
