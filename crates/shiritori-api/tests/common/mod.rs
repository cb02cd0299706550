//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use shiritori_core::classifier::PartOfSpeechClassifier;
use shiritori_core::clock::Clock;
use shiritori_core::rng::DeterministicRng;
use shiritori_test_support::{DenyListClassifier, FixedClock, SequenceRng};
use tower::ServiceExt;

use shiritori_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build app state whose seed picks follow `seed_indices` (first game, then
/// one per reset) and whose classifier flags `denied` words.
pub fn build_test_state(seed_indices: Vec<u32>, denied: &[&str]) -> AppState {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> =
        Arc::new(Mutex::new(SequenceRng::new(seed_indices)));
    let classifier: Arc<dyn PartOfSpeechClassifier> = Arc::new(DenyListClassifier::new(denied));
    AppState::new(fixed_clock(), rng, classifier).unwrap()
}

/// Build the full app router. Uses the same route structure as `main.rs`.
pub fn build_test_app(state: AppState) -> Router {
    shiritori_api::build_app(state)
}

/// Build an app whose first game starts from the seed word at `seed_index`.
pub fn app_seeded_with(seed_index: u32) -> (Router, AppState) {
    let state = build_test_state(vec![seed_index], &[]);
    (build_test_app(state.clone()), state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// GET /shiritori and return the plain-text body.
pub async fn get_word(app: Router) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri("/shiritori")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST /shiritori with `{"nextWord": word}` and return the raw body.
pub async fn submit_word(app: Router, word: &str) -> (StatusCode, String) {
    let body = serde_json::json!({ "nextWord": word });
    let request = Request::builder()
        .method("POST")
        .uri("/shiritori")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// POST /shiritori expecting a rejection, returning the parsed JSON body.
pub async fn submit_rejected(app: Router, word: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = submit_word(app, word).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// POST /reset and return the plain-text body.
pub async fn reset(app: Router) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/reset")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a GET request and return the JSON response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}
