//! Shiritori referee — HTTP adapter.
//!
//! Exposes the game context over HTTP: read the current word, submit the
//! next one, reset, and inspect the history.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the full application router over `state`.
pub fn build_app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::shiritori::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
