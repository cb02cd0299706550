//! Routes for the game context.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use shiritori_game::application::query_handlers::{self, HistoryView};
use shiritori_game::application::command_handlers;
use shiritori_game::domain::commands::{ResetGame, SubmitWord};
use shiritori_game::domain::rules::ValidationOutcome;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ApiError, RejectionResponse};
use crate::state::AppState;

/// Request body for POST /shiritori.
#[derive(Debug, Deserialize)]
pub struct SubmitWordRequest {
    /// The word to play.
    #[serde(rename = "nextWord")]
    pub next_word: String,
}

/// GET /shiritori
async fn current_word(State(state): State<AppState>) -> Result<String, ApiError> {
    Ok(query_handlers::get_current_word(&state.store)?)
}

/// POST /shiritori
#[instrument(skip(state, request), fields(next_word = %request.next_word))]
async fn submit_word(
    State(state): State<AppState>,
    Json(request): Json<SubmitWordRequest>,
) -> Result<Response, ApiError> {
    let command = SubmitWord {
        correlation_id: Uuid::new_v4(),
        word: request.next_word,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_word command");

    let result = command_handlers::handle_submit_word(
        &command,
        state.clock.as_ref(),
        state.classifier.as_ref(),
        &state.store,
    )?;

    Ok(match result.outcome {
        ValidationOutcome::Accepted(word) => word.into_response(),
        ValidationOutcome::Rejected(kind) => RejectionResponse(kind).into_response(),
    })
}

/// POST /reset
#[instrument(skip(state))]
async fn reset(State(state): State<AppState>) -> Result<String, ApiError> {
    let command = ResetGame {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling reset command");

    let result = command_handlers::handle_reset_game(
        &command,
        state.clock.as_ref(),
        &state.rng,
        &state.store,
    )?;

    Ok(result.seed_word)
}

/// GET /shiritori/history
async fn history(State(state): State<AppState>) -> Result<Json<HistoryView>, ApiError> {
    Ok(Json(query_handlers::get_history(&state.store)?))
}

/// Returns the router for the game context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shiritori", get(current_word).post(submit_word))
        .route("/shiritori/history", get(history))
        .route("/reset", post(reset))
}
