//! Shiritori referee — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use shiritori_core::error::DomainError;
use shiritori_game::domain::rules::RejectionKind;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The game could not be set up.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for internal failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_code = match &self.0 {
            DomainError::LockPoisoned(_) | DomainError::Infrastructure(_) => "infrastructure_error",
        };
        tracing::error!(error = %self.0, "request failed");

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// JSON body returned when a word is rejected.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionBody {
    /// Player-facing message.
    pub error_message: String,
    /// Numeric code, as a string.
    pub error_code: &'static str,
}

/// Renders a rejected word as a 4xx response.
#[derive(Debug, Clone, Copy)]
pub struct RejectionResponse(pub RejectionKind);

impl IntoResponse for RejectionResponse {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RejectionKind::GameOver => StatusCode::CONFLICT,
            RejectionKind::NotContinuation
            | RejectionKind::AlreadyUsed
            | RejectionKind::EndsInN
            | RejectionKind::RepeatedImmediate
            | RejectionKind::VerbOrAdjective => StatusCode::BAD_REQUEST,
        };

        let body = RejectionBody {
            error_message: self.0.to_string(),
            error_code: self.0.code(),
        };

        (status, Json(body)).into_response()
    }
}
