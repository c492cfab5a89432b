use crate::domain::errors::RelayError;
use crate::interface_adapters::protocol::ErrorResponse;
use axum::{Json, extract::rejection::BytesRejection, http::StatusCode};

pub mod health;
pub mod nearby;
pub mod ocr;
pub mod translate;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

// Helper to build a JSON error response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// Maps domain errors to HTTP responses: 400 for caller mistakes, 500 otherwise.
pub fn map_relay_error(err: RelayError) -> ApiError {
    match err {
        RelayError::InvalidInput(message) => {
            tracing::warn!(error = %message, "rejected request");
            error_response(StatusCode::BAD_REQUEST, message)
        }
        RelayError::Configuration(message) => {
            tracing::error!(error = %message, "missing configuration");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
        RelayError::UpstreamFailure(message) => {
            tracing::error!(error = %message, "upstream call failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

// Unreadable or oversized bodies still answer with the JSON envelope.
pub fn map_body_rejection(rejection: BytesRejection) -> ApiError {
    let message = rejection.body_text();
    tracing::warn!(error = %message, status = %rejection.status(), "rejected request body");
    error_response(StatusCode::BAD_REQUEST, message)
}
