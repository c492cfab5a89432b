use crate::interface_adapters::handlers::error_response;
use crate::interface_adapters::handlers::health::health;
use crate::interface_adapters::handlers::nearby::nearby;
use crate::interface_adapters::handlers::ocr::ocr;
use crate::interface_adapters::handlers::translate::translate;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

// Camera captures arrive base64-encoded; the model accepts up to 20 MB inline.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/health", get(health))
        .route("/translate", post(translate))
        .route("/ocr", post(ocr))
        .route("/nearby", get(nearby))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Outer safety net: a panicking handler still answers with the JSON envelope.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "handler panicked");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}
