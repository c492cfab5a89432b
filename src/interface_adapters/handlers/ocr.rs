use crate::interface_adapters::handlers::{ApiError, map_body_rejection, map_relay_error};
use crate::interface_adapters::protocol::{OcrRequest, OcrResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::OcrUseCase;
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use std::sync::Arc;

// Panics raised below this handler are turned into JSON 500s by the
// catch-panic layer in routes.
#[tracing::instrument(name = "ocr", skip_all, fields(payload_len = body.as_ref().map_or(0, |body| body.len())))]
pub async fn ocr(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<OcrResponse>, ApiError> {
    let body = body.map_err(map_body_rejection)?;
    let request = OcrRequest::from_body(&body);

    let use_case = OcrUseCase {
        model: state.model.clone(),
    };
    let text = use_case
        .execute(&request.image_base64, request.crop_rect.as_ref())
        .await
        .map_err(map_relay_error)?;

    tracing::info!(text_len = text.len(), "ocr completed");
    Ok(Json(OcrResponse { text }))
}
