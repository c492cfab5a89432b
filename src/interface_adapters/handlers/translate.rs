use crate::interface_adapters::handlers::{ApiError, map_body_rejection, map_relay_error};
use crate::interface_adapters::protocol::{TranslateRequest, TranslateResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::TranslateUseCase;
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use std::sync::Arc;

#[tracing::instrument(name = "translate", skip_all)]
pub async fn translate(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let body = body.map_err(map_body_rejection)?;
    let request = TranslateRequest::from_body(&body);
    tracing::debug!(
        text_len = request.text.len(),
        target_lang = ?request.target_lang,
        "translate request"
    );

    let use_case = TranslateUseCase {
        model: state.model.clone(),
    };
    let translated_text = use_case
        .execute(&request.text, request.target_lang.as_deref())
        .await
        .map_err(map_relay_error)?;

    Ok(Json(TranslateResponse { translated_text }))
}
