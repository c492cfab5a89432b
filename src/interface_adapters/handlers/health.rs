use crate::interface_adapters::protocol::HealthResponse;
use axum::Json;

// Liveness probe; never touches a provider.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
