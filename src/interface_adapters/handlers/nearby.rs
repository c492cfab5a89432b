use crate::domain::places::NearbyQuery;
use crate::interface_adapters::handlers::{ApiError, map_relay_error};
use crate::interface_adapters::protocol::{NearbyParams, NearbyResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::NearbyUseCase;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;
use tracing::{Span, field};

#[tracing::instrument(
    name = "nearby",
    skip_all,
    fields(lat = field::Empty, lng = field::Empty, radius_m = field::Empty)
)]
pub async fn nearby(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<NearbyResponse>, ApiError> {
    // An unparseable query string is reported like missing coordinates.
    let params = pairs
        .map(|Query(pairs)| NearbyParams::from_pairs(pairs))
        .unwrap_or_default();
    let query = NearbyQuery::parse(
        params.lat.as_deref(),
        params.lng.as_deref(),
        params.radius_m.as_deref(),
    )
    .map_err(map_relay_error)?;

    let span = Span::current();
    span.record("lat", query.lat);
    span.record("lng", query.lng);
    span.record("radius_m", query.radius_m);

    let use_case = NearbyUseCase {
        places: state.places.clone(),
        geocoder: state.geocoder.clone(),
        model: state.model.clone(),
    };
    let places = use_case.execute(query).await.map_err(map_relay_error)?;

    tracing::info!(count = places.len(), "nearby places resolved");
    Ok(Json(NearbyResponse { places }))
}
