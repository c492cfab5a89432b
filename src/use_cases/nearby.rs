use crate::domain::errors::RelayError;
use crate::domain::places::{MAX_PLACES, NearbyQuery, Place, parse_suggested_places};
use crate::domain::ports::{GenerationRequest, GenerativeModel, PlacesSearch, ReverseGeocoder};
use crate::domain::prompts::suggest_places_prompt;
use crate::use_cases::reverse_geocode::reverse_geocode_label;

pub const MISSING_PLACES_KEY: &str = "PLACES_API_KEY env var is required for /nearby";

// Nearby places use case. `places` is absent when no places API key is configured.
pub struct NearbyUseCase<P, G, M> {
    pub places: Option<P>,
    pub geocoder: G,
    pub model: M,
}

impl<P, G, M> NearbyUseCase<P, G, M>
where
    P: PlacesSearch,
    G: ReverseGeocoder,
    M: GenerativeModel,
{
    pub async fn execute(&self, query: NearbyQuery) -> Result<Vec<Place>, RelayError> {
        let Some(places) = &self.places else {
            return Err(RelayError::Configuration(MISSING_PLACES_KEY.to_string()));
        };

        let records = places
            .search_nearby(&query.search())
            .await
            .map_err(|err| RelayError::UpstreamFailure(format!("Places API request failed: {err}")))?;

        let found: Vec<Place> = records
            .into_iter()
            .take(MAX_PLACES)
            .map(Place::from)
            .collect();
        if !found.is_empty() {
            return Ok(found);
        }

        tracing::info!(lat = query.lat, lng = query.lng, "no places found, asking model for suggestions");
        Ok(suggest_places_fallback(&self.geocoder, &self.model, query.lat, query.lng).await)
    }
}

/// Fallback when the places search comes back empty. Never fails: any
/// geocoding, model or parsing problem yields an empty list.
pub async fn suggest_places_fallback<G, M>(geocoder: &G, model: &M, lat: f64, lng: f64) -> Vec<Place>
where
    G: ReverseGeocoder + ?Sized,
    M: GenerativeModel + ?Sized,
{
    let label = reverse_geocode_label(geocoder, lat, lng).await;
    if label.is_empty() {
        return Vec::new();
    }

    let raw = match model
        .generate(GenerationRequest::text(suggest_places_prompt(&label)))
        .await
    {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, location = %label, "place suggestion request failed");
            return Vec::new();
        }
    };

    parse_suggested_places(&raw).unwrap_or_else(|err| {
        tracing::warn!(error = %err, location = %label, "unusable place suggestions");
        Vec::new()
    })
}
