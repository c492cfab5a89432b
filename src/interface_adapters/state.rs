use crate::domain::{GenerativeModel, PlacesSearch, ReverseGeocoder};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    // Built once at startup and shared read-only by every request.
    pub model: Arc<dyn GenerativeModel>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
    // None when PLACES_API_KEY is not configured; /nearby reports it per request.
    pub places: Option<Arc<dyn PlacesSearch>>,
}
