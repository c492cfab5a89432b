use crate::domain::errors::ProviderError;
use crate::domain::places::{NearbySearch, PlaceRecord};
use crate::domain::ports::PlacesSearch;
use crate::interface_adapters::clients::{read_json, transport};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Thin reqwest client for Google Places Nearby Search.
#[derive(Clone)]
pub struct GooglePlacesClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct NearbySearchQuery<'a> {
    location: String,
    radius: i64,
    keyword: &'a str,
    key: &'a str,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    results: Option<Vec<GooglePlace>>,
    status: Option<String>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GooglePlace {
    place_id: Option<String>,
    name: Option<String>,
    types: Option<Vec<String>>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: Option<f64>,
    lng: Option<f64>,
}

impl From<GooglePlace> for PlaceRecord {
    fn from(place: GooglePlace) -> Self {
        let location = place.geometry.and_then(|geometry| geometry.location);
        PlaceRecord {
            place_id: place.place_id,
            name: place.name,
            types: place.types.unwrap_or_default(),
            lat: location.as_ref().and_then(|l| l.lat),
            lng: location.as_ref().and_then(|l| l.lng),
        }
    }
}

impl GooglePlacesClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl PlacesSearch for GooglePlacesClient {
    async fn search_nearby(
        &self,
        search: &NearbySearch,
    ) -> Result<Vec<PlaceRecord>, ProviderError> {
        let url = format!("{}/nearbysearch/json", self.base_url.trim_end_matches('/'));
        let res = self
            .http
            .get(url)
            .query(&NearbySearchQuery {
                location: format!("{},{}", search.lat, search.lng),
                radius: search.radius_m,
                keyword: &search.keyword,
                key: &self.api_key,
            })
            .send()
            .await
            .map_err(transport)?;

        let payload: NearbySearchResponse = read_json(res).await?;

        // Google reports quota/key problems with a 200 and a status field;
        // the results list (usually empty) is still what we return.
        match payload.status.as_deref() {
            Some("OK") | Some("ZERO_RESULTS") | None => {}
            Some(status) => tracing::warn!(
                status,
                error_message = payload.error_message.as_deref().unwrap_or_default(),
                "places search returned non-OK status"
            ),
        }

        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(PlaceRecord::from)
            .collect())
    }
}
