use crate::domain::errors::ProviderError;
use crate::domain::places::GeocodedAddress;
use crate::domain::ports::ReverseGeocoder;
use crate::interface_adapters::clients::{read_json, transport};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Nominatim's usage policy requires an identifying user agent.
pub const USER_AGENT: &str = "linguajourney/1.0 (student project)";

// Thin reqwest client for OpenStreetMap Nominatim reverse lookups (no key needed).
#[derive(Clone)]
pub struct NominatimClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ReverseQuery {
    format: &'static str,
    lat: f64,
    lon: f64,
    // City-level detail.
    zoom: u8,
    addressdetails: u8,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, lat: f64, lng: f64) -> Result<GeocodedAddress, ProviderError> {
        let url = format!("{}/reverse", self.base_url.trim_end_matches('/'));
        let res = self
            .http
            .get(url)
            .query(&ReverseQuery {
                format: "jsonv2",
                lat,
                lon: lng,
                zoom: 12,
                addressdetails: 1,
            })
            .send()
            .await
            .map_err(transport)?;

        let payload: ReverseResponse = read_json(res).await?;
        let address = payload.address.unwrap_or_default();

        Ok(GeocodedAddress {
            city: address.city,
            town: address.town,
            village: address.village,
            state: address.state,
            country: address.country,
            display_name: payload.display_name,
        })
    }
}
