use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::RelayError;

// Upper bound on places taken from the search provider.
pub const MAX_PLACES: usize = 20;
pub const DEFAULT_RADIUS_M: i64 = 5000;
// Broad keyword so malls, supermarkets and attractions all match.
pub const PLACES_KEYWORD: &str = "supermarket grocery mall market tourist attraction";

// The serialization within this layer is a dependency leak, but it keeps the
// response shape in one place.
/// A place as returned to the client. AI-suggested places carry no coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Provider-neutral record produced by a places-search adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceRecord {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub types: Vec<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<PlaceRecord> for Place {
    fn from(record: PlaceRecord) -> Self {
        let category = if record.types.is_empty() {
            "Market".to_string()
        } else {
            record
                .types
                .iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        Place {
            id: record.place_id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            category,
            lat: record.lat,
            lng: record.lng,
        }
    }
}

/// Validated `/nearby` query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_m: i64,
}

impl NearbyQuery {
    pub fn parse(
        lat: Option<&str>,
        lng: Option<&str>,
        radius_m: Option<&str>,
    ) -> Result<Self, RelayError> {
        let coordinates = parse_coordinate(lat).zip(parse_coordinate(lng));
        let Some((lat, lng)) = coordinates else {
            return Err(RelayError::invalid_input(
                "lat and lng query params are required",
            ));
        };

        let radius_m = match radius_m {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| RelayError::invalid_input("radius_m must be an integer"))?,
            None => DEFAULT_RADIUS_M,
        };

        Ok(Self { lat, lng, radius_m })
    }

    pub fn search(&self) -> NearbySearch {
        NearbySearch {
            lat: self.lat,
            lng: self.lng,
            radius_m: self.radius_m,
            keyword: PLACES_KEYWORD.to_string(),
        }
    }
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Request sent through the places-search port.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearch {
    pub lat: f64,
    pub lng: f64,
    pub radius_m: i64,
    pub keyword: String,
}

/// Reverse-geocoding result, kept close to the provider's address breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodedAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub display_name: Option<String>,
}

impl GeocodedAddress {
    /// "city, state, country" with missing parts skipped, falling back to the
    /// display name when no structured part is present.
    pub fn label(&self) -> String {
        let city = non_empty(&self.city)
            .or_else(|| non_empty(&self.town))
            .or_else(|| non_empty(&self.village));
        let parts: Vec<&str> = [city, non_empty(&self.state), non_empty(&self.country)]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            non_empty(&self.display_name).unwrap_or_default().to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionParseError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a json array")]
    NotAnArray,
}

/// Removes surrounding backtick fences and an optional language-tag line
/// (e.g. "json") from model output.
pub fn strip_code_fence(raw: &str) -> &str {
    let raw = raw.trim();
    if !raw.starts_with("```") {
        return raw;
    }

    let inner = raw.trim_matches('`');
    match inner.split_once('\n') {
        Some((first_line, rest)) if is_language_tag(first_line) => rest,
        _ => inner,
    }
}

fn is_language_tag(line: &str) -> bool {
    line.trim().chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parses the model's place suggestions. Non-object items are skipped;
/// missing fields fall back to defaults and coordinates are always null.
pub fn parse_suggested_places(raw: &str) -> Result<Vec<Place>, SuggestionParseError> {
    let value: Value = serde_json::from_str(strip_code_fence(raw))?;
    let Value::Array(items) = value else {
        return Err(SuggestionParseError::NotAnArray);
    };

    let mut places: Vec<Place> = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(fields) = item else {
            continue;
        };
        let id = truthy(fields.get("id"))
            .or_else(|| truthy(fields.get("name")))
            .map(value_to_string)
            .unwrap_or_else(|| places.len().to_string());
        let name = truthy(fields.get("name"))
            .map(value_to_string)
            .unwrap_or_else(|| "Place".to_string());
        let category = truthy(fields.get("category"))
            .map(value_to_string)
            .unwrap_or_else(|| "Place".to_string());

        places.push(Place {
            id,
            name,
            category,
            lat: None,
            lng: None,
        });
    }

    Ok(places)
}

// JSON truthiness: null, false, 0, "" and empty containers fall through.
fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    })
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
