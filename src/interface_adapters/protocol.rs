use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::places::Place;

// Request payload for translation.
#[derive(Debug, Default)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: Option<String>,
}

impl TranslateRequest {
    /// A wrongly typed `text` reads as missing; a scalar `targetLang` is
    /// used as its string form.
    pub fn from_body(body: &[u8]) -> Self {
        let fields = json_object(body);
        Self {
            text: string_field(&fields, "text").unwrap_or_default(),
            target_lang: scalar_field(&fields, "targetLang"),
        }
    }
}

// Response payload for translation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

// Request payload for OCR. `crop_rect` stays untyped so a malformed hint never
// rejects the whole body.
#[derive(Debug, Default)]
pub struct OcrRequest {
    pub image_base64: String,
    pub crop_rect: Option<Value>,
}

impl OcrRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let mut fields = json_object(body);
        Self {
            image_base64: string_field(&fields, "imageBase64").unwrap_or_default(),
            crop_rect: fields.remove("cropRect").filter(|rect| !rect.is_null()),
        }
    }
}

// Response payload for OCR.
#[derive(Debug, Serialize)]
pub struct OcrResponse {
    pub text: String,
}

// Raw /nearby query parameters, validated by the domain.
#[derive(Debug, Default)]
pub struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius_m: Option<String>,
}

impl NearbyParams {
    /// Builds the params from decoded query pairs. A repeated key keeps its
    /// first value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut params.lat,
                "lng" => &mut params.lng,
                "radius_m" => &mut params.radius_m,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

// Response payload for /nearby.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub places: Vec<Place>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Reads a request body as a JSON object. Invalid JSON, a non-object value,
/// an empty body or a wrong content type all read as an empty object, leaving
/// field validation to the use case.
pub fn json_object(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            tracing::debug!("request body is not a json object, treating as empty");
            Map::new()
        }
        Err(err) => {
            tracing::debug!(error = %err, "request body is not usable json, treating as empty");
            Map::new()
        }
    }
}

// Only JSON strings count; any other type reads as absent.
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        _ => None,
    }
}

// Strings, numbers and booleans, in their JSON text form.
fn scalar_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Some(value.to_string()),
        _ => None,
    }
}
