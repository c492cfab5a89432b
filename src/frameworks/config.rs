use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::{env, time::Duration};

// Runtime/server configuration read from the environment.

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PLACES_API_BASE: &str = "https://maps.googleapis.com/maps/api/place";
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

// Timeout for the geocoder and places calls.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

pub fn bind_address() -> SocketAddr {
    let host = env::var("RELAY_HOST")
        .ok()
        .and_then(|v| v.parse::<IpAddr>().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let port = env::var("RELAY_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000);
    SocketAddr::new(host, port)
}

// Timeout for the AI call; unparseable values fall back to 30 s.
fn gemini_timeout(raw: Option<String>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(30);
    Duration::from_secs(secs)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY env var is required")]
    MissingGeminiKey,
}

/// Everything needed to build the provider clients.
#[derive(Clone)]
pub struct Settings {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub gemini_timeout: Duration,
    // Optional: only /nearby needs it, and it reports the absence per request.
    pub places_api_key: Option<String>,
    pub places_api_base: String,
    pub nominatim_base_url: String,
    pub provider_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let var_or = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let gemini_api_key = var("GEMINI_API_KEY").ok_or(ConfigError::MissingGeminiKey)?;

        Ok(Self {
            gemini_api_key,
            gemini_model: var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_api_base: var_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            gemini_timeout: gemini_timeout(var("GEMINI_TIMEOUT_SECS")),
            places_api_key: var("PLACES_API_KEY"),
            places_api_base: var_or("PLACES_API_BASE", DEFAULT_PLACES_API_BASE),
            nominatim_base_url: var_or("NOMINATIM_BASE_URL", DEFAULT_NOMINATIM_BASE_URL),
            provider_timeout: PROVIDER_TIMEOUT,
        })
    }

    /// Production endpoints with the given keys.
    pub fn with_keys(gemini_api_key: impl Into<String>, places_api_key: Option<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            gemini_timeout: Duration::from_secs(30),
            places_api_key,
            places_api_base: DEFAULT_PLACES_API_BASE.to_string(),
            nominatim_base_url: DEFAULT_NOMINATIM_BASE_URL.to_string(),
            provider_timeout: PROVIDER_TIMEOUT,
        }
    }
}
