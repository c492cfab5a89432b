// The clients defined here are reqwest clients for the external providers.

pub mod gemini;
pub mod google_places;
pub mod nominatim;

pub use gemini::GeminiClient;
pub use google_places::GooglePlacesClient;
pub use nominatim::NominatimClient;

use crate::domain::errors::ProviderError;
use serde::de::DeserializeOwned;

// Keep upstream status and body text so the error message stays useful.
async fn upstream_error(res: reqwest::Response) -> ProviderError {
    let status = res.status();
    let message = res.text().await.unwrap_or_default();
    ProviderError::Upstream {
        status: status.as_u16(),
        message: message.trim().to_string(),
    }
}

// Fails on non-2xx, then decodes the JSON body.
async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ProviderError> {
    if !res.status().is_success() {
        return Err(upstream_error(res).await);
    }

    res.json::<T>()
        .await
        .map_err(|err| ProviderError::Decode(err.to_string()))
}

fn transport(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}
