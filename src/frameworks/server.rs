// Framework bootstrap for the relay runtime.

use crate::domain::PlacesSearch;
use crate::frameworks::config::{self, Settings};
use crate::interface_adapters::clients::{GeminiClient, GooglePlacesClient, NominatimClient};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    // The AI key is mandatory: refuse to start without it.
    let settings = Settings::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    let state = build_state(&settings)?;

    let address = config::bind_address();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

/// Builds the provider clients once; every request shares them.
pub fn build_state(settings: &Settings) -> Result<Arc<AppState>> {
    let model = GeminiClient::new(
        settings.gemini_api_base.clone(),
        settings.gemini_model.clone(),
        settings.gemini_api_key.clone(),
        settings.gemini_timeout,
    )
    .map_err(|e| std::io::Error::other(format!("failed to initialize gemini client: {e}")))?;
    tracing::debug!(
        model = model.model(),
        timeout_secs = settings.gemini_timeout.as_secs(),
        "gemini client configured"
    );

    let geocoder = NominatimClient::new(settings.nominatim_base_url.clone(), settings.provider_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize geocoder client: {e}")))?;

    let places = match &settings.places_api_key {
        Some(key) => {
            let client = GooglePlacesClient::new(
                settings.places_api_base.clone(),
                key.clone(),
                settings.provider_timeout,
            )
            .map_err(|e| std::io::Error::other(format!("failed to initialize places client: {e}")))?;
            Some(Arc::new(client) as Arc<dyn PlacesSearch>)
        }
        None => {
            tracing::warn!("PLACES_API_KEY not set; /nearby will answer with a configuration error");
            None
        }
    };

    Ok(Arc::new(AppState {
        model: Arc::new(model),
        geocoder: Arc::new(geocoder),
        places,
    }))
}
