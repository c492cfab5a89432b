// Shared bootstrapping for end-to-end tests: mock providers plus a real server.
#![allow(dead_code)]

use lingua_relay::Settings;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::MockServer;

pub const GEMINI_MODEL: &str = "gemini-test";
pub const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

// One mock server per external provider.
pub struct Providers {
    pub gemini: MockServer,
    pub places: MockServer,
    pub nominatim: MockServer,
}

impl Providers {
    pub async fn start() -> Self {
        Self {
            gemini: MockServer::start().await,
            places: MockServer::start().await,
            nominatim: MockServer::start().await,
        }
    }

    // Settings pointing every client at the mock servers.
    pub fn settings(&self, places_api_key: Option<&str>) -> Settings {
        let mut settings = Settings::with_keys("gemini-key", places_api_key.map(str::to_string));
        settings.gemini_model = GEMINI_MODEL.to_string();
        settings.gemini_api_base = self.gemini.uri();
        settings.gemini_timeout = Duration::from_secs(5);
        settings.places_api_base = self.places.uri();
        settings.nominatim_base_url = self.nominatim.uri();
        settings.provider_timeout = Duration::from_secs(5);
        settings
    }
}

// Start the relay on an ephemeral port and return its base URL.
pub async fn spawn_app(settings: Settings) -> String {
    let state = lingua_relay::build_state(&settings).expect("state should build");
    // Bind before spawning so the port accepts connections as soon as we return.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        lingua_relay::run(listener, state).await.expect("server failed");
    });

    format!("http://{addr}")
}

// Minimal Gemini success payload with a single text part.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}
