use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::errors::ProviderError;
use crate::domain::places::{GeocodedAddress, NearbySearch, PlaceRecord};
use crate::domain::ports::{GenerationRequest, GenerativeModel, PlacesSearch, ReverseGeocoder};

#[derive(Clone)]
enum Reply<T> {
    Ok(T),
    Fail(String),
    Panic,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> Result<T, ProviderError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Fail(message) => Err(ProviderError::Transport(message.clone())),
            Reply::Panic => panic!("stub provider panicked"),
        }
    }
}

// Scripted model that records every request it receives.
#[derive(Clone)]
pub(crate) struct StubModel {
    reply: Reply<String>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl StubModel {
    pub(crate) fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Ok(text.into()))
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fail(message.into()))
    }

    pub(crate) fn panicking() -> Self {
        Self::with_reply(Reply::Panic)
    }

    fn with_reply(reply: Reply<String>) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().expect("requests mutex poisoned").len()
    }

    pub(crate) fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request);
        self.reply.resolve()
    }
}

#[derive(Clone)]
pub(crate) struct StubGeocoder {
    reply: Reply<GeocodedAddress>,
    lookups: Arc<Mutex<Vec<(f64, f64)>>>,
}

impl StubGeocoder {
    pub(crate) fn resolving(address: GeocodedAddress) -> Self {
        Self {
            reply: Reply::Ok(address),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn city(city: &str, state: &str, country: &str) -> Self {
        Self::resolving(GeocodedAddress {
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            country: Some(country.to_string()),
            ..GeocodedAddress::default()
        })
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fail(message.into()),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.lookups.lock().expect("lookups mutex poisoned").len()
    }
}

#[async_trait]
impl ReverseGeocoder for StubGeocoder {
    async fn reverse(&self, lat: f64, lng: f64) -> Result<GeocodedAddress, ProviderError> {
        self.lookups
            .lock()
            .expect("lookups mutex poisoned")
            .push((lat, lng));
        self.reply.resolve()
    }
}

#[derive(Clone)]
pub(crate) struct StubPlaces {
    reply: Reply<Vec<PlaceRecord>>,
    searches: Arc<Mutex<Vec<NearbySearch>>>,
}

impl StubPlaces {
    pub(crate) fn returning(records: Vec<PlaceRecord>) -> Self {
        Self {
            reply: Reply::Ok(records),
            searches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::returning(Vec::new())
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fail(message.into()),
            searches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn searches(&self) -> Vec<NearbySearch> {
        self.searches.lock().expect("searches mutex poisoned").clone()
    }
}

#[async_trait]
impl PlacesSearch for StubPlaces {
    async fn search_nearby(
        &self,
        search: &NearbySearch,
    ) -> Result<Vec<PlaceRecord>, ProviderError> {
        self.searches
            .lock()
            .expect("searches mutex poisoned")
            .push(search.clone());
        self.reply.resolve()
    }
}

// Provider record with coordinates, as the places API would return it.
pub(crate) fn place_record(index: usize) -> PlaceRecord {
    PlaceRecord {
        place_id: Some(format!("place-{index}")),
        name: Some(format!("Market {index}")),
        types: vec!["grocery_or_supermarket".to_string(), "store".to_string()],
        lat: Some(14.55 + index as f64 * 0.001),
        lng: Some(121.02),
    }
}

// Captures values recorded on spans after creation, keyed `span.field`.
#[derive(Clone, Default)]
pub(crate) struct RecordedSpanFields {
    values: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordedSpanFields {
    pub(crate) fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("span fields mutex poisoned")
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

struct FieldVisitor<'a> {
    span: &'static str,
    out: &'a mut Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.out
            .push((format!("{}.{}", self.span, field.name()), format!("{value:?}")));
    }
}

impl<S> tracing_subscriber::Layer<S> for RecordedSpanFields
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_record(
        &self,
        id: &tracing::span::Id,
        values: &tracing::span::Record<'_>,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut out = self.values.lock().expect("span fields mutex poisoned");
        values.record(&mut FieldVisitor {
            span: span.name(),
            out: &mut out,
        });
    }
}
