use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::ProviderError;
use crate::domain::image::InlineImage;
use crate::domain::places::{GeocodedAddress, NearbySearch, PlaceRecord};

/// A prompt, optionally preceded by an inline image.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub image: Option<InlineImage>,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            image: None,
            prompt: prompt.into(),
        }
    }

    pub fn with_image(image: InlineImage, prompt: impl Into<String>) -> Self {
        Self {
            image: Some(image),
            prompt: prompt.into(),
        }
    }
}

// Use cases depend on these traits, not on the reqwest clients.
// Dependencies point inwards to the domain layer.

// Port for the generative text/vision model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError>;
}

// Port for coordinate → address lookups.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, lat: f64, lng: f64) -> Result<GeocodedAddress, ProviderError>;
}

// Port for nearby points-of-interest search.
#[async_trait]
pub trait PlacesSearch: Send + Sync {
    async fn search_nearby(&self, search: &NearbySearch)
    -> Result<Vec<PlaceRecord>, ProviderError>;
}

// Shared handles from AppState satisfy the ports directly.

#[async_trait]
impl<T: GenerativeModel + ?Sized> GenerativeModel for Arc<T> {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        (**self).generate(request).await
    }
}

#[async_trait]
impl<T: ReverseGeocoder + ?Sized> ReverseGeocoder for Arc<T> {
    async fn reverse(&self, lat: f64, lng: f64) -> Result<GeocodedAddress, ProviderError> {
        (**self).reverse(lat, lng).await
    }
}

#[async_trait]
impl<T: PlacesSearch + ?Sized> PlacesSearch for Arc<T> {
    async fn search_nearby(
        &self,
        search: &NearbySearch,
    ) -> Result<Vec<PlaceRecord>, ProviderError> {
        (**self).search_nearby(search).await
    }
}
