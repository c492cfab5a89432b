// Domain layer: value types, pure transformations, and provider ports.

pub mod errors;
pub mod image;
pub mod places;
pub mod ports;
pub mod prompts;

// Re-export the domain boundary types and ports.
pub use errors::{ProviderError, RelayError};
pub use image::{ImageFormat, InlineImage};
pub use places::{GeocodedAddress, NearbyQuery, NearbySearch, Place, PlaceRecord};
pub use ports::{GenerationRequest, GenerativeModel, PlacesSearch, ReverseGeocoder};
