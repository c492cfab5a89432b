// Use cases layer: one workflow per endpoint.

pub mod nearby;
pub mod ocr;
pub mod reverse_geocode;
pub mod translate;

#[cfg(test)]
pub(crate) mod test_support;

pub use nearby::{NearbyUseCase, suggest_places_fallback};
pub use ocr::OcrUseCase;
pub use reverse_geocode::reverse_geocode_label;
pub use translate::TranslateUseCase;
