use crate::domain::ports::ReverseGeocoder;

/// Best-effort location label for a coordinate. Lookup failures are logged
/// and produce an empty label.
pub async fn reverse_geocode_label<G>(geocoder: &G, lat: f64, lng: f64) -> String
where
    G: ReverseGeocoder + ?Sized,
{
    match geocoder.reverse(lat, lng).await {
        Ok(address) => address.label(),
        Err(err) => {
            tracing::warn!(error = %err, lat, lng, "reverse geocode failed");
            String::new()
        }
    }
}
