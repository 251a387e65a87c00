//! Reverse geocoding of a coordinate pair.

use std::sync::Arc;

use kundli_domain::Coordinates;
use kundli_shared::GeoPlace;

use crate::infrastructure::ports::HoroscopeBackendPort;
use crate::use_cases::error::GatewayError;

pub struct ReverseGeocode {
    backend: Arc<dyn HoroscopeBackendPort>,
}

impl ReverseGeocode {
    pub fn new(backend: Arc<dyn HoroscopeBackendPort>) -> Self {
        Self { backend }
    }

    /// Resolve `(lat, lon)` to a named place with its timezone.
    ///
    /// Out-of-range coordinates fail with `InvalidInput` before any upstream call.
    pub async fn execute(&self, lat: f64, lon: f64) -> Result<GeoPlace, GatewayError> {
        let coordinates = Coordinates::new(lat, lon)
            .map_err(|e| GatewayError::invalid_with_details("invalid coordinates", e))?;

        self.backend
            .reverse_geocode(coordinates)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, lat, lon, "Reverse geocode failed"))
            .map_err(GatewayError::from)
    }
}
