//! Place details (coordinates and formatted address) for an autocomplete pick.

use std::sync::Arc;

use kundli_shared::PlaceDetails;

use crate::infrastructure::ports::PlacesPort;
use crate::use_cases::error::GatewayError;
use crate::use_cases::validation::require_non_empty;

pub struct LookupPlaceDetails {
    places: Option<Arc<dyn PlacesPort>>,
}

impl LookupPlaceDetails {
    pub fn new(places: Option<Arc<dyn PlacesPort>>) -> Self {
        Self { places }
    }

    /// Fetch `{lat, lon, name}` for `place_id`.
    ///
    /// Fails with `NotFound` when the provider returns no geometry.
    pub async fn execute(&self, place_id: Option<&str>) -> Result<PlaceDetails, GatewayError> {
        let place_id = place_id.unwrap_or_default();
        require_non_empty(place_id, "place_id")
            .map_err(|e| GatewayError::invalid_with_details("Missing place_id parameter", e))?;

        let places = self
            .places
            .as_ref()
            .ok_or_else(GatewayError::places_not_configured)?;

        places
            .details(place_id.trim())
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Place details failed"))?
            .ok_or_else(|| GatewayError::NotFound("No geometry in place details".to_string()))
    }
}
