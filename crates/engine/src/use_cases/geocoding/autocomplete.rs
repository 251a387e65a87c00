//! Place autocomplete through the commercial provider.

use std::sync::Arc;

use kundli_shared::PlacesResponse;

use crate::infrastructure::ports::PlacesPort;
use crate::use_cases::error::GatewayError;
use crate::use_cases::validation::{require_length_range, require_non_empty};

use super::{DEFAULT_PLACE_TYPES, MAX_QUERY_LENGTH, MIN_QUERY_LENGTH};

pub struct Autocomplete {
    places: Option<Arc<dyn PlacesPort>>,
}

impl Autocomplete {
    /// `places` is `None` when no provider credential is configured.
    pub fn new(places: Option<Arc<dyn PlacesPort>>) -> Self {
        Self { places }
    }

    /// Suggest places for `q`, restricted to `types` (default `(cities)`).
    ///
    /// # Returns
    /// * `Err(GatewayError::InvalidInput)` - `q` missing or out of range
    /// * `Err(GatewayError::NotConfigured)` - No credential; nothing is sent
    pub async fn execute(
        &self,
        q: Option<&str>,
        types: Option<&str>,
    ) -> Result<PlacesResponse, GatewayError> {
        let q = q.unwrap_or_default();
        require_non_empty(q, "q")
            .map_err(|e| GatewayError::invalid_with_details("Missing query parameter q", e))?;

        let places = self
            .places
            .as_ref()
            .ok_or_else(GatewayError::places_not_configured)?;

        require_length_range(q, MIN_QUERY_LENGTH, MAX_QUERY_LENGTH, "q")
            .map_err(|e| GatewayError::invalid_with_details("invalid query", e))?;

        let types = types
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PLACE_TYPES);

        let predictions = places
            .autocomplete(q.trim(), types)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Places autocomplete failed"))?;

        Ok(PlacesResponse { predictions })
    }
}
