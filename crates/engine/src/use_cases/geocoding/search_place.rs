//! Free-text place search through the open-data geocoder.

use std::sync::Arc;

use kundli_shared::GeoPlace;

use crate::infrastructure::ports::HoroscopeBackendPort;
use crate::use_cases::error::GatewayError;
use crate::use_cases::validation::require_length_range;

use super::{MAX_QUERY_LENGTH, MIN_QUERY_LENGTH};

pub struct SearchPlace {
    backend: Arc<dyn HoroscopeBackendPort>,
}

impl SearchPlace {
    pub fn new(backend: Arc<dyn HoroscopeBackendPort>) -> Self {
        Self { backend }
    }

    /// Search for places matching `query` (trimmed, 2-200 characters).
    ///
    /// # Returns
    /// * `Ok(Vec<GeoPlace>)` - Matches in provider order, possibly empty
    /// * `Err(GatewayError::InvalidInput)` - Query length out of range; no upstream call
    /// * `Err(GatewayError::UpstreamError | ProxyFailure)` - Provider failed
    pub async fn execute(&self, query: &str) -> Result<Vec<GeoPlace>, GatewayError> {
        require_length_range(query, MIN_QUERY_LENGTH, MAX_QUERY_LENGTH, "query")
            .map_err(|e| GatewayError::invalid_with_details("invalid query", e))?;

        let places = self
            .backend
            .search_places(query.trim())
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Geo search failed"))?;

        tracing::debug!(count = places.len(), "Geo search completed");
        Ok(places)
    }
}
