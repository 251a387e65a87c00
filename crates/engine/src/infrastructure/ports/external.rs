//! External service ports.

use async_trait::async_trait;

use kundli_domain::Coordinates;
use kundli_shared::{BasisQuery, ChartInput, ChartOperation, GeoPlace, PlaceDetails, PlacePrediction};

use super::error::ProviderError;

/// A backend response passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// The horoscope backend, which also hosts the open-data geocoder.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HoroscopeBackendPort: Send + Sync {
    /// Fetch predictions. Any HTTP status is returned as a [`RelayResponse`];
    /// only transport failures are errors.
    async fn horoscope(&self, query: &BasisQuery) -> Result<RelayResponse, ProviderError>;

    /// Run a chart computation; relayed like [`Self::horoscope`].
    ///
    /// `date` is the transit instant and is only sent when present.
    async fn compute(
        &self,
        operation: ChartOperation,
        input: &ChartInput,
        date: Option<String>,
    ) -> Result<RelayResponse, ProviderError>;

    async fn search_places(&self, query: &str) -> Result<Vec<GeoPlace>, ProviderError>;

    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<GeoPlace, ProviderError>;
}

/// The commercial places provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacesPort: Send + Sync {
    async fn autocomplete(
        &self,
        input: &str,
        types: &str,
    ) -> Result<Vec<PlacePrediction>, ProviderError>;

    /// `Ok(None)` when the provider knows the place but returned no geometry.
    async fn details(&self, place_id: &str) -> Result<Option<PlaceDetails>, ProviderError>;
}
