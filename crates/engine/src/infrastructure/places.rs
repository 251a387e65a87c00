//! Commercial places provider client (Google Places web service)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use kundli_shared::{PlaceDetails, PlacePrediction};

use crate::infrastructure::ports::{PlacesPort, ProviderError};

/// Default places API base URL.
pub const DEFAULT_PLACES_API_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Fields requested from the details endpoint.
const DETAIL_FIELDS: &str = "geometry,formatted_address";

#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let response = self
            .client
            .get(format!("{}/{endpoint}/json", self.base_url))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
            tracing::warn!(status = %status, endpoint, "Places provider returned an error");
            return Err(ProviderError::upstream(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl PlacesPort for GooglePlacesClient {
    async fn autocomplete(
        &self,
        input: &str,
        types: &str,
    ) -> Result<Vec<PlacePrediction>, ProviderError> {
        let response: AutocompleteResponse = self
            .get_json("autocomplete", &[("input", input), ("types", types)])
            .await?;
        Ok(response.predictions.unwrap_or_default())
    }

    async fn details(&self, place_id: &str) -> Result<Option<PlaceDetails>, ProviderError> {
        let response: DetailsResponse = self
            .get_json("details", &[("place_id", place_id), ("fields", DETAIL_FIELDS)])
            .await?;
        Ok(response.into_place_details())
    }
}

// =============================================================================
// Provider wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Option<Vec<PlacePrediction>>,
}

#[derive(Debug, Default, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    result: Option<DetailsResult>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    #[serde(default)]
    geometry: Option<Geometry>,
    #[serde(default)]
    formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl DetailsResponse {
    /// Flatten `result.geometry.location` and `result.formatted_address`.
    fn into_place_details(self) -> Option<PlaceDetails> {
        let result = self.result?;
        let location = result.geometry?.location?;
        Some(PlaceDetails {
            lat: location.lat,
            lon: location.lng,
            name: result.formatted_address.unwrap_or_default(),
        })
    }
}
