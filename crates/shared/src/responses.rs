//! Response bodies produced by the gateway

use serde::{Deserialize, Deserializer, Serialize};

use kundli_domain::{Coordinates, Location, PlaceCandidate};

/// A place as returned by the open-data search and reverse endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPlace {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
}

impl GeoPlace {
    pub fn to_location(&self) -> Location {
        Location {
            name: self.name.clone(),
            lat: Some(self.lat),
            lon: Some(self.lon),
            tz: self.tz.clone(),
        }
    }

    /// Candidate for a suggestion list; `None` if the coordinates are out of range.
    pub fn to_candidate(&self) -> Option<PlaceCandidate> {
        let coordinates = Coordinates::new(self.lat, self.lon).ok()?;
        Some(PlaceCandidate::from_open_data(
            self.name.clone(),
            coordinates,
            self.tz.clone(),
        ))
    }
}

/// One autocomplete prediction from the commercial provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacePrediction {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub place_id: String,
}

impl PlacePrediction {
    pub fn to_candidate(&self) -> PlaceCandidate {
        PlaceCandidate::from_prediction(self.description.clone(), self.place_id.clone())
    }
}

/// Body of `GET /api/places`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub predictions: Vec<PlacePrediction>,
}

/// Body of `GET /api/place-details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Providers send `"name": null` for unnamed places.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Error body for every non-relayed failure: `{"error": ..., "details"?: ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
