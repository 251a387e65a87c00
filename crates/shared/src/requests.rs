//! Request bodies and query strings accepted by the gateway

use serde::{Deserialize, Serialize};

/// Body of `POST /api/geo/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoSearchRequest {
    pub query: String,
}

/// Body of `POST /api/geo/reverse`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodeRequest {
    pub lat: f64,
    pub lon: f64,
}

/// Raw `basis&lat&lon&tz` query string.
///
/// Fields stay as strings so that a malformed number is reported as a
/// validation failure rather than an extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasisParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
}

/// Query string of `GET /api/places`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacesQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub types: Option<String>,
}

/// Query string of `POST /api/transits`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitQuery {
    #[serde(default)]
    pub date: Option<String>,
}

/// Query string of `GET /api/place-details`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetailsQuery {
    #[serde(default)]
    pub place_id: Option<String>,
}
