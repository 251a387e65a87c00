//! Gateway API Port - typed view of the gateway's HTTP endpoints
//!
//! One method per endpoint the client pipeline calls. Adapters translate
//! transport failures and non-success statuses into [`ApiError`]; callers
//! decide whether an error is fatal or a reason to fall back.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use kundli_domain::Coordinates;
use kundli_shared::{BasisQuery, ChartInput, GeoPlace, PlaceDetails, PlacePrediction};

/// Errors from calls to the gateway
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The gateway answered with a non-success status. `message` is the
    /// `error` field of its JSON body when present, else the raw body.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait GatewayApiPort: Send + Sync {
    /// `GET /api/places` - commercial-provider autocomplete.
    async fn places(&self, input: &str, types: &str) -> Result<Vec<PlacePrediction>, ApiError>;

    /// `GET /api/place-details` - coordinates for a prediction.
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApiError>;

    /// `POST /api/geo/search` - open-data forward geocoding.
    async fn geo_search(&self, query: &str) -> Result<Vec<GeoPlace>, ApiError>;

    /// `POST /api/geo/reverse` - name and timezone for a point.
    async fn geo_reverse(&self, coordinates: Coordinates) -> Result<GeoPlace, ApiError>;

    /// `GET /api/daily` - raw daily horoscope payload, not yet normalized.
    async fn daily(&self, query: &BasisQuery) -> Result<Value, ApiError>;

    /// `POST /api/chart` - the birth chart itself.
    async fn create_chart(&self, input: &ChartInput) -> Result<Value, ApiError>;

    /// `POST /api/dasha` - the vimshottari timeline under `dashas`.
    async fn dasha(&self, input: &ChartInput) -> Result<Value, ApiError>;

    /// `POST /api/predictions` - `predictions` and, from newer backends, `summary`.
    async fn predictions(&self, input: &ChartInput) -> Result<Value, ApiError>;

    /// `POST /api/transits` - `transits` for `on` (midday), or for now.
    async fn transits(&self, input: &ChartInput, on: Option<NaiveDate>) -> Result<Value, ApiError>;

    /// `POST /api/dasha/insights` - personalised notes under `insights`.
    async fn dasha_insights(&self, input: &ChartInput) -> Result<Value, ApiError>;
}
