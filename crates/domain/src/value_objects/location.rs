//! Geographic value objects
//!
//! A [`Location`] is what pages hand around and what gets persisted. It may be
//! partial: a place picked from a suggestion list whose detail lookup failed
//! only carries a display name. [`Location::resolve`] is the single gate that
//! turns it into a [`ResolvedLocation`], which always has coordinates and a
//! timezone.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum length of an IANA-style timezone identifier
pub const MIN_TIMEZONE_LENGTH: usize = 3;

/// Maximum length of an IANA-style timezone identifier
pub const MAX_TIMEZONE_LENGTH: usize = 64;

// ============================================================================
// Coordinates
// ============================================================================

/// A validated latitude/longitude pair (lat in [-90, 90], lon in [-180, 180])
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates", into = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Create validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either value is outside its range
    /// or is not a finite number.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::validation(format!(
                "latitude {lat} must be within [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::validation(format!(
                "longitude {lon} must be within [-180, 180]"
            )));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Short display form used when no place name is known.
    pub fn display(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}

#[derive(Serialize, Deserialize)]
struct RawCoordinates {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DomainError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

impl From<Coordinates> for RawCoordinates {
    fn from(c: Coordinates) -> Self {
        Self {
            lat: c.lat,
            lon: c.lon,
        }
    }
}

// ============================================================================
// Timezone
// ============================================================================

/// A timezone identifier of 3 to 64 characters (e.g. `Asia/Kolkata`, `UTC`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(String);

impl Timezone {
    /// The identifier substituted at outer entry points when none is supplied.
    pub const UTC: &'static str = "UTC";

    /// Create a validated timezone identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the identifier is shorter than 3
    /// or longer than 64 characters.
    pub fn new(tz: impl Into<String>) -> Result<Self, DomainError> {
        let tz = tz.into();
        let len = tz.chars().count();
        if len < MIN_TIMEZONE_LENGTH || len > MAX_TIMEZONE_LENGTH {
            return Err(DomainError::validation(format!(
                "timezone must be {MIN_TIMEZONE_LENGTH}-{MAX_TIMEZONE_LENGTH} characters"
            )));
        }
        Ok(Self(tz))
    }

    pub fn utc() -> Self {
        Self(Self::UTC.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> String {
        tz.0
    }
}

// ============================================================================
// Location
// ============================================================================

/// A place as selected by the user, possibly missing geographic fields.
///
/// This is also the persisted shape: `{"name", "lat", "lon", "tz"}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
}

impl Location {
    /// A place known only by its display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A place with all geographic fields set (not yet range-checked).
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, tz: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lat: Some(lat),
            lon: Some(lon),
            tz: Some(tz.into()),
        }
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.lat = Some(coordinates.lat());
        self.lon = Some(coordinates.lon());
        self
    }

    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }

    /// Promote to a [`ResolvedLocation`].
    ///
    /// An empty or whitespace-only timezone counts as missing.
    ///
    /// # Errors
    ///
    /// - `DomainError::IncompleteLocation` if lat, lon or tz is absent
    /// - `DomainError::Validation` if a present field is out of range
    pub fn resolve(&self) -> Result<ResolvedLocation, DomainError> {
        let lat = self
            .lat
            .ok_or(DomainError::incomplete_location("latitude"))?;
        let lon = self
            .lon
            .ok_or(DomainError::incomplete_location("longitude"))?;
        let tz = self
            .tz
            .as_deref()
            .filter(|tz| !tz.trim().is_empty())
            .ok_or(DomainError::incomplete_location("timezone"))?;

        Ok(ResolvedLocation {
            name: self.name.clone(),
            coordinates: Coordinates::new(lat, lon)?,
            timezone: Timezone::new(tz)?,
        })
    }

    /// True when [`Location::resolve`] would succeed.
    pub fn is_resolved(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Coordinates if both are present and in range.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon).ok(),
            _ => None,
        }
    }
}

/// A location with every geographic field present and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub name: String,
    pub coordinates: Coordinates,
    pub timezone: Timezone,
}

impl From<ResolvedLocation> for Location {
    fn from(resolved: ResolvedLocation) -> Self {
        Location::new(
            resolved.name,
            resolved.coordinates.lat(),
            resolved.coordinates.lon(),
            String::from(resolved.timezone),
        )
    }
}

// ============================================================================
// PlaceCandidate
// ============================================================================

/// One entry of a place suggestion list.
///
/// Candidates from the commercial provider carry only a description and an
/// opaque `place_id`; the open-data provider returns coordinates and a
/// timezone up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
}

impl PlaceCandidate {
    /// A commercial-provider prediction (no coordinates yet).
    pub fn from_prediction(description: impl Into<String>, place_id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            place_id: Some(place_id.into()),
            coordinates: None,
            tz: None,
        }
    }

    /// An open-data result that already knows where it is.
    pub fn from_open_data(
        description: impl Into<String>,
        coordinates: Coordinates,
        tz: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            place_id: None,
            coordinates: Some(coordinates),
            tz,
        }
    }

    /// Whether a detail lookup is required before this can become a Location.
    pub fn needs_details(&self) -> bool {
        self.coordinates.is_none() && self.place_id.is_some()
    }

    /// Promote with whatever is known right now.
    pub fn to_location(&self) -> Location {
        let mut location = Location::named(self.description.clone());
        if let Some(coordinates) = self.coordinates {
            location = location.with_coordinates(coordinates);
        }
        if let Some(tz) = &self.tz {
            location = location.with_timezone(tz.clone());
        }
        location
    }
}
