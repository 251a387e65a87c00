//! Basis/query composer
//!
//! Turns a basis, a [`Location`] and an optional target date into the query
//! sent to the horoscope backend. Nothing is built unless the basis is one of
//! the known values and the location has all three geographic fields.
//!
//! `UTC` is substituted for a missing timezone only in [`BasisQuery::from_params`],
//! the lenient entry point used by `/api/daily`. [`BasisQuery::new`] never
//! fills anything in.

use chrono::NaiveDate;
use thiserror::Error;

use kundli_domain::{Basis, DomainError, Location, ResolvedLocation, Timezone};

use crate::requests::BasisParams;

/// Backend path for today's predictions
pub const TODAY_PATH: &str = "/api/horoscope/today";

/// Date format accepted for dated queries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    /// A parameter failed validation
    #[error("invalid params: {0}")]
    InvalidInput(String),

    /// The location is missing latitude, longitude or timezone
    #[error("{0}")]
    IncompleteLocation(String),
}

impl QueryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<DomainError> for QueryError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::IncompleteLocation { .. } => Self::IncompleteLocation(err.to_string()),
            DomainError::Validation(msg) | DomainError::Parse(msg) => Self::InvalidInput(msg),
        }
    }
}

/// A validated request for daily predictions
#[derive(Debug, Clone, PartialEq)]
pub struct BasisQuery {
    basis: Basis,
    location: ResolvedLocation,
    date: Option<NaiveDate>,
}

impl BasisQuery {
    /// Build from an already-typed basis.
    ///
    /// # Errors
    ///
    /// - `QueryError::IncompleteLocation` if lat, lon or tz is absent (an empty
    ///   timezone counts as absent)
    /// - `QueryError::InvalidInput` if a coordinate or the timezone is out of range
    pub fn new(
        basis: Basis,
        location: &Location,
        date: Option<NaiveDate>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            basis,
            location: location.resolve()?,
            date,
        })
    }

    /// Lenient outer entry point: basis defaults to `moon_sign` and timezone
    /// to `UTC`; latitude and longitude must be present and numeric.
    pub fn from_params(params: &BasisParams) -> Result<Self, QueryError> {
        let basis = parse_basis(params.basis.as_deref())?;
        let lat = parse_coordinate("lat", params.lat.as_deref())?;
        let lon = parse_coordinate("lon", params.lon.as_deref())?;
        let tz = non_empty(params.tz.as_deref()).unwrap_or(Timezone::UTC);

        Self::new(basis, &Location::new("", lat, lon, tz), None)
    }

    /// Strict entry point: latitude, longitude and timezone must all be
    /// supplied; only the basis has a default.
    pub fn from_required_params(params: &BasisParams) -> Result<Self, QueryError> {
        let (Some(lat), Some(lon), Some(tz)) = (
            non_empty(params.lat.as_deref()),
            non_empty(params.lon.as_deref()),
            non_empty(params.tz.as_deref()),
        ) else {
            return Err(QueryError::IncompleteLocation(
                "lat, lon, tz required".to_string(),
            ));
        };

        let basis = parse_basis(params.basis.as_deref())?;
        let lat = parse_coordinate("lat", Some(lat))?;
        let lon = parse_coordinate("lon", Some(lon))?;

        Self::new(basis, &Location::new("", lat, lon, tz), None)
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn location(&self) -> &ResolvedLocation {
        &self.location
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Query parameters in wire order: basis, lat, lon, tz.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("basis", self.basis.as_str().to_string()),
            ("lat", self.location.coordinates.lat().to_string()),
            ("lon", self.location.coordinates.lon().to_string()),
            ("tz", self.location.timezone.as_str().to_string()),
        ]
    }

    /// Backend path: today, or the dated variant.
    pub fn backend_path(&self) -> String {
        match self.date {
            Some(date) => format!("/api/horoscope/{}", date.format(DATE_FORMAT)),
            None => TODAY_PATH.to_string(),
        }
    }
}

/// Compose a query from a textual basis.
///
/// # Errors
///
/// `QueryError::InvalidInput` for an unknown basis, otherwise as [`BasisQuery::new`].
pub fn build_query(
    basis: &str,
    location: &Location,
    date: Option<NaiveDate>,
) -> Result<BasisQuery, QueryError> {
    let basis: Basis = basis.parse()?;
    BasisQuery::new(basis, location, date)
}

/// Parse a `YYYY-MM-DD` target date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| QueryError::invalid(format!("date must be YYYY-MM-DD, got '{raw}'")))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_basis(raw: Option<&str>) -> Result<Basis, QueryError> {
    match raw.filter(|v| !v.is_empty()) {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(Basis::default()),
    }
}

fn parse_coordinate(field: &'static str, raw: Option<&str>) -> Result<f64, QueryError> {
    let raw = non_empty(raw).ok_or_else(|| QueryError::invalid(format!("{field} is required")))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| QueryError::invalid(format!("{field} must be a number")))?;
    if !value.is_finite() {
        return Err(QueryError::invalid(format!("{field} must be a number")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Location {
        Location::new("Delhi", 28.6139, 77.209, "Asia/Kolkata")
    }

    fn params(basis: Option<&str>, lat: Option<&str>, lon: Option<&str>, tz: Option<&str>) -> BasisParams {
        BasisParams {
            basis: basis.map(String::from),
            lat: lat.map(String::from),
            lon: lon.map(String::from),
            tz: tz.map(String::from),
        }
    }

    #[test]
    fn builds_today_query_in_wire_order() {
        let query = build_query("lagna", &delhi(), None).unwrap();
        assert_eq!(query.backend_path(), "/api/horoscope/today");
        assert_eq!(
            query.query_pairs(),
            vec![
                ("basis", "lagna".to_string()),
                ("lat", "28.6139".to_string()),
                ("lon", "77.209".to_string()),
                ("tz", "Asia/Kolkata".to_string()),
            ]
        );
    }

    #[test]
    fn empty_timezone_is_incomplete_location() {
        let location = Location::new("", 28.6, 77.2, "");
        let err = build_query("lagna", &location, None).unwrap_err();
        assert!(matches!(err, QueryError::IncompleteLocation(_)));
    }

    #[test]
    fn name_only_location_is_incomplete() {
        let err = build_query("moon_sign", &Location::named("Delhi"), None).unwrap_err();
        assert!(matches!(err, QueryError::IncompleteLocation(_)));
    }

    #[test]
    fn unknown_basis_is_invalid_input() {
        let err = build_query("weekly", &delhi(), None).unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput(_)));
    }

    #[test]
    fn basis_must_match_exactly() {
        for raw in ["LAGNA", " lagna", "Sun_Sign"] {
            let err = build_query(raw, &delhi(), None).unwrap_err();
            assert!(matches!(err, QueryError::InvalidInput(_)), "{raw:?}");
        }
        let err = BasisQuery::from_params(&params(Some(" lagna "), Some("28.6"), Some("77.2"), None))
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput(_)));
    }

    #[test]
    fn dated_query_uses_dated_path() {
        let date = parse_date("2025-03-14").unwrap();
        let query = build_query("sun_sign", &delhi(), Some(date)).unwrap();
        assert_eq!(query.backend_path(), "/api/horoscope/2025-03-14");
    }

    #[test]
    fn bad_dates_are_rejected() {
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("14/03/2025").is_err());
    }

    #[test]
    fn lenient_params_apply_outer_defaults() {
        let query = BasisQuery::from_params(&params(None, Some("51.5"), Some("-0.12"), None)).unwrap();
        assert_eq!(query.basis(), Basis::MoonSign);
        assert_eq!(query.location().timezone.as_str(), "UTC");
    }

    #[test]
    fn lenient_params_reject_out_of_range() {
        let err = BasisQuery::from_params(&params(None, Some("91"), Some("0"), None)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput(_)));
        let err = BasisQuery::from_params(&params(None, Some("0"), Some("abc"), None)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput(_)));
        let err = BasisQuery::from_params(&params(None, None, Some("0"), None)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput(_)));
    }

    #[test]
    fn lenient_params_reject_short_timezone() {
        let err = BasisQuery::from_params(&params(None, Some("1"), Some("1"), Some("AB"))).unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput(_)));
    }

    #[test]
    fn strict_params_require_timezone() {
        let err =
            BasisQuery::from_required_params(&params(Some("lagna"), Some("1"), Some("1"), None))
                .unwrap_err();
        assert_eq!(
            err,
            QueryError::IncompleteLocation("lat, lon, tz required".to_string())
        );
    }

    #[test]
    fn strict_params_still_validate_basis() {
        let err = BasisQuery::from_required_params(&params(
            Some("weekly"),
            Some("1"),
            Some("1"),
            Some("UTC"),
        ))
        .unwrap_err();
        assert!(matches!(err, QueryError::InvalidInput(_)));
    }
}
