//! Birth-chart requests
//!
//! The gateway relays chart computations to the backend as-is. Birth details
//! are checked here first so that an obviously bad request never leaves the
//! gateway.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use kundli_domain::Location;

use crate::composer::QueryError;

pub const MAX_NAME_CHARS: usize = 200;

/// Birth details sent with every chart computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub name: String,
    /// Birth instant, RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS`.
    pub local_datetime: String,
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Birth time is not known; the backend assumes noon.
    #[serde(default)]
    pub unknown_time: bool,
}

impl ChartInput {
    /// Input for a birth at a selected place.
    pub fn new(
        name: impl Into<String>,
        local_datetime: impl Into<String>,
        place: &Location,
    ) -> Self {
        Self {
            name: name.into(),
            local_datetime: local_datetime.into(),
            place: place.name.clone(),
            lat: place.lat,
            lon: place.lon,
            timezone: place.tz.clone().filter(|tz| !tz.trim().is_empty()),
            unknown_time: false,
        }
    }

    pub fn with_unknown_time(mut self) -> Self {
        self.unknown_time = true;
        self
    }

    /// # Errors
    ///
    /// `QueryError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<(), QueryError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(QueryError::invalid("name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(QueryError::invalid(format!(
                "name exceeds maximum length of {MAX_NAME_CHARS}"
            )));
        }
        if self.place.trim().is_empty() {
            return Err(QueryError::invalid("place cannot be empty"));
        }
        parse_instant(&self.local_datetime)?;
        if let Some(lat) = self.lat {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(QueryError::invalid(format!("lat out of range: {lat}")));
            }
        }
        if let Some(lon) = self.lon {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(QueryError::invalid(format!("lon out of range: {lon}")));
            }
        }
        Ok(())
    }
}

/// Parse an RFC 3339 or naive ISO instant.
pub fn parse_instant(raw: &str) -> Result<NaiveDateTime, QueryError> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| raw.parse::<NaiveDateTime>())
        .map_err(|_| QueryError::invalid(format!("not an ISO date-time: '{raw}'")))
}

/// Transit instant for a calendar day; midday keeps every timezone on that day.
pub fn transit_instant(date: NaiveDate) -> String {
    format!("{date}T12:00:00")
}

/// One chart computation the backend offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartOperation {
    Chart,
    Dasha,
    Predictions,
    Transits,
    DashaInsights,
}

impl ChartOperation {
    pub const ALL: [ChartOperation; 5] = [
        ChartOperation::Chart,
        ChartOperation::Dasha,
        ChartOperation::Predictions,
        ChartOperation::Transits,
        ChartOperation::DashaInsights,
    ];

    /// Gateway route.
    pub fn route(&self) -> &'static str {
        match self {
            ChartOperation::Chart => "/api/chart",
            ChartOperation::Dasha => "/api/dasha",
            ChartOperation::Predictions => "/api/predictions",
            ChartOperation::Transits => "/api/transits",
            ChartOperation::DashaInsights => "/api/dasha/insights",
        }
    }

    /// Backend path the route relays to.
    pub fn backend_path(&self) -> &'static str {
        match self {
            ChartOperation::Chart => "/v1/chart",
            ChartOperation::Dasha => "/v1/dasha/vimshottari",
            ChartOperation::Predictions => "/v1/predictions",
            ChartOperation::Transits => "/v1/transits",
            ChartOperation::DashaInsights => "/v1/dasha/insights",
        }
    }

    /// Whether the operation takes a `date` query parameter.
    pub fn accepts_date(&self) -> bool {
        matches!(self, ChartOperation::Transits)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartOperation::Chart => "chart",
            ChartOperation::Dasha => "dashas",
            ChartOperation::Predictions => "predictions",
            ChartOperation::Transits => "transits",
            ChartOperation::DashaInsights => "dasha insights",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ChartInput {
        ChartInput::new(
            "Asha",
            "1990-04-12T05:30:00Z",
            &Location::new("Pune", 18.52, 73.85, "Asia/Kolkata"),
        )
    }

    #[test]
    fn built_from_a_selected_place() {
        let input = input();
        assert_eq!(input.place, "Pune");
        assert_eq!(input.timezone.as_deref(), Some("Asia/Kolkata"));
        assert!(input.validate().is_ok());

        let json = serde_json::to_value(input.with_unknown_time()).unwrap();
        assert_eq!(json["unknown_time"], true);
    }

    #[test]
    fn name_only_place_omits_geo_fields() {
        let input = ChartInput::new("Asha", "1990-04-12T05:30:00", &Location::named("Pune"));
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("lat").is_none());
        assert!(json.get("timezone").is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_bad_birth_details() {
        let mut blank = input();
        blank.name = "  ".into();
        assert!(blank.validate().is_err());

        let mut long = input();
        long.name = "x".repeat(MAX_NAME_CHARS + 1);
        assert!(long.validate().is_err());

        let mut when = input();
        when.local_datetime = "12/04/1990".into();
        assert!(when.validate().is_err());

        let mut lat = input();
        lat.lat = Some(91.0);
        assert!(lat.validate().is_err());
    }

    #[test]
    fn only_transits_take_a_date() {
        let dated: Vec<_> = ChartOperation::ALL
            .into_iter()
            .filter(ChartOperation::accepts_date)
            .collect();
        assert_eq!(dated, vec![ChartOperation::Transits]);
        assert_eq!(
            transit_instant(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()),
            "2025-03-14T12:00:00"
        );
        assert!(parse_instant("2025-03-14T12:00:00").is_ok());
    }
}
