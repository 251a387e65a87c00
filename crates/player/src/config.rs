//! Client configuration
//!
//! Defaults match the web client; each may be overridden from the
//! environment. The preview location is what the home page shows before the
//! user has picked a place.

use std::time::Duration;

use kundli_domain::Location;

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Quiet period after the last keystroke before a search is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_PREVIEW_NAME: &str = "Delhi, India";
pub const DEFAULT_PREVIEW_LAT: f64 = 28.6139;
pub const DEFAULT_PREVIEW_LON: f64 = 77.2090;
pub const DEFAULT_PREVIEW_TZ: &str = "Asia/Kolkata";

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub gateway_url: String,
    pub request_timeout: Duration,
    pub debounce: Duration,
    pub geolocation_timeout: Duration,
    pub preview_location: Location,
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank or unparseable values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let get_f64 = |key: &str| get(key).and_then(|v| v.parse::<f64>().ok());

        let gateway_url = get("KUNDLI_GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.into());

        let mut preview_location = Location::new(
            DEFAULT_PREVIEW_NAME,
            get_f64("KUNDLI_PREVIEW_LAT").unwrap_or(DEFAULT_PREVIEW_LAT),
            get_f64("KUNDLI_PREVIEW_LON").unwrap_or(DEFAULT_PREVIEW_LON),
            get("KUNDLI_PREVIEW_TZ").unwrap_or_else(|| DEFAULT_PREVIEW_TZ.into()),
        );
        if !preview_location.is_resolved() {
            tracing::warn!(
                location = ?preview_location,
                "Preview location override is invalid, using default"
            );
            preview_location = Self::default_preview_location();
        }

        Self {
            gateway_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            debounce: DEFAULT_DEBOUNCE,
            geolocation_timeout: DEFAULT_GEOLOCATION_TIMEOUT,
            preview_location,
        }
    }

    pub fn default_preview_location() -> Location {
        Location::new(
            DEFAULT_PREVIEW_NAME,
            DEFAULT_PREVIEW_LAT,
            DEFAULT_PREVIEW_LON,
            DEFAULT_PREVIEW_TZ,
        )
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> PlayerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlayerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.debounce, Duration::from_millis(250));
        assert_eq!(config.geolocation_timeout, Duration::from_secs(10));
        assert_eq!(config.preview_location.lat, Some(28.6139));
        assert_eq!(config.preview_location.tz.as_deref(), Some("Asia/Kolkata"));
    }

    #[test]
    fn preview_location_is_overridable() {
        let config = config(&[
            ("KUNDLI_PREVIEW_LAT", "51.5072"),
            ("KUNDLI_PREVIEW_LON", "-0.1276"),
            ("KUNDLI_PREVIEW_TZ", "Europe/London"),
            ("KUNDLI_GATEWAY_URL", "https://kundli.example"),
        ]);
        assert_eq!(config.gateway_url, "https://kundli.example");
        assert_eq!(config.preview_location.lon, Some(-0.1276));
        assert_eq!(config.preview_location.tz.as_deref(), Some("Europe/London"));
    }

    #[test]
    fn invalid_preview_override_falls_back_to_default() {
        let config = config(&[("KUNDLI_PREVIEW_LAT", "123.0")]);
        assert_eq!(config.preview_location, PlayerConfig::default_preview_location());
    }

    #[test]
    fn unparseable_numbers_are_ignored() {
        let config = config(&[("KUNDLI_PREVIEW_LAT", "north")]);
        assert_eq!(config.preview_location.lat, Some(DEFAULT_PREVIEW_LAT));
    }
}
