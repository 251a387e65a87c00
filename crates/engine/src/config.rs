//! Gateway configuration from environment variables.

use std::time::Duration;

use crate::infrastructure::{backend::DEFAULT_BACKEND_URL, places::DEFAULT_PLACES_API_URL};

/// Default bound on every outbound HTTP call.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub backend_url: String,
    /// `None` disables the commercial places endpoints (501).
    pub places_api_key: Option<String>,
    pub places_api_url: String,
    pub upstream_timeout: Duration,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend_url = get("SERVER_API_URL")
            .or_else(|| get("NEXT_PUBLIC_API_URL"))
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.into());
        let places_api_key =
            get("GOOGLE_MAPS_API_KEY").or_else(|| get("NEXT_PUBLIC_GOOGLE_MAPS_API_KEY"));
        let places_api_url =
            get("PLACES_API_URL").unwrap_or_else(|| DEFAULT_PLACES_API_URL.into());
        let upstream_timeout = Duration::from_secs(
            get("UPSTREAM_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        );
        let server_host = get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let server_port: u16 = get("SERVER_PORT")
            .or_else(|| get("PORT"))
            .unwrap_or_else(|| "3000".into())
            .parse()
            .unwrap_or(3000);

        Self {
            backend_url,
            places_api_key,
            places_api_url,
            upstream_timeout,
            server_host,
            server_port,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> GatewayConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.places_api_key, None);
        assert_eq!(config.upstream_timeout, Duration::from_secs(15));
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cors_allowed_origins, None);
    }

    #[test]
    fn public_fallbacks_apply_when_primary_unset() {
        let config = config(&[
            ("NEXT_PUBLIC_API_URL", "http://api:9000"),
            ("NEXT_PUBLIC_GOOGLE_MAPS_API_KEY", "pub-key"),
            ("PORT", "8080"),
        ]);
        assert_eq!(config.backend_url, "http://api:9000");
        assert_eq!(config.places_api_key.as_deref(), Some("pub-key"));
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn primary_wins_over_fallback() {
        let config = config(&[
            ("SERVER_API_URL", "http://primary"),
            ("NEXT_PUBLIC_API_URL", "http://fallback"),
            ("GOOGLE_MAPS_API_KEY", "server-key"),
            ("NEXT_PUBLIC_GOOGLE_MAPS_API_KEY", "pub-key"),
        ]);
        assert_eq!(config.backend_url, "http://primary");
        assert_eq!(config.places_api_key.as_deref(), Some("server-key"));
    }

    #[test]
    fn blank_key_counts_as_unconfigured() {
        let config = config(&[("GOOGLE_MAPS_API_KEY", "  ")]);
        assert_eq!(config.places_api_key, None);
    }

    #[test]
    fn bad_timeout_falls_back() {
        assert_eq!(
            config(&[("UPSTREAM_TIMEOUT_SECS", "0")]).upstream_timeout,
            Duration::from_secs(15)
        );
        assert_eq!(
            config(&[("UPSTREAM_TIMEOUT_SECS", "7")]).upstream_timeout,
            Duration::from_secs(7)
        );
    }
}
