//! Horoscope backend client
//!
//! Forwards horoscope, chart, and open-data geocoding calls to the
//! computation service at `SERVER_API_URL`.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Response};
use std::time::Duration;

use kundli_domain::Coordinates;
use kundli_shared::{
    BasisQuery, ChartInput, ChartOperation, GeoPlace, GeoSearchRequest, ReverseGeocodeRequest,
};

use crate::infrastructure::ports::{HoroscopeBackendPort, ProviderError, RelayResponse};

/// Default backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Clone)]
pub struct HoroscopeBackendClient {
    client: Client,
    base_url: String,
}

impl HoroscopeBackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Decode a JSON body, surfacing non-success statuses with their raw text.
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
            return Err(ProviderError::upstream(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

impl HoroscopeBackendClient {
    /// Capture status, content type and body without interpreting them.
    async fn into_relay(response: Response) -> Result<RelayResponse, ProviderError> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Ok(RelayResponse {
            status,
            content_type,
            body,
        })
    }
}

impl Default for HoroscopeBackendClient {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, Duration::from_secs(15))
    }
}

#[async_trait]
impl HoroscopeBackendPort for HoroscopeBackendClient {
    async fn horoscope(&self, query: &BasisQuery) -> Result<RelayResponse, ProviderError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, query.backend_path()))
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let relay = Self::into_relay(response).await?;
        tracing::debug!(status = relay.status, path = %query.backend_path(), "Horoscope backend responded");
        Ok(relay)
    }

    async fn compute(
        &self,
        operation: ChartOperation,
        input: &ChartInput,
        date: Option<String>,
    ) -> Result<RelayResponse, ProviderError> {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, operation.backend_path()))
            .json(input);
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let relay = Self::into_relay(response).await?;
        tracing::debug!(status = relay.status, path = operation.backend_path(), "Chart backend responded");
        Ok(relay)
    }

    async fn search_places(&self, query: &str) -> Result<Vec<GeoPlace>, ProviderError> {
        let response = self
            .client
            .post(format!("{}/api/geo/search", self.base_url))
            .json(&GeoSearchRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<GeoPlace, ProviderError> {
        let response = self
            .client
            .post(format!("{}/api/geo/reverse", self.base_url))
            .json(&ReverseGeocodeRequest {
                lat: coordinates.lat(),
                lon: coordinates.lon(),
            })
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use kundli_domain::Location;
    use kundli_shared::build_query;
    use std::collections::HashMap;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    fn query() -> BasisQuery {
        build_query("lagna", &Location::new("", 28.6, 77.2, "Asia/Kolkata"), None).unwrap()
    }

    #[tokio::test]
    async fn horoscope_forwards_query_and_relays_status() {
        let router = Router::new().route(
            "/api/horoscope/today",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let echo = format!(
                    "{}|{}|{}|{}",
                    params["basis"], params["lat"], params["lon"], params["tz"]
                );
                (StatusCode::ACCEPTED, [("content-type", "text/plain")], echo)
            }),
        );
        let client = HoroscopeBackendClient::new(&serve(router).await, Duration::from_secs(5));

        let relay = client.horoscope(&query()).await.unwrap();
        assert_eq!(relay.status, 202);
        assert_eq!(relay.content_type.as_deref(), Some("text/plain"));
        assert_eq!(relay.body, "lagna|28.6|77.2|Asia/Kolkata");
    }

    #[tokio::test]
    async fn compute_posts_input_and_forwards_transit_date() {
        let router = Router::new()
            .route(
                "/v1/transits",
                post(
                    |Query(params): Query<HashMap<String, String>>,
                     Json(input): Json<ChartInput>| async move {
                        Json(serde_json::json!({
                            "date": params.get("date"),
                            "name": input.name,
                        }))
                    },
                ),
            )
            .route(
                "/v1/dasha/vimshottari",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "{\"detail\":\"boom\"}") }),
            );
        let client = HoroscopeBackendClient::new(&serve(router).await, Duration::from_secs(5));
        let input = ChartInput::new(
            "Asha",
            "1990-04-12T05:30:00Z",
            &Location::new("Pune", 18.52, 73.85, "Asia/Kolkata"),
        );

        let relay = client
            .compute(ChartOperation::Transits, &input, Some("2025-03-14T12:00:00".into()))
            .await
            .unwrap();
        assert_eq!(relay.status, 200);
        let body: serde_json::Value = serde_json::from_str(&relay.body).unwrap();
        assert_eq!(body["date"], "2025-03-14T12:00:00");
        assert_eq!(body["name"], "Asha");

        // Backend failures are relayed, not turned into errors.
        let relay = client
            .compute(ChartOperation::Dasha, &input, None)
            .await
            .unwrap();
        assert_eq!(relay.status, 500);
        assert_eq!(relay.body, r#"{"detail":"boom"}"#);
    }

    #[tokio::test]
    async fn search_decodes_places() {
        let router = Router::new().route(
            "/api/geo/search",
            post(|Json(body): Json<GeoSearchRequest>| async move {
                Json(serde_json::json!([
                    { "name": body.query, "lat": 51.5, "lon": -0.12, "tz": "Europe/London" }
                ]))
            }),
        );
        let client = HoroscopeBackendClient::new(&serve(router).await, Duration::from_secs(5));

        let places = client.search_places("London").await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "London");
        assert_eq!(places[0].tz.as_deref(), Some("Europe/London"));
    }

    #[tokio::test]
    async fn reverse_non_success_keeps_raw_body() {
        let router = Router::new().route(
            "/api/geo/reverse",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "geocoder down") }),
        );
        let client = HoroscopeBackendClient::new(&serve(router).await, Duration::from_secs(5));

        let err = client
            .reverse_geocode(Coordinates::new(10.0, 10.0).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, ProviderError::upstream(503, "geocoder down"));
    }

    #[tokio::test]
    async fn unreachable_backend_is_request_failure() {
        let client = HoroscopeBackendClient::new("http://127.0.0.1:1", Duration::from_secs(2));
        let err = client.search_places("London").await.unwrap_err();
        assert!(matches!(err, ProviderError::RequestFailed(_)));
    }
}
