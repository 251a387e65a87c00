//! HTTP adapter for the gateway
//!
//! Implements [`GatewayApiPort`] with reqwest. Every request carries the
//! configured timeout; non-success statuses become [`ApiError::Status`] with
//! the gateway's `error` message when its body parses as one.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use kundli_domain::Coordinates;
use kundli_shared::{
    transit_instant, BasisQuery, ChartInput, ChartOperation, ErrorBody, GeoPlace,
    GeoSearchRequest, PlaceDetails, PlacePrediction, PlacesResponse, ReverseGeocodeRequest,
};

use crate::ports::{ApiError, GatewayApiPort};

#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: Url,
}

impl GatewayClient {
    /// # Errors
    ///
    /// `ApiError::RequestFailed` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        // A trailing slash makes `join` append rather than replace the last segment.
        let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| ApiError::RequestFailed(format!("invalid gateway URL: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &crate::PlayerConfig) -> Result<Self, ApiError> {
        Self::new(&config.gateway_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::RequestFailed(format!("invalid path {path}: {e}")))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ApiError::status(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

impl GatewayClient {
    async fn compute(
        &self,
        operation: ChartOperation,
        input: &ChartInput,
        date: Option<String>,
    ) -> Result<Value, ApiError> {
        let mut request = self.client.post(self.endpoint(operation.route())?).json(input);
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }
        let response = request.send().await.map_err(request_failed)?;

        Self::read_json(response).await
    }
}

fn request_failed(e: reqwest::Error) -> ApiError {
    ApiError::RequestFailed(e.to_string())
}

#[async_trait]
impl GatewayApiPort for GatewayClient {
    async fn places(&self, input: &str, types: &str) -> Result<Vec<PlacePrediction>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/places")?)
            .query(&[("q", input), ("types", types)])
            .send()
            .await
            .map_err(request_failed)?;

        let body: PlacesResponse = Self::read_json(response).await?;
        Ok(body.predictions)
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApiError> {
        let response = self
            .client
            .get(self.endpoint("api/place-details")?)
            .query(&[("place_id", place_id)])
            .send()
            .await
            .map_err(request_failed)?;

        Self::read_json(response).await
    }

    async fn geo_search(&self, query: &str) -> Result<Vec<GeoPlace>, ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/geo/search")?)
            .json(&GeoSearchRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(request_failed)?;

        Self::read_json(response).await
    }

    async fn geo_reverse(&self, coordinates: Coordinates) -> Result<GeoPlace, ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/geo/reverse")?)
            .json(&ReverseGeocodeRequest {
                lat: coordinates.lat(),
                lon: coordinates.lon(),
            })
            .send()
            .await
            .map_err(request_failed)?;

        Self::read_json(response).await
    }

    async fn daily(&self, query: &BasisQuery) -> Result<Value, ApiError> {
        // Dated queries go through the dated horoscope route; the gateway
        // exposes it under the same path as the backend.
        let path = match query.date() {
            Some(_) => query.backend_path(),
            None => "api/daily".to_string(),
        };
        let response = self
            .client
            .get(self.endpoint(&path)?)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(request_failed)?;

        Self::read_json(response).await
    }

    async fn create_chart(&self, input: &ChartInput) -> Result<Value, ApiError> {
        self.compute(ChartOperation::Chart, input, None).await
    }

    async fn dasha(&self, input: &ChartInput) -> Result<Value, ApiError> {
        self.compute(ChartOperation::Dasha, input, None).await
    }

    async fn predictions(&self, input: &ChartInput) -> Result<Value, ApiError> {
        self.compute(ChartOperation::Predictions, input, None).await
    }

    async fn transits(&self, input: &ChartInput, on: Option<NaiveDate>) -> Result<Value, ApiError> {
        self.compute(ChartOperation::Transits, input, on.map(transit_instant))
            .await
    }

    async fn dasha_insights(&self, input: &ChartInput) -> Result<Value, ApiError> {
        self.compute(ChartOperation::DashaInsights, input, None).await
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
    use serde_json::json;
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base: &str) -> GatewayClient {
        GatewayClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn rejects_relative_base_url() {
        assert!(GatewayClient::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn base_url_keeps_its_path_prefix() {
        let client = client("https://kundli.example/app");
        assert_eq!(
            client.endpoint("api/daily").unwrap().as_str(),
            "https://kundli.example/app/api/daily"
        );
    }

    #[tokio::test]
    async fn places_sends_query_and_types() {
        let router = Router::new().route(
            "/api/places",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "predictions": [{
                        "description": format!("{} ({})", params["q"], params["types"]),
                        "place_id": "p1"
                    }]
                }))
            }),
        );
        let base = serve(router).await;

        let predictions = client(&base).places("Lond", "(cities)").await.unwrap();
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].description, "Lond ((cities))");
        assert_eq!(predictions[0].place_id, "p1");
    }

    #[tokio::test]
    async fn error_body_message_is_surfaced() {
        let router = Router::new().route(
            "/api/places",
            get(|| async {
                (
                    StatusCode::NOT_IMPLEMENTED,
                    Json(json!({ "error": "Places API not configured" })),
                )
            }),
        );
        let base = serve(router).await;

        let err = client(&base).places("Delhi", "(cities)").await.unwrap_err();
        assert_eq!(err, ApiError::status(501, "Places API not configured"));
    }

    #[tokio::test]
    async fn missing_details_is_not_found() {
        let router = Router::new().route(
            "/api/place-details",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))) }),
        );
        let base = serve(router).await;

        let err = client(&base).place_details("nope").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn reverse_posts_coordinates() {
        let router = Router::new().route(
            "/api/geo/reverse",
            post(|Json(body): Json<ReverseGeocodeRequest>| async move {
                Json(json!({ "name": "Pune", "lat": body.lat, "lon": body.lon, "tz": "Asia/Kolkata" }))
            }),
        );
        let base = serve(router).await;

        let place = client(&base)
            .geo_reverse(Coordinates::new(18.52, 73.85).unwrap())
            .await
            .unwrap();
        assert_eq!(place.name, "Pune");
        assert_eq!(place.lat, 18.52);
        assert_eq!(place.tz.as_deref(), Some("Asia/Kolkata"));
    }

    #[tokio::test]
    async fn daily_forwards_basis_params() {
        let router = Router::new().route(
            "/api/daily",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({ "cards": [{ "sign": params["basis"].clone(), "tz": params["tz"].clone() }] }))
            }),
        );
        let base = serve(router).await;
        let query = build_query(
            "lagna",
            &Location::new("Delhi", 28.6, 77.2, "Asia/Kolkata"),
            None,
        )
        .unwrap();

        let raw = client(&base).daily(&query).await.unwrap();
        assert_eq!(raw["cards"][0]["sign"], "lagna");
        assert_eq!(raw["cards"][0]["tz"], "Asia/Kolkata");
    }

    #[tokio::test]
    async fn non_json_success_is_invalid_response() {
        let router = Router::new().route("/api/geo/search", post(|| async { "not json" }));
        let base = serve(router).await;

        let err = client(&base).geo_search("Delhi").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn transits_send_midday_instant_for_a_day() {
        let router = Router::new().route(
            "/api/transits",
            post(
                |Query(params): Query<HashMap<String, String>>, Json(input): Json<ChartInput>| async move {
                    Json(json!({ "transits": [{ "date": params.get("date"), "for": input.name }] }))
                },
            ),
        );
        let base = serve(router).await;
        let input = ChartInput::new(
            "Asha",
            "1990-04-12T05:30:00Z",
            &Location::new("Pune", 18.52, 73.85, "Asia/Kolkata"),
        );

        let raw = client(&base)
            .transits(&input, NaiveDate::from_ymd_opt(2025, 3, 14))
            .await
            .unwrap();
        assert_eq!(raw["transits"][0]["date"], "2025-03-14T12:00:00");
        assert_eq!(raw["transits"][0]["for"], "Asha");

        let raw = client(&base).transits(&input, None).await.unwrap();
        assert!(raw["transits"][0]["date"].is_null());
    }
}
