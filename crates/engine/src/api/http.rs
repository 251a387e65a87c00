//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use kundli_shared::{
    parse_date, BasisParams, BasisQuery, ChartInput, ChartOperation, GeoPlace, GeoSearchRequest,
    PlaceDetails, PlaceDetailsQuery, PlacesQuery, PlacesResponse, ReverseGeocodeRequest,
    TransitQuery,
};

use crate::app::App;
use crate::infrastructure::ports::RelayResponse;
use crate::use_cases::horoscope::DEFAULT_CONTENT_TYPE;
use crate::use_cases::GatewayError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/daily", get(daily))
        .route("/api/horoscope/today", get(horoscope_today))
        .route("/api/horoscope/{date}", get(horoscope_on_date))
        .route("/api/geo/search", post(geo_search))
        .route("/api/geo/reverse", post(geo_reverse))
        .route("/api/places", get(places))
        .route("/api/place-details", get(place_details))
        .route(ChartOperation::Chart.route(), post(chart))
        .route(ChartOperation::Dasha.route(), post(dasha))
        .route(ChartOperation::Predictions.route(), post(predictions))
        .route(ChartOperation::Transits.route(), post(transits))
        .route(ChartOperation::DashaInsights.route(), post(dasha_insights))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Horoscope relay
// =============================================================================

/// Lenient entry point: basis defaults to `moon_sign`, tz to `UTC`.
async fn daily(
    State(app): State<Arc<App>>,
    Query(params): Query<BasisParams>,
) -> Result<Response, GatewayError> {
    let query = BasisQuery::from_params(&params)
        .map_err(|e| GatewayError::from_query(e, "invalid params"))?;
    let response = app.use_cases.horoscope.fetch.execute(&query).await?;
    Ok(relay(response))
}

async fn horoscope_today(
    State(app): State<Arc<App>>,
    Query(params): Query<BasisParams>,
) -> Result<Response, GatewayError> {
    let query = BasisQuery::from_required_params(&params)
        .map_err(|e| GatewayError::from_query(e, "invalid params"))?;
    let response = app.use_cases.horoscope.fetch.execute(&query).await?;
    Ok(relay(response))
}

async fn horoscope_on_date(
    State(app): State<Arc<App>>,
    Path(date): Path<String>,
    Query(params): Query<BasisParams>,
) -> Result<Response, GatewayError> {
    let date = parse_date(&date).map_err(|e| GatewayError::from_query(e, "invalid date"))?;
    let query = BasisQuery::from_required_params(&params)
        .map_err(|e| GatewayError::from_query(e, "invalid params"))?
        .with_date(date);
    let response = app.use_cases.horoscope.fetch.execute(&query).await?;
    Ok(relay(response))
}

fn relay(response: RelayResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .content_type
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
    (status, [(header::CONTENT_TYPE, content_type)], response.body).into_response()
}

// =============================================================================
// Chart relay
// =============================================================================

type ChartBody = Result<Json<ChartInput>, JsonRejection>;

async fn compute(
    app: &App,
    operation: ChartOperation,
    body: ChartBody,
    date: Option<&str>,
) -> Result<Response, GatewayError> {
    let Json(input) = body
        .map_err(|e| GatewayError::invalid_with_details("invalid birth details", e.body_text()))?;
    let response = app
        .use_cases
        .horoscope
        .chart
        .execute(operation, &input, date)
        .await?;
    Ok(relay(response))
}

async fn chart(State(app): State<Arc<App>>, body: ChartBody) -> Result<Response, GatewayError> {
    compute(&app, ChartOperation::Chart, body, None).await
}

async fn dasha(State(app): State<Arc<App>>, body: ChartBody) -> Result<Response, GatewayError> {
    compute(&app, ChartOperation::Dasha, body, None).await
}

async fn predictions(
    State(app): State<Arc<App>>,
    body: ChartBody,
) -> Result<Response, GatewayError> {
    compute(&app, ChartOperation::Predictions, body, None).await
}

async fn transits(
    State(app): State<Arc<App>>,
    Query(query): Query<TransitQuery>,
    body: ChartBody,
) -> Result<Response, GatewayError> {
    compute(&app, ChartOperation::Transits, body, query.date.as_deref()).await
}

async fn dasha_insights(
    State(app): State<Arc<App>>,
    body: ChartBody,
) -> Result<Response, GatewayError> {
    compute(&app, ChartOperation::DashaInsights, body, None).await
}

// =============================================================================
// Geocoding
// =============================================================================

async fn geo_search(
    State(app): State<Arc<App>>,
    body: Result<Json<GeoSearchRequest>, JsonRejection>,
) -> Result<Json<Vec<GeoPlace>>, GatewayError> {
    let Json(request) =
        body.map_err(|e| GatewayError::invalid_with_details("invalid query", e.body_text()))?;
    let places = app
        .use_cases
        .geocoding
        .search
        .execute(&request.query)
        .await?;
    Ok(Json(places))
}

async fn geo_reverse(
    State(app): State<Arc<App>>,
    body: Result<Json<ReverseGeocodeRequest>, JsonRejection>,
) -> Result<Json<GeoPlace>, GatewayError> {
    let Json(request) = body
        .map_err(|e| GatewayError::invalid_with_details("invalid coordinates", e.body_text()))?;
    let place = app
        .use_cases
        .geocoding
        .reverse
        .execute(request.lat, request.lon)
        .await?;
    Ok(Json(place))
}

async fn places(
    State(app): State<Arc<App>>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<PlacesResponse>, GatewayError> {
    let response = app
        .use_cases
        .geocoding
        .autocomplete
        .execute(query.q.as_deref(), query.types.as_deref())
        .await?;
    Ok(Json(response))
}

async fn place_details(
    State(app): State<Arc<App>>,
    Query(query): Query<PlaceDetailsQuery>,
) -> Result<Json<PlaceDetails>, GatewayError> {
    let details = app
        .use_cases
        .geocoding
        .details
        .execute(query.place_id.as_deref())
        .await?;
    Ok(Json(details))
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Gateway request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
