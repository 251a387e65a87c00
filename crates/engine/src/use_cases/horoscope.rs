//! Horoscope and chart relay use cases.
//!
//! The backend's status and body are passed back verbatim; only the query
//! or birth details are validated here before anything is sent.

use std::sync::Arc;

use kundli_shared::{parse_instant, BasisQuery, ChartInput, ChartOperation};

use crate::infrastructure::ports::{HoroscopeBackendPort, RelayResponse};

use super::error::GatewayError;

/// Content type reported when the backend omits one
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Container for horoscope use cases.
pub struct HoroscopeUseCases {
    pub fetch: Arc<FetchHoroscope>,
    pub chart: Arc<ComputeChart>,
}

impl HoroscopeUseCases {
    pub fn new(fetch: Arc<FetchHoroscope>, chart: Arc<ComputeChart>) -> Self {
        Self { fetch, chart }
    }
}

fn default_content_type(relay: &mut RelayResponse) {
    if relay.content_type.is_none() {
        relay.content_type = Some(DEFAULT_CONTENT_TYPE.to_string());
    }
}

pub struct FetchHoroscope {
    backend: Arc<dyn HoroscopeBackendPort>,
}

impl FetchHoroscope {
    pub fn new(backend: Arc<dyn HoroscopeBackendPort>) -> Self {
        Self { backend }
    }

    /// Forward a validated query; any backend status is relayed as-is.
    pub async fn execute(&self, query: &BasisQuery) -> Result<RelayResponse, GatewayError> {
        let mut relay = self
            .backend
            .horoscope(query)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Horoscope backend unreachable"))?;
        default_content_type(&mut relay);

        tracing::debug!(
            basis = %query.basis(),
            status = relay.status,
            "Relaying horoscope response"
        );
        Ok(relay)
    }
}

/// Chart, dasha, prediction, transit and insight computations.
pub struct ComputeChart {
    backend: Arc<dyn HoroscopeBackendPort>,
}

impl ComputeChart {
    pub fn new(backend: Arc<dyn HoroscopeBackendPort>) -> Self {
        Self { backend }
    }

    /// Validate birth details, then relay the backend's answer.
    ///
    /// `date` is honoured for transits only and must be an ISO instant.
    pub async fn execute(
        &self,
        operation: ChartOperation,
        input: &ChartInput,
        date: Option<&str>,
    ) -> Result<RelayResponse, GatewayError> {
        input
            .validate()
            .map_err(|e| GatewayError::from_query(e, "invalid birth details"))?;

        let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) if operation.accepts_date() => {
                parse_instant(raw).map_err(|e| GatewayError::from_query(e, "invalid date"))?;
                Some(raw.to_string())
            }
            _ => None,
        };

        let mut relay = self
            .backend
            .compute(operation, input, date)
            .await
            .inspect_err(|e| {
                tracing::warn!(operation = operation.label(), error = %e, "Chart backend unreachable")
            })?;
        default_content_type(&mut relay);

        tracing::debug!(
            operation = operation.label(),
            status = relay.status,
            "Relaying chart response"
        );
        Ok(relay)
    }
}
