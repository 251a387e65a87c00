//! Kundli loader
//!
//! Creating a kundli is one chart call plus four enrichment calls (dashas,
//! predictions, transits and dasha insights). Only the chart is required.
//! An enrichment that fails is logged and its section stays `None`, which
//! the page renders as "data not available" while every other section
//! still shows.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use kundli_shared::{ChartInput, ChartOperation};

use crate::application::dasha_view::{
    mahadasha_sections, mangal_dosha_section, parse_d1_chart, parse_periods, DashaPeriod,
    MahadashaSection, MangalDoshaSection,
};
use crate::ports::{storage_keys, ApiError, GatewayApiPort, StorageProvider};

/// Placeholder for a section whose enrichment failed.
pub const DATA_NOT_AVAILABLE: &str = "Data not available";

/// A chart with whatever enrichments could be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kundli {
    pub input: ChartInput,
    pub chart: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashas: Option<Vec<DashaPeriod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transits: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dasha_insights: Option<Value>,
}

impl Kundli {
    /// Houses 1-12 of the rasi chart; empty when the chart has none.
    pub fn d1_chart(&self) -> BTreeMap<String, Vec<String>> {
        parse_d1_chart(&self.chart["vedic"]["d1_chart"])
    }

    pub fn mangal_dosha(&self) -> MangalDoshaSection {
        mangal_dosha_section(&self.d1_chart())
    }

    /// `None` when the dasha enrichment failed.
    pub fn mahadasha_sections(&self) -> Option<Vec<MahadashaSection>> {
        self.dashas.as_deref().map(mahadasha_sections)
    }

    /// Sections that are missing, for the page's "data not available" notes.
    pub fn missing_sections(&self) -> Vec<ChartOperation> {
        [
            (ChartOperation::Dasha, self.dashas.is_none()),
            (ChartOperation::Predictions, self.predictions.is_none()),
            (ChartOperation::Transits, self.transits.is_none()),
            (ChartOperation::DashaInsights, self.dasha_insights.is_none()),
        ]
        .into_iter()
        .filter_map(|(operation, missing)| missing.then_some(operation))
        .collect()
    }
}

/// Value under `key`, treating `null` as absent.
fn field(raw: &Value, key: &str) -> Option<Value> {
    raw.get(key).filter(|v| !v.is_null()).cloned()
}

fn enrichment(operation: ChartOperation, outcome: Result<Value, ApiError>) -> Option<Value> {
    match outcome {
        Ok(raw) => Some(raw),
        Err(e) => {
            tracing::warn!(
                section = operation.label(),
                error = %e,
                "Kundli enrichment failed, leaving section empty"
            );
            None
        }
    }
}

fn transit_list(raw: &Value) -> Option<Vec<Value>> {
    raw.get("transits").and_then(Value::as_array).cloned()
}

#[derive(Clone)]
pub struct KundliLoader {
    api: Arc<dyn GatewayApiPort>,
    storage: Arc<dyn StorageProvider>,
}

impl KundliLoader {
    pub fn new(api: Arc<dyn GatewayApiPort>, storage: Arc<dyn StorageProvider>) -> Self {
        Self { api, storage }
    }

    /// Build a kundli and make it the current one.
    ///
    /// # Errors
    ///
    /// Only a failed chart call is an error; nothing is stored in that case.
    pub async fn create(&self, input: &ChartInput) -> Result<Kundli, ApiError> {
        let chart = self
            .api
            .create_chart(input)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Chart creation failed"))?;

        let (dashas, predictions, transits, insights) = tokio::join!(
            self.api.dasha(input),
            self.api.predictions(input),
            self.api.transits(input, None),
            self.api.dasha_insights(input),
        );

        let predictions = enrichment(ChartOperation::Predictions, predictions);
        let kundli = Kundli {
            input: input.clone(),
            chart,
            dashas: enrichment(ChartOperation::Dasha, dashas)
                .and_then(|raw| raw.get("dashas").map(parse_periods)),
            summary: predictions.as_ref().and_then(|raw| field(raw, "summary")),
            predictions: predictions.and_then(|raw| field(&raw, "predictions")),
            transits: enrichment(ChartOperation::Transits, transits)
                .and_then(|raw| transit_list(&raw)),
            dasha_insights: enrichment(ChartOperation::DashaInsights, insights)
                .and_then(|raw| field(&raw, "insights")),
        };

        tracing::info!(
            name = %input.name,
            missing = kundli.missing_sections().len(),
            "Kundli created"
        );
        self.store(&kundli);
        Ok(kundli)
    }

    /// The kundli last created in this storage, if readable.
    pub fn current(&self) -> Option<Kundli> {
        let raw = self.storage.load(storage_keys::CURRENT_CHART)?;
        serde_json::from_str(&raw)
            .inspect_err(|e| tracing::warn!(error = %e, "Ignoring unreadable stored kundli"))
            .ok()
    }

    /// Recompute transits for `on` (or now) and store the result.
    ///
    /// On failure the previous transits are kept and the error returned.
    pub async fn refresh_transits(
        &self,
        kundli: &mut Kundli,
        on: Option<NaiveDate>,
    ) -> Result<(), ApiError> {
        let raw = self.api.transits(&kundli.input, on).await?;
        kundli.transits = Some(transit_list(&raw).unwrap_or_default());
        self.store(kundli);
        Ok(())
    }

    fn store(&self, kundli: &Kundli) {
        match serde_json::to_string(kundli) {
            Ok(json) => self.storage.save(storage_keys::CURRENT_CHART, &json),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize kundli"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SessionStorageProvider;
    use crate::ports::MockGatewayApiPort;
    use kundli_domain::Location;
    use serde_json::json;

    fn input() -> ChartInput {
        ChartInput::new(
            "Asha",
            "1990-04-12T05:30:00Z",
            &Location::new("Pune", 18.52, 73.85, "Asia/Kolkata"),
        )
    }

    fn chart() -> Value {
        json!({
            "input_echo": { "name": "Asha" },
            "vedic": { "d1_chart": { "1": ["Sun"], "7": ["Mars"] } }
        })
    }

    /// Every call succeeds; tests override the one they care about.
    fn healthy_api() -> MockGatewayApiPort {
        let mut api = MockGatewayApiPort::new();
        api.expect_create_chart().returning(|_| Ok(chart()));
        api.expect_dasha().returning(|_| {
            Ok(json!({ "dashas": [
                { "planet": "Sun", "level": "Maha", "current": true },
                { "planet": "Sun/Moon", "level": "Antar", "current": true }
            ] }))
        });
        api.expect_transits()
            .returning(|_, _| Ok(json!({ "transits": [{ "planet": "Saturn" }] })));
        api.expect_dasha_insights()
            .returning(|_| Ok(json!({ "insights": { "mahadasha": { "planet": "Sun" } } })));
        api
    }

    fn loader(api: MockGatewayApiPort) -> (KundliLoader, SessionStorageProvider) {
        let storage = SessionStorageProvider::new();
        (KundliLoader::new(Arc::new(api), Arc::new(storage.clone())), storage)
    }

    #[tokio::test]
    async fn failed_enrichment_leaves_other_sections_intact() {
        let mut api = healthy_api();
        api.expect_predictions()
            .times(1)
            .returning(|_| Err(ApiError::status(500, "rule engine crashed")));
        let (loader, _) = loader(api);

        let kundli = loader.create(&input()).await.unwrap();
        assert!(kundli.predictions.is_none());
        assert!(kundli.summary.is_none());
        assert_eq!(kundli.missing_sections(), vec![ChartOperation::Predictions]);

        assert_eq!(kundli.dashas.as_ref().map(Vec::len), Some(2));
        assert_eq!(kundli.transits.as_ref().map(Vec::len), Some(1));
        assert_eq!(kundli.dasha_insights.as_ref().unwrap()["mahadasha"]["planet"], "Sun");

        let sections = kundli.mahadasha_sections().unwrap();
        assert_eq!(
            sections[0].focus.as_ref().and_then(|f| f.lord.as_deref()),
            Some("Moon")
        );
        assert!(kundli.mangal_dosha().status.present_lagna);
    }

    #[tokio::test]
    async fn every_enrichment_failing_still_yields_the_chart() {
        let mut api = MockGatewayApiPort::new();
        api.expect_create_chart().returning(|_| Ok(chart()));
        api.expect_dasha()
            .returning(|_| Err(ApiError::RequestFailed("timeout".into())));
        api.expect_predictions()
            .returning(|_| Err(ApiError::RequestFailed("timeout".into())));
        api.expect_transits()
            .returning(|_, _| Err(ApiError::RequestFailed("timeout".into())));
        api.expect_dasha_insights()
            .returning(|_| Err(ApiError::RequestFailed("timeout".into())));
        let (loader, _) = loader(api);

        let kundli = loader.create(&input()).await.unwrap();
        assert_eq!(kundli.missing_sections().len(), 4);
        assert!(kundli.mahadasha_sections().is_none());
        assert_eq!(kundli.d1_chart().len(), 2);
    }

    #[tokio::test]
    async fn predictions_and_summary_are_split() {
        let mut api = healthy_api();
        api.expect_predictions().returning(|_| {
            Ok(json!({
                "predictions": { "now": [{ "text": "Steady" }] },
                "summary": null
            }))
        });
        let (loader, _) = loader(api);

        let kundli = loader.create(&input()).await.unwrap();
        assert_eq!(kundli.predictions.unwrap()["now"][0]["text"], "Steady");
        assert!(kundli.summary.is_none());
    }

    #[tokio::test]
    async fn chart_failure_is_fatal_and_stores_nothing() {
        let mut api = MockGatewayApiPort::new();
        api.expect_create_chart()
            .times(1)
            .returning(|_| Err(ApiError::status(400, "invalid birth details")));
        // No enrichment expectations: none may be called.
        let (loader, storage) = loader(api);

        let err = loader.create(&input()).await.unwrap_err();
        assert_eq!(err, ApiError::status(400, "invalid birth details"));
        assert_eq!(storage.load(storage_keys::CURRENT_CHART), None);
        assert_eq!(loader.current(), None);
    }

    #[tokio::test]
    async fn created_kundli_becomes_current() {
        let mut api = healthy_api();
        api.expect_predictions()
            .returning(|_| Ok(json!({ "predictions": {}, "summary": { "now": {} } })));
        let (loader, storage) = loader(api);

        let kundli = loader.create(&input()).await.unwrap();
        assert!(storage.load("currentChart").is_some());
        assert_eq!(loader.current(), Some(kundli));
    }

    #[test]
    fn unreadable_current_kundli_is_absent() {
        let (loader, storage) = loader(MockGatewayApiPort::new());
        storage.save(storage_keys::CURRENT_CHART, "{\"chart\":");
        assert_eq!(loader.current(), None);
    }

    #[tokio::test]
    async fn transit_refresh_keeps_previous_on_failure() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14);
        let mut api = MockGatewayApiPort::new();
        api.expect_transits()
            .withf(move |_, on| *on == day)
            .times(1)
            .returning(|_, _| Ok(json!({ "transits": [{ "planet": "Jupiter" }, { "planet": "Rahu" }] })));
        api.expect_transits()
            .withf(|_, on| on.is_none())
            .times(1)
            .returning(|_, _| Err(ApiError::status(502, "Upstream error")));
        let (loader, _) = loader(api);

        let mut kundli = Kundli {
            input: input(),
            chart: chart(),
            dashas: None,
            predictions: None,
            summary: None,
            transits: None,
            dasha_insights: None,
        };
        loader.refresh_transits(&mut kundli, day).await.unwrap();
        assert_eq!(kundli.transits.as_ref().map(Vec::len), Some(2));
        assert_eq!(loader.current(), Some(kundli.clone()));

        assert!(loader.refresh_transits(&mut kundli, None).await.is_err());
        assert_eq!(kundli.transits.as_ref().map(Vec::len), Some(2));
    }
}
