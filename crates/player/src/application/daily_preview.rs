//! Daily horoscope loader
//!
//! Feeds the daily page, the sign detail page and the home-page preview.
//! The location is the persisted one when there is one, else the configured
//! preview location. A failed fetch never blocks the page: the loader falls
//! back to a placeholder set and reports why.

use std::sync::Arc;

use serde_json::Value;

use kundli_domain::narrative::LuckyFacts;
use kundli_domain::{Basis, Location};
use kundli_shared::{blurb, find_card, normalize, sample_records, sign_name, BasisQuery};

use crate::application::LocationStore;
use crate::ports::GatewayApiPort;

/// One rendered row of the daily list.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCard {
    pub sign: String,
    pub blurb: String,
    pub record: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPreview {
    pub basis: Basis,
    pub location: Location,
    pub records: Vec<Value>,
    /// Set when `records` are placeholders because the fetch failed.
    pub error: Option<String>,
}

impl DailyPreview {
    pub fn is_sample(&self) -> bool {
        self.error.is_some()
    }

    pub fn cards(&self) -> Vec<DailyCard> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| DailyCard {
                sign: sign_name(record, idx),
                blurb: blurb(record),
                record: record.clone(),
            })
            .collect()
    }

    /// Record for the sign detail page.
    pub fn card_for(&self, sign: &str) -> Option<&Value> {
        find_card(&self.records, sign)
    }
}

/// Lucky number, colour and time for a record's `astro_facts`.
///
/// `tithi` may arrive as a number or a numeric string.
pub fn lucky_facts(record: &Value) -> LuckyFacts {
    let facts = record.get("astro_facts");
    let tithi = facts.and_then(|f| f.get("tithi")).and_then(|t| match t {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    });
    let weekday = facts
        .and_then(|f| f.get("weekday"))
        .and_then(Value::as_str);
    LuckyFacts::from_parts(tithi, weekday)
}

#[derive(Clone)]
pub struct DailyPreviewLoader {
    api: Arc<dyn GatewayApiPort>,
    store: LocationStore,
    fallback: Location,
}

impl DailyPreviewLoader {
    pub fn new(api: Arc<dyn GatewayApiPort>, store: LocationStore, fallback: Location) -> Self {
        Self {
            api,
            store,
            fallback,
        }
    }

    /// The location a page should default to.
    pub fn default_location(&self) -> Location {
        self.store.load().unwrap_or_else(|| self.fallback.clone())
    }

    pub async fn load(&self, basis: Basis) -> DailyPreview {
        let location = self.default_location();
        self.load_for(basis, location).await
    }

    pub async fn load_for(&self, basis: Basis, location: Location) -> DailyPreview {
        let outcome = match BasisQuery::new(basis, &location, None) {
            Ok(query) => self
                .api
                .daily(&query)
                .await
                .map(|raw| normalize(&raw))
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(records) => DailyPreview {
                basis,
                location,
                records,
                error: None,
            },
            Err(error) => {
                tracing::warn!(basis = %basis, error = %error, "Daily horoscope unavailable, showing sample");
                DailyPreview {
                    basis,
                    location,
                    records: sample_records(),
                    error: Some(error),
                }
            }
        }
    }
}
