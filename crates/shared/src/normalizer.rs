//! Result normalizer
//!
//! The backend has wrapped its per-sign array under several keys over time.
//! [`normalize`] runs an ordered list of shape adapters and returns the first
//! array found. The order below is a compatibility contract: a payload is used
//! directly only when it is itself an array, then `cards`, `signs`, `rows`,
//! `data` and `result` are tried in that order.

use serde_json::{json, Value};

use kundli_domain::{ZodiacSign, SIGN_NAMES};

/// Cap for sign-indexed results (one record per sign)
pub const MAX_SIGN_RECORDS: usize = 12;

/// Title used by the offline sample set
pub const SAMPLE_TITLE: &str = "Steady focus and clarity today.";

/// One way the backend has shaped its result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeAdapter {
    BareArray,
    Wrapped(&'static str),
}

pub const SHAPE_ADAPTERS: [ShapeAdapter; 6] = [
    ShapeAdapter::BareArray,
    ShapeAdapter::Wrapped("cards"),
    ShapeAdapter::Wrapped("signs"),
    ShapeAdapter::Wrapped("rows"),
    ShapeAdapter::Wrapped("data"),
    ShapeAdapter::Wrapped("result"),
];

impl ShapeAdapter {
    /// The records this adapter sees in `raw`, if its shape matches.
    pub fn extract<'a>(&self, raw: &'a Value) -> Option<&'a [Value]> {
        match self {
            ShapeAdapter::BareArray => raw.as_array().map(Vec::as_slice),
            ShapeAdapter::Wrapped(key) => raw.get(key)?.as_array().map(Vec::as_slice),
        }
    }
}

/// The first adapter that matches `raw`.
pub fn detect_shape(raw: &Value) -> Option<ShapeAdapter> {
    SHAPE_ADAPTERS
        .into_iter()
        .find(|adapter| adapter.extract(raw).is_some())
}

/// Normalize to at most `limit` records; an unrecognised shape is empty.
pub fn normalize_with_limit(raw: &Value, limit: usize) -> Vec<Value> {
    let Some(adapter) = detect_shape(raw) else {
        tracing::debug!("No known result shape; normalizing to empty");
        return Vec::new();
    };
    adapter
        .extract(raw)
        .map(|records| records.iter().take(limit).cloned().collect())
        .unwrap_or_default()
}

/// Normalize a daily-horoscope payload to at most 12 records.
pub fn normalize(raw: &Value) -> Vec<Value> {
    normalize_with_limit(raw, MAX_SIGN_RECORDS)
}

/// Display name for the record at position `idx`.
///
/// Order: explicit `name`, a numeric `rashi` or `sign` in 0..12, a textual
/// `sign`, the position itself, then `"Sign {idx+1}"`.
pub fn sign_name(record: &Value, idx: usize) -> String {
    if let Some(name) = non_empty_str(record, "name") {
        return name.to_string();
    }
    let numeric = ["rashi", "sign"]
        .into_iter()
        .find_map(|key| record.get(key).and_then(Value::as_u64))
        .and_then(|n| usize::try_from(n).ok())
        .and_then(ZodiacSign::from_index);
    if let Some(sign) = numeric {
        return sign.name().to_string();
    }
    if let Some(sign) = non_empty_str(record, "sign") {
        return sign
            .parse::<ZodiacSign>()
            .map(|s| s.name().to_string())
            .unwrap_or_else(|_| sign.to_string());
    }
    SIGN_NAMES
        .get(idx)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Sign {}", idx + 1))
}

/// One-line teaser for a record; empty when nothing usable is present.
pub fn blurb(record: &Value) -> String {
    for key in ["summary", "narrative", "title"] {
        if let Some(text) = non_empty_str(record, key) {
            return text.to_string();
        }
    }

    if let Some(scores) = record.get("scores") {
        let health = scores.get("health").filter(|v| v.is_number());
        let career = scores.get("career").filter(|v| v.is_number());
        if health.is_some() || career.is_some() {
            return format!(
                "Health {} • Career {}",
                health.map(Value::to_string).unwrap_or_default(),
                career.map(Value::to_string).unwrap_or_default()
            );
        }
    }

    match record.get("score") {
        Some(score) if score.is_number() => format!("Score: {score}"),
        _ => String::new(),
    }
}

/// The record whose `sign` matches `sign`, ignoring case.
pub fn find_card<'a>(records: &'a [Value], sign: &str) -> Option<&'a Value> {
    let wanted = sign.trim();
    records.iter().find(|record| {
        record
            .get("sign")
            .and_then(Value::as_str)
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(wanted))
    })
}

/// Placeholder records shown when the backend cannot be reached.
pub fn sample_records() -> Vec<Value> {
    SIGN_NAMES
        .iter()
        .map(|name| json!({ "name": name, "title": SAMPLE_TITLE }))
        .collect()
}

fn non_empty_str<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
