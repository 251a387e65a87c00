//! Dasha and dosha sections of the kundli page
//!
//! The backend supplies the period timeline; everything here is lookup into
//! the static narrative tables. A lookup that comes back empty drops that
//! part of the section and never fails the page.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use kundli_domain::narrative::{
    antardasha_details, antardasha_modifier, combination_note, detect_mangal_dosha,
    mahadasha_details, mahadasha_themes, mangal_dosha_description, mangal_dosha_remedies,
    MangalDoshaRemedies, MangalDoshaStatus, PlanetNarrative,
};

/// Remedies listed under the current antardasha focus.
pub const FOCUS_REMEDIES: usize = 3;

pub const LEVEL_MAHA: &str = "Maha";
pub const LEVEL_ANTAR: &str = "Antar";

/// One entry of the backend's dasha timeline.
///
/// `planet` is the lord for a mahadasha and `"Maha/Antar"` for an antardasha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub planet: String,
    pub level: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_years: Option<f64>,
}

impl DashaPeriod {
    pub fn is_maha(&self) -> bool {
        self.level == LEVEL_MAHA
    }

    pub fn is_antar(&self) -> bool {
        self.level == LEVEL_ANTAR
    }

    /// Antardasha lord of a `"Maha/Antar"` entry.
    pub fn antar_lord(&self) -> Option<&str> {
        self.planet.split_once('/').map(|(_, antar)| antar)
    }
}

/// Periods from a raw timeline; malformed entries are skipped.
pub fn parse_periods(raw: &Value) -> Vec<DashaPeriod> {
    let Some(entries) = raw.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(period) => Some(period),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed dasha period");
                None
            }
        })
        .collect()
}

/// Lord of the running antardasha within `maha_lord`'s mahadasha.
pub fn current_antardasha<'a>(periods: &'a [DashaPeriod], maha_lord: &str) -> Option<&'a str> {
    let prefix = format!("{maha_lord}/");
    periods
        .iter()
        .find(|p| p.is_antar() && p.current && p.planet.starts_with(&prefix))
        .and_then(DashaPeriod::antar_lord)
}

/// What the running sub-period adds to the current mahadasha.
#[derive(Debug, Clone, PartialEq)]
pub struct AntardashaFocus {
    pub lord: Option<String>,
    pub modifier: Option<&'static str>,
    pub combination_note: Option<String>,
    pub remedies: Vec<&'static str>,
    pub details: Option<&'static PlanetNarrative>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MahadashaSection {
    pub period: DashaPeriod,
    pub themes: &'static [&'static str],
    pub details: Option<&'static PlanetNarrative>,
    /// Only for the current mahadasha.
    pub focus: Option<AntardashaFocus>,
}

/// One section per mahadasha, in timeline order.
pub fn mahadasha_sections(periods: &[DashaPeriod]) -> Vec<MahadashaSection> {
    periods
        .iter()
        .filter(|p| p.is_maha())
        .map(|maha| {
            let details = mahadasha_details(&maha.planet);
            let focus = maha.current.then(|| {
                let lord = current_antardasha(periods, &maha.planet);
                AntardashaFocus {
                    lord: lord.map(str::to_string),
                    modifier: lord.and_then(antardasha_modifier),
                    combination_note: lord.and_then(|antar| combination_note(&maha.planet, antar)),
                    remedies: details
                        .map(|d| d.remedies.iter().take(FOCUS_REMEDIES).copied().collect())
                        .unwrap_or_default(),
                    details: lord.and_then(antardasha_details),
                }
            });
            MahadashaSection {
                period: maha.clone(),
                themes: mahadasha_themes(&maha.planet).unwrap_or_default(),
                details,
                focus,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MangalDoshaSection {
    pub status: MangalDoshaStatus,
    pub description: &'static [&'static str],
    /// Present only when the dosha is.
    pub remedies: Option<MangalDoshaRemedies>,
}

pub fn mangal_dosha_section(d1_chart: &BTreeMap<String, Vec<String>>) -> MangalDoshaSection {
    let status = detect_mangal_dosha(d1_chart);
    MangalDoshaSection {
        status,
        description: mangal_dosha_description(),
        remedies: status.is_present().then(mangal_dosha_remedies),
    }
}

/// The D1 chart from the backend's `{"1": ["Sun", ...], ...}` object.
pub fn parse_d1_chart(raw: &Value) -> BTreeMap<String, Vec<String>> {
    raw.as_object()
        .map(|houses| {
            houses
                .iter()
                .map(|(house, occupants)| {
                    let names = occupants
                        .as_array()
                        .map(|list| {
                            list.iter()
                                .filter_map(Value::as_str)
                                .map(str::to_string)
                                .collect()
                        })
                        .unwrap_or_default();
                    (house.clone(), names)
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn timeline() -> Vec<DashaPeriod> {
        parse_periods(&json!([
            { "planet": "Venus", "level": "Maha", "current": false },
            { "planet": "Sun", "level": "Maha", "current": true, "duration_years": 6.0 },
            { "planet": "Sun/Moon", "level": "Antar", "current": false },
            { "planet": "Sun/Jupiter", "level": "Antar", "current": true },
            { "planet": "Venus/Jupiter", "level": "Antar", "current": true },
            { "level": "Antar" }
        ]))
    }

    #[test]
    fn malformed_periods_are_skipped() {
        assert_eq!(timeline().len(), 5);
        assert!(parse_periods(&json!({ "not": "a list" })).is_empty());
    }

    #[test]
    fn finds_current_antardasha_of_its_own_mahadasha() {
        let periods = timeline();
        assert_eq!(current_antardasha(&periods, "Sun"), Some("Jupiter"));
        assert_eq!(current_antardasha(&periods, "Venus"), Some("Jupiter"));
        assert_eq!(current_antardasha(&periods, "Mars"), None);
    }

    #[test]
    fn only_current_mahadasha_gets_focus() {
        let sections = mahadasha_sections(&timeline());
        assert_eq!(sections.len(), 2);
        assert!(sections[0].focus.is_none());

        let sun = &sections[1];
        assert_eq!(sun.themes.len(), 3);
        assert!(sun.details.is_some());

        let focus = sun.focus.as_ref().unwrap();
        assert_eq!(focus.lord.as_deref(), Some("Jupiter"));
        assert_eq!(focus.modifier, Some("Learn, mentor, expand wisely"));
        // Jupiter is a natural friend of the Sun.
        assert!(focus.combination_note.as_deref().unwrap().contains("supports"));
        assert_eq!(focus.remedies.len(), FOCUS_REMEDIES);
        assert!(focus.details.is_some());
    }

    #[test]
    fn unknown_lord_omits_narrative_parts() {
        let periods = parse_periods(&json!([
            { "planet": "Pluto", "level": "Maha", "current": true },
            { "planet": "Pluto/Sun", "level": "Antar", "current": true }
        ]));
        let sections = mahadasha_sections(&periods);
        let section = &sections[0];
        assert!(section.themes.is_empty());
        assert!(section.details.is_none());

        let focus = section.focus.as_ref().unwrap();
        assert_eq!(focus.lord.as_deref(), Some("Sun"));
        assert!(focus.combination_note.is_none());
        assert!(focus.remedies.is_empty());
        assert!(focus.modifier.is_some());
    }

    #[test]
    fn mangal_dosha_section_from_raw_chart() {
        let chart = parse_d1_chart(&json!({
            "1": ["Sun"],
            "7": ["Mars", "Venus"],
            "10": ["Moon"],
            "bad": 3
        }));
        assert_eq!(chart.get("bad"), Some(&Vec::new()));

        let section = mangal_dosha_section(&chart);
        assert!(section.status.present_lagna);
        assert!(section.remedies.is_some());
        assert_eq!(section.description.len(), 4);
    }

    #[test]
    fn no_dosha_no_remedies() {
        let chart = parse_d1_chart(&json!({ "3": ["Mars"], "5": ["Moon"] }));
        let section = mangal_dosha_section(&chart);
        assert!(!section.status.is_present());
        assert!(section.remedies.is_none());
    }
}
