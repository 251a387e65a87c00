//! Mangal (Kuja) dosha check over a D1 chart, plus its static text.

use serde::Serialize;
use std::collections::BTreeMap;

use super::planet::Planet;

/// Houses in which Mars forms the dosha.
pub const DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Result of the check from both reference points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MangalDoshaStatus {
    pub present_lagna: bool,
    pub present_moon: bool,
}

impl MangalDoshaStatus {
    pub fn is_present(&self) -> bool {
        self.present_lagna || self.present_moon
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MangalDoshaRemedies {
    pub pre_marriage: &'static [&'static str],
    pub post_marriage: &'static [&'static str],
    pub lal_kitab_style: &'static [&'static str],
    pub disclaimer: &'static str,
}

/// Find the house (1-12) holding `planet`. Keys that are not house numbers
/// and entries that are not planet names are ignored.
fn house_of(d1_chart: &BTreeMap<String, Vec<String>>, planet: Planet) -> Option<u8> {
    d1_chart.iter().find_map(|(house, occupants)| {
        let house: u8 = house.trim().parse().ok().filter(|h| (1..=12).contains(h))?;
        occupants
            .iter()
            .any(|name| Planet::lookup(name) == Some(planet))
            .then_some(house)
    })
}

/// Check Mars from the Lagna and from the Moon.
///
/// `d1_chart` maps house number strings ("1".."12") to the planets in that
/// house. A chart without Mars (or, for the Moon check, without the Moon)
/// reports the corresponding flag as absent.
pub fn detect_mangal_dosha(d1_chart: &BTreeMap<String, Vec<String>>) -> MangalDoshaStatus {
    let Some(mars) = house_of(d1_chart, Planet::Mars) else {
        return MangalDoshaStatus::default();
    };

    let present_lagna = DOSHA_HOUSES.contains(&mars);
    let present_moon = house_of(d1_chart, Planet::Moon)
        .map(|moon| (mars + 12 - moon) % 12 + 1)
        .is_some_and(|from_moon| DOSHA_HOUSES.contains(&from_moon));

    MangalDoshaStatus {
        present_lagna,
        present_moon,
    }
}

pub fn mangal_dosha_description() -> &'static [&'static str] {
    &[
        "Mangal dosha is indicated when Mars occupies the 1st, 2nd, 4th, 7th, 8th or 12th house.",
        "It is checked from both the Lagna and the Moon; presence in one chart only is considered milder.",
        "Traditionally it is associated with friction, impatience or delays in married life.",
        "The dosha is often cancelled by benefic aspects, Mars in own or exalted sign, or a partner with a similar placement.",
    ]
}

pub fn mangal_dosha_remedies() -> MangalDoshaRemedies {
    MangalDoshaRemedies {
        pre_marriage: &[
            "Match charts carefully; a partner with a similar Mars placement balances the dosha",
            "Recite the Hanuman Chalisa on Tuesdays",
            "Observe a Tuesday fast or simplified meal",
        ],
        post_marriage: &[
            "Practise patience and avoid reacting in anger",
            "Offer red flowers and sindoor to Lord Hanuman together",
            "Donate red lentils on Tuesdays",
        ],
        lal_kitab_style: &[
            "Float sweets (batashe) in flowing water",
            "Keep a solid silver item with you",
            "Feed jaggery to monkeys or cows on Tuesdays",
        ],
        disclaimer: "Mangal dosha is one indicator among many; consult a qualified astrologer for a complete assessment of the full chart.",
    }
}
