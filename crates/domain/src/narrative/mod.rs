//! Static narrative lookup tables
//!
//! Plain immutable data keyed by planet or house. Every lookup returns
//! `Option`; a missing entry means the caller leaves that section out.

mod dasha;
mod houses;
mod lucky;
mod mangal_dosha;
mod planet;

pub use dasha::{
    antardasha_details, antardasha_modifier, combination_note, mahadasha_details,
    mahadasha_themes, PlanetNarrative,
};
pub use houses::{house_line, house_theme};
pub use lucky::LuckyFacts;
pub use mangal_dosha::{
    detect_mangal_dosha, mangal_dosha_description, mangal_dosha_remedies, MangalDoshaRemedies,
    MangalDoshaStatus, DOSHA_HOUSES,
};
pub use planet::{Planet, Relationship};
