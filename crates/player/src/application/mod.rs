//! Application layer - client use cases and page data loaders

pub mod daily_preview;
pub mod dasha_view;
pub mod kundli;
pub mod location_store;
pub mod place_resolver;

pub use daily_preview::{lucky_facts, DailyCard, DailyPreview, DailyPreviewLoader};
pub use dasha_view::{
    current_antardasha, mahadasha_sections, mangal_dosha_section, parse_d1_chart, parse_periods,
    AntardashaFocus, DashaPeriod, MahadashaSection, MangalDoshaSection,
};
pub use kundli::{Kundli, KundliLoader, DATA_NOT_AVAILABLE};
pub use location_store::LocationStore;
pub use place_resolver::{PlaceResolver, ResolverError, ResolverState};
