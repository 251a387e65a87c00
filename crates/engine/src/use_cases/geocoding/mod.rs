//! Geocoding use cases.
//!
//! Free-text search and reverse lookups go to the horoscope backend's
//! open-data geocoder; autocomplete and place details go to the commercial
//! provider when a credential is configured. Each call is a single attempt.

use std::sync::Arc;

mod autocomplete;
mod place_details;
mod reverse_geocode;
mod search_place;

pub use autocomplete::Autocomplete;
pub use place_details::LookupPlaceDetails;
pub use reverse_geocode::ReverseGeocode;
pub use search_place::SearchPlace;

/// Minimum trimmed length of a place query
pub const MIN_QUERY_LENGTH: usize = 2;

/// Maximum trimmed length of a place query
pub const MAX_QUERY_LENGTH: usize = 200;

/// Place types requested from the commercial provider when none are given
pub const DEFAULT_PLACE_TYPES: &str = "(cities)";

/// Container for geocoding use cases.
pub struct GeocodingUseCases {
    pub search: Arc<SearchPlace>,
    pub reverse: Arc<ReverseGeocode>,
    pub autocomplete: Arc<Autocomplete>,
    pub details: Arc<LookupPlaceDetails>,
}

impl GeocodingUseCases {
    pub fn new(
        search: Arc<SearchPlace>,
        reverse: Arc<ReverseGeocode>,
        autocomplete: Arc<Autocomplete>,
        details: Arc<LookupPlaceDetails>,
    ) -> Self {
        Self {
            search,
            reverse,
            autocomplete,
            details,
        }
    }
}
