//! Application state and composition.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::infrastructure::{
    backend::HoroscopeBackendClient,
    places::GooglePlacesClient,
    ports::{HoroscopeBackendPort, PlacesPort},
};
use crate::use_cases::{
    geocoding::{Autocomplete, LookupPlaceDetails, ReverseGeocode, SearchPlace},
    horoscope::{ComputeChart, FetchHoroscope},
    GeocodingUseCases, HoroscopeUseCases,
};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub geocoding: GeocodingUseCases,
    pub horoscope: HoroscopeUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// `places` is `None` when no provider credential is configured.
    pub fn new(
        backend: Arc<dyn HoroscopeBackendPort>,
        places: Option<Arc<dyn PlacesPort>>,
    ) -> Self {
        let geocoding = GeocodingUseCases::new(
            Arc::new(SearchPlace::new(backend.clone())),
            Arc::new(ReverseGeocode::new(backend.clone())),
            Arc::new(Autocomplete::new(places.clone())),
            Arc::new(LookupPlaceDetails::new(places)),
        );
        let horoscope = HoroscopeUseCases::new(
            Arc::new(FetchHoroscope::new(backend.clone())),
            Arc::new(ComputeChart::new(backend)),
        );

        Self {
            use_cases: UseCases {
                geocoding,
                horoscope,
            },
        }
    }

    /// Wire the real HTTP clients from configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let backend: Arc<dyn HoroscopeBackendPort> = Arc::new(HoroscopeBackendClient::new(
            &config.backend_url,
            config.upstream_timeout,
        ));
        let places = config.places_api_key.as_deref().map(|key| {
            Arc::new(GooglePlacesClient::new(
                &config.places_api_url,
                key,
                config.upstream_timeout,
            )) as Arc<dyn PlacesPort>
        });

        Self::new(backend, places)
    }
}
