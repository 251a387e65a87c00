//! Client composition.

use std::sync::Arc;

use crate::application::{DailyPreviewLoader, KundliLoader, LocationStore, PlaceResolver};
use crate::config::PlayerConfig;
use crate::infrastructure::{FileStorageProvider, GatewayClient, SessionStorageProvider};
use crate::ports::{ApiError, GatewayApiPort, GeolocationPort, StorageProvider};

/// Shared client services.
///
/// Each page takes what it needs from here; every place field gets its own
/// [`PlaceResolver`] from [`PlayerApp::place_resolver`].
#[derive(Clone)]
pub struct PlayerApp {
    pub config: PlayerConfig,
    pub api: Arc<dyn GatewayApiPort>,
    pub geolocation: Arc<dyn GeolocationPort>,
    pub locations: LocationStore,
    pub daily: DailyPreviewLoader,
    pub kundli: KundliLoader,
}

impl PlayerApp {
    pub fn new(
        config: PlayerConfig,
        api: Arc<dyn GatewayApiPort>,
        geolocation: Arc<dyn GeolocationPort>,
        storage: Arc<dyn StorageProvider>,
    ) -> Self {
        let kundli = KundliLoader::new(api.clone(), storage.clone());
        let locations = LocationStore::new(storage);
        let daily = DailyPreviewLoader::new(
            api.clone(),
            locations.clone(),
            config.preview_location.clone(),
        );
        Self {
            config,
            api,
            geolocation,
            locations,
            daily,
            kundli,
        }
    }

    /// Session-scoped client: the location lives as long as the process.
    pub fn session(
        config: PlayerConfig,
        geolocation: Arc<dyn GeolocationPort>,
    ) -> Result<Self, ApiError> {
        let api = Arc::new(GatewayClient::from_config(&config)?);
        Ok(Self::new(
            config,
            api,
            geolocation,
            Arc::new(SessionStorageProvider::new()),
        ))
    }

    /// Desktop client: the location is kept in the platform config directory.
    pub fn desktop(
        config: PlayerConfig,
        geolocation: Arc<dyn GeolocationPort>,
    ) -> Result<Self, ApiError> {
        let api = Arc::new(GatewayClient::from_config(&config)?);
        Ok(Self::new(
            config,
            api,
            geolocation,
            Arc::new(FileStorageProvider::new()),
        ))
    }

    pub fn place_resolver(&self) -> PlaceResolver {
        PlaceResolver::new(
            self.api.clone(),
            self.geolocation.clone(),
            self.locations.clone(),
            &self.config,
        )
    }
}
