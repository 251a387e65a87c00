//! Location persistence
//!
//! A single slot holding the last resolved location as JSON. Reads never
//! fail: a missing, malformed or partial entry is simply absent.

use std::sync::Arc;

use kundli_domain::Location;

use crate::ports::{storage_keys, StorageProvider};

#[derive(Clone)]
pub struct LocationStore {
    storage: Arc<dyn StorageProvider>,
}

impl LocationStore {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    /// Replace the stored location.
    ///
    /// Returns `false` without writing when `location` is not fully resolved.
    pub fn save(&self, location: &Location) -> bool {
        if let Err(e) = location.resolve() {
            tracing::debug!(error = %e, name = %location.name, "Not persisting unresolved location");
            return false;
        }
        match serde_json::to_string(location) {
            Ok(json) => {
                self.storage.save(storage_keys::LOCATION, &json);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize location");
                false
            }
        }
    }

    /// The stored location, if present and fully resolved.
    pub fn load(&self) -> Option<Location> {
        let raw = self.storage.load(storage_keys::LOCATION)?;
        let location: Location = match serde_json::from_str(&raw) {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable stored location");
                return None;
            }
        };
        if !location.is_resolved() {
            tracing::warn!(name = %location.name, "Ignoring partial stored location");
            return None;
        }
        Some(location)
    }

    pub fn clear(&self) {
        self.storage.remove(storage_keys::LOCATION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SessionStorageProvider;
    use crate::ports::MockStorageProvider;

    fn store() -> (LocationStore, SessionStorageProvider) {
        let storage = SessionStorageProvider::new();
        (LocationStore::new(Arc::new(storage.clone())), storage)
    }

    #[test]
    fn saved_location_loads_back_equal() {
        let (store, _) = store();
        let location = Location::new("Varanasi", 25.3176, 82.9739, "Asia/Kolkata");
        assert!(store.save(&location));
        assert_eq!(store.load(), Some(location));
    }

    #[test]
    fn last_write_wins() {
        let (store, _) = store();
        store.save(&Location::new("Delhi", 28.6, 77.2, "Asia/Kolkata"));
        let london = Location::new("London", 51.5, -0.12, "Europe/London");
        store.save(&london);
        assert_eq!(store.load(), Some(london));
    }

    #[test]
    fn unresolved_location_is_not_written() {
        let storage = MockStorageProvider::new();
        let store = LocationStore::new(Arc::new(storage));
        // No expectation on save: any call would panic.
        assert!(!store.save(&Location::named("Somewhere")));
    }

    #[test]
    fn invalid_json_reads_as_absent() {
        let (store, storage) = store();
        storage.save(storage_keys::LOCATION, "{\"name\": ");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn partial_entry_reads_as_absent() {
        let (store, storage) = store();
        storage.save(storage_keys::LOCATION, r#"{"name":"Pune","lat":18.5}"#);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn reads_the_fixed_key() {
        let mut storage = MockStorageProvider::new();
        storage
            .expect_load()
            .withf(|key| key == "horoscope_location")
            .times(1)
            .returning(|_| Some(r#"{"name":"Goa","lat":15.3,"lon":74.1,"tz":"Asia/Kolkata"}"#.into()));
        let store = LocationStore::new(Arc::new(storage));
        assert_eq!(store.load().map(|l| l.name), Some("Goa".to_string()));
    }

    #[test]
    fn clear_empties_the_slot() {
        let (store, _) = store();
        store.save(&Location::new("Delhi", 28.6, 77.2, "Asia/Kolkata"));
        store.clear();
        assert_eq!(store.load(), None);
    }
}
