//! Key-value storage port
//!
//! Mirrors browser session storage: string keys, string values, no errors
//! surfaced to callers. Adapters log their own failures.

/// Persistent storage abstraction (session/file-based)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
pub mod storage_keys {
    /// The single slot holding the last resolved location.
    pub const LOCATION: &str = "horoscope_location";

    /// The last created kundli, chart plus enrichments.
    pub const CURRENT_CHART: &str = "currentChart";
}
