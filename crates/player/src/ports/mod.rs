//! Outbound ports for the client pipeline
//!
//! Everything the resolver and page loaders need from the outside world:
//! the gateway's HTTP surface, the device position, and a key-value store.

mod gateway_api_port;
mod geolocation_port;
mod storage;

pub use gateway_api_port::{ApiError, GatewayApiPort};
pub use geolocation_port::{GeolocationError, GeolocationPort};
pub use storage::{storage_keys, StorageProvider};

#[cfg(any(test, feature = "testing"))]
pub use gateway_api_port::MockGatewayApiPort;
#[cfg(any(test, feature = "testing"))]
pub use geolocation_port::MockGeolocationPort;
#[cfg(any(test, feature = "testing"))]
pub use storage::MockStorageProvider;
