//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - The horoscope backend (chart math, daily predictions, open-data geocoding)
//! - The commercial places provider (autocomplete, place details)

mod error;
mod external;

pub use error::ProviderError;
pub use external::{HoroscopeBackendPort, PlacesPort, RelayResponse};

#[cfg(test)]
pub use external::{MockHoroscopeBackendPort, MockPlacesPort};
