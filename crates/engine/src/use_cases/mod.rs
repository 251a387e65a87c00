//! Use cases - Request orchestration.
//!
//! Each module validates its inputs before touching a port, then maps
//! provider failures into [`GatewayError`].

pub mod error;
pub mod geocoding;
pub mod horoscope;
pub mod validation;

pub use error::GatewayError;
pub use geocoding::GeocodingUseCases;
pub use horoscope::HoroscopeUseCases;
