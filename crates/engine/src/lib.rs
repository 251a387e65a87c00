//! Kundli Engine library.
//!
//! Server side of the kundli app: a stateless gateway in front of the
//! horoscope backend and the geocoding providers.
//!
//! ## Structure
//!
//! - `use_cases/` - Validation and orchestration per endpoint
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::GatewayConfig;
