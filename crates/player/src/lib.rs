//! Kundli Player library.
//!
//! Client side of the kundli app, without the UI: place search and
//! selection, the persisted default location, and the loaders that turn
//! gateway payloads into page sections.
//!
//! ## Structure
//!
//! - `ports/` - Gateway, geolocation and storage boundaries
//! - `infrastructure/` - reqwest gateway client and storage providers
//! - `application/` - Place resolver, location store, page loaders
//! - `app` - Composition
//! - `config` - Client configuration

pub mod app;
pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

pub use app::PlayerApp;
pub use config::PlayerConfig;
