//! Adapters for the client ports

pub mod gateway_client;
pub mod storage;

pub use gateway_client::GatewayClient;
pub use storage::{FileStorageProvider, SessionStorageProvider};
