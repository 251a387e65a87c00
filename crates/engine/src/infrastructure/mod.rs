//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod backend;
pub mod places;
pub mod ports;
