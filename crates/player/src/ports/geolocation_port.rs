use async_trait::async_trait;

use kundli_domain::Coordinates;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

/// Device position source.
///
/// Implementations must return a fresh fix; a cached position is never
/// acceptable. The caller bounds the wait with its own timeout.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}
