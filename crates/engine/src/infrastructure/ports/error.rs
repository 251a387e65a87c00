//! Error types for port operations.

/// Failure talking to an external provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status; `body` is kept verbatim.
    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Network-level failure (connect, timeout, body read).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider answered but the body was not the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }
}
