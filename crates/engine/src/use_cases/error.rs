//! Gateway errors.

use kundli_shared::{ErrorBody, QueryError};

use crate::infrastructure::ports::ProviderError;

use super::validation::ValidationError;

/// Every failure the gateway reports to its callers.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Client-supplied parameters failed validation; checked before any upstream call.
    #[error("{message}")]
    InvalidInput {
        message: String,
        details: Option<String>,
    },

    /// The provider credential is missing.
    #[error("{0}")]
    NotConfigured(String),

    /// The provider answered with a non-success status; carries its raw body.
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// Network or decode failure talking to a provider.
    #[error("Proxy failure: {0}")]
    ProxyFailure(String),

    /// A valid request with no matching result.
    #[error("{0}")]
    NotFound(String),
}

impl GatewayError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details: None,
        }
    }

    pub fn invalid_with_details(message: impl Into<String>, details: impl ToString) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details: Some(details.to_string()),
        }
    }

    /// Missing places credential.
    pub fn places_not_configured() -> Self {
        Self::NotConfigured("Google API key not configured".to_string())
    }

    /// Map a composer failure; `message` is the headline for invalid values.
    pub fn from_query(err: QueryError, message: &str) -> Self {
        match err {
            QueryError::IncompleteLocation(missing) => Self::invalid(missing),
            QueryError::InvalidInput(details) => Self::invalid_with_details(message, details),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 400,
            Self::NotConfigured(_) => 501,
            Self::UpstreamError(_) => 502,
            Self::ProxyFailure(_) => 500,
            Self::NotFound(_) => 404,
        }
    }

    /// JSON body: `{"error", "details"?}`.
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::InvalidInput {
                message,
                details: Some(details),
            } => ErrorBody::with_details(message.clone(), details.clone()),
            Self::InvalidInput { message, .. } => ErrorBody::new(message.clone()),
            Self::NotConfigured(message) | Self::NotFound(message) => {
                ErrorBody::new(message.clone())
            }
            Self::UpstreamError(body) => ErrorBody::with_details("Upstream error", body.clone()),
            Self::ProxyFailure(details) => ErrorBody::with_details("Proxy failure", details.clone()),
        }
    }
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { body, .. } => Self::UpstreamError(body),
            ProviderError::RequestFailed(msg) | ProviderError::InvalidResponse(msg) => {
                Self::ProxyFailure(msg)
            }
        }
    }
}

impl From<ValidationError> for GatewayError {
    fn from(err: ValidationError) -> Self {
        Self::invalid(err.to_string())
    }
}
