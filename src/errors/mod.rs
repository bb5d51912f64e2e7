/// Error types for the advisor
///
/// `ApiError` describes what went wrong talking to an upstream endpoint;
/// `AdvisorError` is what the service layer reports and what the webserver maps
/// onto HTTP status codes.
use axum::http::StatusCode;
use thiserror::Error;

// =============================================================================
// UPSTREAM API ERRORS
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout after {0}s")]
    Timeout(u64),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Classify a reqwest failure
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(timeout_secs)
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }
}

// =============================================================================
// SERVICE ERRORS
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisorError {
    /// Pools endpoint answered with a non-200 status
    #[error("Failed to fetch Navi pools data: HTTP {status}")]
    UpstreamHttp { status: u16 },

    /// Network, timeout or payload decoding failure
    #[error("Failed to fetch data: {0}")]
    UpstreamTransport(String),

    /// Synthetic history could not be built from the snapshot
    #[error("Data simulation failed: {0}")]
    Generation(String),

    #[error("Invalid input data: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AdvisorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdvisorError::Validation(_) => StatusCode::BAD_REQUEST,
            AdvisorError::UpstreamHttp { .. }
            | AdvisorError::UpstreamTransport(_)
            | AdvisorError::Generation(_)
            | AdvisorError::Config(_)
            | AdvisorError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AdvisorError::UpstreamHttp { .. } => "upstream_http",
            AdvisorError::UpstreamTransport(_) => "upstream_transport",
            AdvisorError::Generation(_) => "generation",
            AdvisorError::Validation(_) => "validation",
            AdvisorError::Config(_) => "config",
            AdvisorError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<ApiError> for AdvisorError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::HttpStatus(status) => AdvisorError::UpstreamHttp { status },
            other => AdvisorError::UpstreamTransport(other.to_string()),
        }
    }
}
