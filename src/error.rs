//! Error types for the weather backend
//!
//! Provides unified error handling using thiserror. All upstream provider
//! failures are translated into one of these kinds at the service boundary;
//! raw reqwest errors and status codes never escape the core.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Weather Error Enum ==
/// Unified error type for the weather backend.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Malformed caller input (empty city, unknown unit system)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The provider could not resolve the city
    #[error("City \"{0}\" not found. Please check the spelling and try again.")]
    NotFound(String),

    /// The provider call exceeded the configured deadline
    #[error("Request timeout. Please try again.")]
    Timeout,

    /// The provider rejected the credential (configuration problem)
    #[error("Weather service temporarily unavailable. Please try again later.")]
    Unauthorized,

    /// The provider signalled quota exhaustion
    #[error("Too many requests. Please wait before making another request.{0}")]
    RateLimited(RetryHint),

    /// Any other provider-side failure (connection refused, 5xx, bad payload)
    #[error("Weather service temporarily unavailable. Please try again later.")]
    Unavailable,

    /// Internal server error
    #[error("Internal server error. Please try again later.")]
    Internal(String),
}

// == Retry Hint ==
/// Optional retry-after hint attached to rate-limit errors.
#[derive(Debug, Clone, Default)]
pub struct RetryHint(pub Option<u64>);

impl std::fmt::Display for RetryHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(secs) => write!(f, " Retry after {} seconds.", secs),
            None => Ok(()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = match &self {
            WeatherError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            WeatherError::NotFound(_) => StatusCode::NOT_FOUND,
            WeatherError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            WeatherError::Timeout
            | WeatherError::Unauthorized
            | WeatherError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            WeatherError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details are logged, not returned to the client
        if let WeatherError::Internal(detail) = &self {
            tracing::error!("internal error: {}", detail);
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather backend.
pub type Result<T> = std::result::Result<T, WeatherError>;
