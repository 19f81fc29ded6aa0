//! Error types for the sccop client and CLI

use std::time::Duration;
use thiserror::Error;

use crate::client::response::RawResponse;

/// Result type alias for sccop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Options failed local validation; nothing was sent.
    #[error("Invalid request options: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

impl Error {
    /// The HTTP response received before the failure, if one was received.
    ///
    /// Only protocol errors (non-2xx) and decoding errors carry a response.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::Api(ApiError::Service(err)) => Some(&err.response),
            Error::Api(ApiError::InvalidResponse { response, .. }) => Some(response),
            _ => None,
        }
    }

    /// HTTP status code of the failed call, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status_code)
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response from the service.
    #[error(transparent)]
    Service(Box<ServiceError>),

    /// 2xx response whose body could not be decoded.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        message: String,
        response: Box<RawResponse>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed: context deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),

    #[error("Authentication failed: {0}")]
    Authentication(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Error returned by the service for a non-2xx response.
///
/// The message is taken from the service's error payload when it has one,
/// otherwise it is the status reason phrase.
#[derive(Debug, Error)]
#[error("{status_code} {message}")]
pub struct ServiceError {
    pub status_code: u16,
    pub message: String,
    /// Error code from the payload's first `errors` entry (e.g. `not_found`).
    pub code: Option<String>,
    /// Service trace identifier for support requests.
    pub trace: Option<String>,
    pub response: RawResponse,
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == 401 || self.status_code == 403
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `sccop init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Service URL is missing. Set it with `--service-url` or run `sccop init`.")]
    MissingServiceUrl,

    #[error("Invalid service URL '{0}'")]
    InvalidServiceUrl(String),

    #[error("Invalid authenticator configuration: {0}")]
    InvalidAuth(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
