//! Error taxonomy for the WordEmbeddings client.

use thiserror::Error;

/// Result type alias for WordEmbeddings operations
pub type EmbeddingsResult<T> = Result<T, EmbeddingsError>;

/// Main error type for the WordEmbeddings client.
///
/// Only [`EmbeddingsError::Authentication`] and [`EmbeddingsError::Remote`]
/// come out of domain operations under normal use. The remaining variants
/// cover configuration mistakes and failures below the HTTP layer.
#[derive(Error, Debug, Clone)]
pub enum EmbeddingsError {
    /// Configuration error (missing credentials, invalid base URL)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// The session was not authenticated by the service.
    ///
    /// Raised locally, before any request is sent.
    #[error("Authentication error: {message}")]
    Authentication {
        /// Error message describing the authentication issue
        message: String,
    },

    /// The service answered with a non-success status
    #[error("Error {operation}: {status} {body}")]
    Remote {
        /// Operation that was being performed
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Network error (connection failed, DNS, timeout)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Request encoding or response decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization issue
        message: String,
    },
}

impl EmbeddingsError {
    /// Error returned by every operation on an unauthenticated session.
    pub(crate) fn invalid_session() -> Self {
        EmbeddingsError::Authentication {
            message: "Invalid API session. Please check your credentials.".to_string(),
        }
    }

    /// Get the HTTP status code if the service answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            EmbeddingsError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the response body text if the service answered
    pub fn response_body(&self) -> Option<&str> {
        match self {
            EmbeddingsError::Remote { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, EmbeddingsError::Authentication { .. })
    }
}

impl From<reqwest::Error> for EmbeddingsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EmbeddingsError::Network {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            EmbeddingsError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else {
            EmbeddingsError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for EmbeddingsError {
    fn from(err: serde_json::Error) -> Self {
        EmbeddingsError::Serialization {
            message: format!("JSON serialization/deserialization error: {}", err),
        }
    }
}

impl From<url::ParseError> for EmbeddingsError {
    fn from(err: url::ParseError) -> Self {
        EmbeddingsError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
