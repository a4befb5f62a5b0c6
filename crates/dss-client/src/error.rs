//! Error types for the backend client.

use dss_submit::{LookupError, TransportError};
use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("backend returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Failed to parse JSON response.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Request body could not be built.
    #[error("failed to build request: {0}")]
    Request(String),
}

impl ClientError {
    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::JsonParse(_) | Self::Request(_) => false,
        }
    }

    /// Convert into a lookup error for the named list.
    pub fn into_lookup(self, list: &'static str) -> LookupError {
        LookupError::Fetch {
            list,
            message: self.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else if err.is_builder() {
            Self::Request(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<ClientError> for TransportError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(message) => Self::Network(message),
            ClientError::Status { status, message } => Self::Status { status, message },
            ClientError::JsonParse(message) => Self::Decode(message),
            ClientError::Request(message) => Self::Encode(message),
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        let err = ClientError::Status {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.is_retryable());
        assert!(
            !ClientError::Status {
                status: 422,
                message: String::new(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn transport_conversion_keeps_details() {
        let err = TransportError::from(ClientError::Status {
            status: 404,
            message: "not found".to_string(),
        });
        assert_eq!(
            err,
            TransportError::Status {
                status: 404,
                message: "not found".to_string(),
            }
        );
        assert_eq!(
            TransportError::from(ClientError::JsonParse("eof".to_string())),
            TransportError::Decode("eof".to_string())
        );
    }

    #[test]
    fn lookup_conversion_names_list() {
        let err = ClientError::Network("refused".to_string()).into_lookup("authors");
        assert_eq!(err.to_string(), "failed to load authors: network error: refused");
    }
}
