//! Unified error types for the dss-submit crate.
//!
//! Validation never produces errors (diagnostics are data). These types
//! cover the two fallible boundaries: handing a draft to the transport and
//! loading lookup lists.

use thiserror::Error;

/// Error raised by [`crate::SubmissionGate::submit`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SubmitError {
    /// The draft still has blocking diagnostics; the transport was not called.
    #[error("Metadata is not valid: {errors} blocking issue(s) must be resolved")]
    InvalidMetadata {
        /// Number of error-kind diagnostics on the draft.
        errors: usize,
    },

    /// Another submission through the same gate has not resolved yet.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// The transport failed or the backend refused the upload.
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] TransportError),
}

/// Result type alias for submit operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

impl SubmitError {
    /// Check if this error is recoverable (user can fix and retry).
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidMetadata { .. } | Self::SubmissionInFlight => true,
            Self::TransportFailure(err) => err.is_retryable(),
        }
    }

    /// Get a user-friendly suggestion for fixing this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidMetadata { .. } => {
                Some("Resolve the listed validation errors, then submit again.")
            }
            Self::SubmissionInFlight => Some("Wait for the running submission to finish."),
            Self::TransportFailure(TransportError::Network(_)) => {
                Some("Check that the backend is reachable and the backend URL is correct.")
            }
            Self::TransportFailure(TransportError::Rejected { .. }) => {
                Some("The backend refused the upload. Review its message and your metadata.")
            }
            Self::TransportFailure(_) => None,
        }
    }
}

/// Error reported by a transport collaborator. Surfaced verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success HTTP status.
    #[error("backend returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// Backend processed the upload and reported failure.
    #[error("upload rejected: {message}")]
    Rejected {
        /// Message returned by the backend.
        message: String,
    },

    /// The payload could not be encoded.
    #[error("failed to encode payload: {0}")]
    Encode(String),

    /// The backend reply could not be decoded.
    #[error("failed to decode reply: {0}")]
    Decode(String),
}

impl TransportError {
    /// Returns whether this error is potentially recoverable with a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Rejected { .. } | Self::Encode(_) | Self::Decode(_) => false,
        }
    }
}

/// Error raised while loading or extending lookup lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// A lookup list could not be fetched.
    #[error("failed to load {list}: {message}")]
    Fetch {
        /// Name of the list (authors, licenses, variables, keywords).
        list: &'static str,
        /// Underlying failure.
        message: String,
    },

    /// The author record is missing required fields.
    #[error("author is incomplete: {0}")]
    IncompleteAuthor(&'static str),

    /// The backend did not create the author.
    #[error("failed to create author: {0}")]
    Create(String),
}
