//! Submission gate.
//!
//! The gate refuses drafts that still carry errors, allows one submission
//! at a time and hands valid drafts to the injected [`Transport`]. A
//! successful upload clears the store.

mod transport;

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::draft::DraftStore;
use crate::error::{Result, SubmitError, TransportError};

pub use transport::{ReplyStatus, SubmissionPayload, Transport, TransportReply};

/// Confirmation of an accepted upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Message returned by the backend.
    pub message: String,
}

#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the submission resolves, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission through this gate has not resolved yet.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the store's draft and attachment.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::InvalidMetadata`] if the draft has errors; the
    ///   transport is not called
    /// - [`SubmitError::SubmissionInFlight`] if another submission is running
    /// - [`SubmitError::TransportFailure`] if the transport fails or the
    ///   backend reports `fail`; the store is left untouched
    pub fn submit(
        &self,
        store: &mut DraftStore,
        transport: &impl Transport,
    ) -> Result<SubmissionReceipt> {
        if !store.is_valid() {
            return Err(SubmitError::InvalidMetadata {
                errors: store.evaluation().error_count(),
            });
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SubmitError::SubmissionInFlight);
        }
        let _guard = InFlight(&self.in_flight);

        let payload = SubmissionPayload {
            metadata: store.draft().clone(),
            file: store.attachment().cloned(),
        };
        info!(
            title = payload.metadata.title.as_deref().unwrap_or_default(),
            file = payload.file.as_ref().map(|f| f.file_name.as_str()),
            warnings = store.evaluation().warning_count(),
            "submitting metadata"
        );

        let reply = transport.send(&payload).inspect_err(|error| {
            warn!(%error, "upload failed");
        })?;

        match reply.status {
            ReplyStatus::Success => {
                info!(message = %reply.message, "upload accepted");
                store.reset();
                Ok(SubmissionReceipt {
                    message: reply.message,
                })
            }
            ReplyStatus::Fail => {
                warn!(message = %reply.message, "upload rejected by backend");
                Err(TransportError::Rejected {
                    message: reply.message,
                }
                .into())
            }
        }
    }
}
