//! Transport seam between the gate and whatever delivers the upload.

use std::fmt;

use dss_model::MetadataDraft;
use serde::{Deserialize, Serialize};

use crate::draft::Attachment;
use crate::error::TransportError;

/// Everything handed to the transport for one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    pub metadata: MetadataDraft,
    pub file: Option<Attachment>,
}

impl SubmissionPayload {
    /// Metadata serialized as the JSON body part.
    pub fn metadata_json(&self) -> Result<String, TransportError> {
        serde_json::to_string(&self.metadata).map_err(|e| TransportError::Encode(e.to_string()))
    }
}

/// Outcome reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Fail,
}

impl fmt::Display for ReplyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

/// Backend answer to an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportReply {
    pub status: ReplyStatus,
    #[serde(default)]
    pub message: String,
}

impl TransportReply {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Success,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Fail,
            message: message.into(),
        }
    }
}

/// Delivers a finished payload. Implementations block until the backend
/// has answered.
pub trait Transport {
    fn send(&self, payload: &SubmissionPayload) -> Result<TransportReply, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, payload: &SubmissionPayload) -> Result<TransportReply, TransportError> {
        (**self).send(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_decodes_backend_json() {
        let reply: TransportReply =
            serde_json::from_str(r#"{"status": "fail", "message": "duplicate title"}"#)
                .expect("decode reply");
        assert_eq!(reply, TransportReply::fail("duplicate title"));
    }

    #[test]
    fn metadata_json_uses_wire_names() {
        let payload = SubmissionPayload {
            metadata: MetadataDraft {
                abstract_text: Some("Daily discharge".to_string()),
                ..Default::default()
            },
            file: None,
        };
        let json = payload.metadata_json().expect("encode metadata");
        assert!(json.contains(r#""abstract":"Daily discharge""#));
    }
}
