//! Draft session file.
//!
//! Every CLI invocation loads the session, applies one command and writes
//! it back. The file holds the draft tree and the path of the attached
//! data file; the file contents are read again on load.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dss_submit::{Attachment, DraftStore, DraftTree};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub draft: DraftTree,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<PathBuf>,
}

impl Session {
    /// Load a session. A missing file starts an empty one.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "starting new session");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse session {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("failed to serialize session")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write session {}", path.display()))
    }

    /// Rebuild the draft store, reading the attached file from disk.
    pub fn into_store(self) -> Result<(DraftStore, Option<PathBuf>)> {
        let mut store = DraftStore::from_tree(self.draft);
        if let Some(path) = &self.attachment {
            let attachment = Attachment::from_path(path)
                .with_context(|| format!("failed to read attachment {}", path.display()))?;
            store.attach(attachment);
        }
        Ok((store, self.attachment))
    }

    /// Capture the store state. The attachment path is kept only while the
    /// store still holds an attachment.
    pub fn from_store(store: &DraftStore, attachment: Option<PathBuf>) -> Self {
        Self {
            draft: store.tree().clone(),
            attachment: attachment.filter(|_| store.attachment().is_some()),
        }
    }
}

/// Parse a command-line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
