//! Binary artifact attached to a submission.

use std::fmt;
use std::io;
use std::path::Path;

use dss_model::DataSourceType;

/// Fallback media type for files of unknown kind.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A data file uploaded together with the metadata.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, deriving the media type from its extension.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let media_type = DataSourceType::from_file_name(&file_name)
            .map_or(OCTET_STREAM, |t| t.media_type())
            .to_string();
        Ok(Self {
            file_name,
            media_type,
            bytes,
        })
    }

    /// Data source type implied by the media type.
    pub fn source_type(&self) -> Option<DataSourceType> {
        DataSourceType::from_media_type(&self.media_type)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
