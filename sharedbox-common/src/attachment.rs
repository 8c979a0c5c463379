//! Files attached to a SharedBox.

use std::path::Path;

use bytes::Bytes;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file to upload, and once uploaded, the document the server created for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Server-assigned document identifier, `None` until uploaded.
    pub guid: Option<String>,
    /// MIME type of the content.
    pub content_type: String,
    /// File name shown to recipients.
    pub filename: String,
    /// File content.
    pub content: Bytes,
}

impl Attachment {
    /// An attachment built from in-memory content.
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            guid: None,
            content_type: content_type.into(),
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk. The content type is guessed from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                )
            })?;
        let content_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        Ok(Self::new(filename, content_type, content))
    }

    /// Content size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Returns true once the server assigned a document identifier.
    pub fn is_uploaded(&self) -> bool {
        self.guid.is_some()
    }

    /// Returns a copy carrying the given document identifier.
    pub fn with_guid(&self, guid: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            ..self.clone()
        }
    }
}
