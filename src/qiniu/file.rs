//! Files handed to the upload endpoint

use super::key::generate_key;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Multipart field the upload endpoint reads the file from
pub const UPLOAD_FIELD: &str = "file";

/// A named binary payload to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    name: String,
    data: Bytes,
    mime: Option<String>,
}

impl UploadFile {
    /// Create a file from a name and its contents
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            mime: None,
        }
    }

    /// Use an explicit content type instead of guessing one from the name
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a local file, naming it after the last path component
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::config(format!("No file name in path {}", path.display())))?
            .to_string();
        let data = tokio::fs::read(path).await?;
        Ok(Self::new(name, data))
    }

    /// File name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File contents
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the file has no contents
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Content type sent with the part
    ///
    /// Falls back to a guess from the file extension, then to
    /// `application/octet-stream`.
    pub fn mime(&self) -> String {
        match &self.mime {
            Some(mime) => mime.clone(),
            None => mime_guess::from_path(&self.name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        }
    }

    /// Generate a storage key for this file at the current time
    pub fn key(&self) -> String {
        generate_key(&self.name)
    }

    /// Build the single-part multipart form the upload endpoint expects
    pub(crate) fn into_form(self) -> Result<Form> {
        let mime = self.mime();
        let len = self.data.len() as u64;
        let part = Part::stream_with_length(self.data, len)
            .file_name(self.name)
            .mime_str(&mime)?;
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}
