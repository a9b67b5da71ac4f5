//! # Uploaded Files
//!
//! Handles for files received with a request. Storage is owned by the host;
//! this crate only carries the handle through the input view.

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

/// Outcome of receiving an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    /// Received completely
    Ok,
    /// Exceeded the host's size limit
    TooLarge,
    /// Only part of the file arrived
    Partial,
    /// Field present but no file was sent
    NoFile,
    /// Host failed to persist the file
    Failed,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Ok => "ok",
            UploadStatus::TooLarge => "too_large",
            UploadStatus::Partial => "partial",
            UploadStatus::NoFile => "no_file",
            UploadStatus::Failed => "failed",
        }
    }
}

/// An opaque upload handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    /// Handle identity, shared by clones
    pub id: Uuid,
    /// Filename as sent by the client
    pub client_filename: Option<String>,
    /// Media type as sent by the client
    pub client_media_type: Option<String>,
    /// Size in bytes, if known
    pub size: Option<u64>,
    pub status: UploadStatus,
}

impl UploadedFile {
    /// Create a handle for a successfully received file
    pub fn new(client_filename: impl Into<String>, size: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_filename: Some(client_filename.into()),
            client_media_type: None,
            size: Some(size),
            status: UploadStatus::Ok,
        }
    }

    /// Create a handle for an upload that did not complete
    pub fn failed(status: UploadStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_filename: None,
            client_media_type: None,
            size: None,
            status,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.client_media_type = Some(media_type.into());
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == UploadStatus::Ok
    }

    /// Metadata rendering used when input is turned into JSON
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id.to_string(),
            "client_filename": self.client_filename,
            "client_media_type": self.client_media_type,
            "size": self.size,
            "status": self.status.as_str(),
        })
    }
}
