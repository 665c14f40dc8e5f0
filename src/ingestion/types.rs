//! Ingestion Data Types
//!
//! DTOs for the upload endpoint and the shapes extracted content can take.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Public endpoint for file uploads.
pub const ENDPOINT_UPLOAD: &str = "/api/upload";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Content types accepted by the upload endpoint, as declared by the client.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["application/pdf", "text/csv", "text/plain"];

/// Which extractor handles an upload, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Csv,
    Text,
}

/// Content pulled out of an uploaded file.
///
/// Text and PDF uploads yield one string; CSV uploads yield one object per
/// row, keyed by the header line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedData {
    Text(String),
    Rows(Vec<IndexMap<String, String>>),
}

/// Response returned once an upload has been extracted.
///
/// Nothing is stored; the caller decides what to do with `data`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub data: ExtractedData,
}
