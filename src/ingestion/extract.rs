use super::types::{ExtractedData, FileKind};
use axum::body::Bytes;
use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("File is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unreadable PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl FileKind {
    /// Picks the extractor from the original file name's extension,
    /// ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "csv" => Ok(FileKind::Csv),
            "txt" => Ok(FileKind::Text),
            _ => Err(ExtractError::UnsupportedExtension(format!(".{}", ext))),
        }
    }
}

pub fn extract(kind: FileKind, bytes: &[u8]) -> Result<ExtractedData, ExtractError> {
    match kind {
        FileKind::Text => extract_text(bytes).map(ExtractedData::Text),
        FileKind::Csv => extract_csv(bytes).map(ExtractedData::Rows),
        FileKind::Pdf => extract_pdf(bytes).map(ExtractedData::Text),
    }
}

/// Runs [`extract`] on the blocking pool so large PDF and CSV parses stay
/// off the async workers. A panic inside the extractor surfaces as
/// [`ExtractError::Task`].
pub async fn extract_blocking(
    kind: FileKind,
    bytes: Bytes,
) -> Result<ExtractedData, ExtractError> {
    tokio::task::spawn_blocking(move || extract(kind, &bytes)).await?
}

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Reads a CSV with a header line into one map per row.
///
/// Short rows only carry the columns they have; extra cells beyond the
/// header are dropped.
pub fn extract_csv(bytes: &[u8]) -> Result<Vec<IndexMap<String, String>>, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}
