use super::extract::extract_blocking;
use super::types::{ExtractedData, FileKind, UploadResponse, ALLOWED_CONTENT_TYPES, UPLOAD_FIELD};
use crate::error::ApiError;
use axum::extract::Multipart;
use axum::Json;

pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidUpload(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(ApiError::InvalidFileType(content_type));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidUpload(e.body_text()))?;

        tracing::info!("Processing upload: {} ({} bytes)", file_name, bytes.len());

        let kind = FileKind::from_file_name(&file_name)?;
        let data = extract_blocking(kind, bytes).await?;
        log_extracted(&file_name, &data);

        return Ok(Json(UploadResponse {
            message: "File processed successfully".to_string(),
            data,
        }));
    }

    Err(ApiError::NoFile)
}

fn log_extracted(file_name: &str, data: &ExtractedData) {
    match data {
        ExtractedData::Text(text) => {
            tracing::debug!("Extracted {} chars from {}", text.len(), file_name)
        }
        ExtractedData::Rows(rows) => {
            tracing::debug!("Extracted {} rows from {}", rows.len(), file_name)
        }
    }
}
