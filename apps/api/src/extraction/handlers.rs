use axum::{extract::Multipart, Json};

use crate::errors::AppError;
use crate::extraction::upload::read_resume_upload;
use crate::extraction::{extract_document, ExtractedDocument};

/// POST /api/v1/resumes/extract
///
/// Returns the plain text extracted from an uploaded resume without scoring it.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractedDocument>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    let document = extract_document(upload.file_name, upload.content_type, upload.data).await?;
    Ok(Json(document))
}
