//! Multipart form parsing for resume uploads.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::analysis::keywords::parse_keyword_list;
use crate::errors::AppError;

/// A resume file plus the optional analysis fields sent alongside it.
#[derive(Debug, Clone, Default)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
    pub jd_text: String,
    pub keywords: Vec<String>,
}

/// Reads a multipart body with fields:
/// - `resume` (or `file`): the resume document, required
/// - `jd_text`: job description text
/// - `keywords`: comma or newline separated explicit targets
///
/// Unknown fields are ignored.
pub async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut upload = ResumeUpload::default();
    let mut has_file = false;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "resume" | "file" => {
                upload.file_name = field.file_name().map(str::to_string);
                upload.content_type = field.content_type().map(str::to_string);
                upload.data = field.bytes().await?;
                has_file = true;
            }
            "jd_text" => upload.jd_text = field.text().await?,
            "keywords" => upload.keywords = parse_keyword_list(&field.text().await?),
            other => debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    if !has_file {
        return Err(AppError::Validation(
            "Multipart field 'resume' with the resume file is required".to_string(),
        ));
    }

    Ok(upload)
}
