//! Document extraction: turns an uploaded resume file into plain text.
//!
//! Supported: PDF (pdf-extract), DOCX (docx-rs) and UTF-8 plain text.
//! Parsing is CPU-bound and runs on the blocking pool.

pub mod docx;
pub mod handlers;
pub mod pdf;
pub mod upload;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::tokenizer::word_count;
use crate::errors::AppError;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Detection order: declared content type, then filename extension, then magic bytes.
    /// Generic content types such as `application/octet-stream` fall through.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>, data: &[u8]) -> Option<Self> {
        content_type
            .and_then(Self::from_content_type)
            .or_else(|| file_name.and_then(Self::from_file_name))
            .or_else(|| Self::from_magic(data))
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            "text/plain" | "text/markdown" => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" | "text" | "md" => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn from_magic(data: &[u8]) -> Option<Self> {
        if data.starts_with(PDF_MAGIC) {
            Some(Self::Pdf)
        } else if data.starts_with(ZIP_MAGIC) {
            // Most zip uploads here are .docx; docx-rs rejects anything else.
            Some(Self::Docx)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::PlainText => "plain_text",
        }
    }
}

/// Plain text pulled out of an uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub file_name: Option<String>,
    pub format: DocumentFormat,
    pub text: String,
    pub word_count: usize,
}

/// Summary of the source document attached to upload-based analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub file_name: Option<String>,
    pub format: DocumentFormat,
    pub word_count: usize,
}

impl From<&ExtractedDocument> for DocumentSummary {
    fn from(doc: &ExtractedDocument) -> Self {
        Self {
            file_name: doc.file_name.clone(),
            format: doc.format,
            word_count: doc.word_count,
        }
    }
}

/// Extracts text from a single document in the given format.
pub fn extract_text(format: DocumentFormat, data: &[u8]) -> Result<String, AppError> {
    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(data)?,
        DocumentFormat::Docx => docx::extract_docx_text(data)?,
        DocumentFormat::PlainText => String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Text file is not valid UTF-8".to_string())
        })?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "No text could be extracted from the {} document",
            format.as_str()
        )));
    }
    Ok(text)
}

/// Detects the format of an uploaded file and extracts its text off the async runtime.
pub async fn extract_document(
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
) -> Result<ExtractedDocument, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded resume file is empty".to_string()));
    }

    let format = DocumentFormat::detect(content_type.as_deref(), file_name.as_deref(), &data)
        .ok_or_else(|| {
            AppError::UnsupportedFormat(format!(
                "Only PDF, DOCX and plain text resumes are supported. Received: {}",
                content_type.as_deref().unwrap_or("unknown")
            ))
        })?;

    let text = tokio::task::spawn_blocking(move || extract_text(format, &data))
        .await
        .map_err(|e| {
            // parser panics surface here as a JoinError
            warn!("Document parser aborted: {e}");
            AppError::UnprocessableEntity(format!(
                "The {} document could not be read",
                format.as_str()
            ))
        })??;

    let word_count = word_count(&text);
    info!(
        format = format.as_str(),
        word_count,
        file_name = file_name.as_deref().unwrap_or("<unnamed>"),
        "Extracted resume text"
    );

    Ok(ExtractedDocument {
        file_name,
        format,
        text,
        word_count,
    })
}
