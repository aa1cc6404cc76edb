//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::analyzer::{analyze_resume, AnalysisReport, AnalyzeRequest};
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::extraction::upload::read_resume_upload;
use crate::extraction::{extract_document, DocumentSummary};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadAnalysisResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub document: DocumentSummary,
}

/// POST /analyze and POST /api/v1/analyze
///
/// Scores pasted resume text against a job description or explicit keywords.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = analyze_resume(&request, state.scorer.as_ref(), &state.config.keywords).await?;
    info!(
        analysis_id = %report.analysis_id,
        score = report.score,
        targets = report.target_keywords.len(),
        "Analyzed pasted resume"
    );
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
///
/// Extracts text from an uploaded resume file, then runs the same analysis.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadAnalysisResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;

    // Cheap field checks before paying for document parsing.
    if upload.jd_text.trim().is_empty() && upload.keywords.is_empty() {
        return Err(AppError::Validation(
            crate::analysis::analyzer::MISSING_FIELDS_MESSAGE.to_string(),
        ));
    }

    let document = extract_document(upload.file_name, upload.content_type, upload.data).await?;

    let request = AnalyzeRequest {
        resume_text: document.text.clone(),
        jd_text: upload.jd_text,
        keywords: Some(upload.keywords),
    };
    let report = analyze_resume(&request, state.scorer.as_ref(), &state.config.keywords).await?;
    info!(
        analysis_id = %report.analysis_id,
        score = report.score,
        format = document.format.as_str(),
        "Analyzed uploaded resume"
    );

    Ok(Json(UploadAnalysisResponse {
        report,
        document: DocumentSummary::from(&document),
    }))
}
