//! Analyzer: runs the full pipeline for one resume / job description pair:
//! target selection → keyword match → formatting checks → tips.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analysis::format_checks::{check_formatting_rules, FormatCheck};
use crate::analysis::keywords::{normalize_keywords, select_target_keywords};
use crate::analysis::scoring::MatchScorer;
use crate::analysis::tips::generate_optimization_tips;
use crate::config::KeywordSettings;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

pub const MISSING_FIELDS_MESSAGE: &str = "Both fields are required";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
    /// Explicit target keywords. When non-empty they replace JD-derived targets
    /// and `jd_text` becomes optional.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// Full analysis returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub score: u32, // 0 – 100
    pub target_keywords: Vec<String>,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub hard_skills_count: usize,
    pub soft_skills_count: usize,
    pub format_checks: Vec<FormatCheck>,
    pub tips: Vec<String>,
    pub scorer_backend: String, // "keyword": for transparency
    pub analyzed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Resolves the target keywords for a request, or rejects it when there is
/// nothing to compare.
pub fn resolve_targets(
    request: &AnalyzeRequest,
    settings: &KeywordSettings,
) -> Result<Vec<String>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    let explicit = request
        .keywords
        .as_deref()
        .map(|keywords| normalize_keywords(keywords))
        .unwrap_or_default();
    if !explicit.is_empty() {
        return Ok(explicit);
    }

    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    Ok(select_target_keywords(&request.jd_text, settings))
}

pub async fn analyze_resume(
    request: &AnalyzeRequest,
    scorer: &dyn MatchScorer,
    settings: &KeywordSettings,
) -> Result<AnalysisReport, AppError> {
    let targets = resolve_targets(request, settings)?;
    debug!(targets = targets.len(), "Resolved target keywords");

    let matched = scorer.score(&request.resume_text, &targets).await?;
    let format_checks = check_formatting_rules(&request.resume_text);
    let tips = generate_optimization_tips(matched.score, &matched.missing_keywords);

    Ok(AnalysisReport {
        analysis_id: Uuid::new_v4(),
        score: matched.score,
        target_keywords: targets,
        found_keywords: matched.found_keywords,
        missing_keywords: matched.missing_keywords,
        hard_skills_count: matched.hard_skills_count,
        soft_skills_count: matched.soft_skills_count,
        format_checks,
        tips,
        scorer_backend: matched.scorer_backend,
        analyzed_at: Utc::now(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
