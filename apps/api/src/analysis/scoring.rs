//! Match Scoring: pluggable, trait-based scorer that measures a resume against target keywords.
//!
//! Default: `KeywordMatchScorer` (exact token or raw substring containment).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, so a different backend can be
//! swapped in at startup without touching handlers.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::clean_text;
use crate::analysis::vocabulary::is_soft_skill;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of matching one resume against a target keyword set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub hard_skills_count: usize,
    pub soft_skills_count: usize,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the handlers.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, resume_text: &str, targets: &[String]) -> Result<MatchResult, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Keyword containment scorer. Fast, deterministic, no external calls.
///
/// A target counts as found when it is one of the resume's tokens or appears
/// anywhere in the lowercased raw text; the latter catches multi-word and
/// punctuated skills such as `machine learning` or `c++`.
pub struct KeywordMatchScorer;

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(&self, resume_text: &str, targets: &[String]) -> Result<MatchResult, AppError> {
        Ok(compute_keyword_match(resume_text, targets))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_keyword_match(resume_text: &str, targets: &[String]) -> MatchResult {
    let resume_words: HashSet<String> = clean_text(resume_text).into_iter().collect();
    let raw_lower = resume_text.to_lowercase();

    let (found_keywords, missing_keywords): (Vec<String>, Vec<String>) = targets
        .iter()
        .cloned()
        .partition(|k| resume_words.contains(k) || raw_lower.contains(k.as_str()));

    let soft_skills_count = found_keywords.iter().filter(|k| is_soft_skill(k)).count();
    let hard_skills_count = found_keywords.len() - soft_skills_count;

    MatchResult {
        score: match_percentage(found_keywords.len(), targets.len()),
        found_keywords,
        missing_keywords,
        hard_skills_count,
        soft_skills_count,
        scorer_backend: "keyword".to_string(),
    }
}

/// Truncating percentage; 0 when there is nothing to match.
pub fn match_percentage(found: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (found * 100 / total) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
