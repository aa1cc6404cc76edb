use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Result of one resume formatting check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCheck {
    pub label: String,
    #[serde(rename = "pass")]
    pub passed: bool,
    #[serde(rename = "msgFail")]
    pub msg_fail: String,
}

impl FormatCheck {
    fn new(label: &str, passed: bool, msg_fail: &str) -> Self {
        Self {
            label: label.to_string(),
            passed,
            msg_fail: msg_fail.to_string(),
        }
    }
}

struct Patterns {
    email: Regex,
    phone: Regex,
    action_verbs: Regex,
    metric_symbols: Regex,
    metric_phrases: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        email: compile(r"\b[\w.-]+@[\w.-]+\.\w{2,4}\b"),
        phone: compile(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"),
        action_verbs: compile(
            r"(?i)\b(led|managed|developed|created|built|designed|improved|optimized|engineered|architected)\b",
        ),
        metric_symbols: compile(r"\d+%|\$\d+"),
        metric_phrases: compile(r"(?i)\b\d+\s+(users|clients|percent|increase|reduction)"),
    })
}

fn compile(pattern: &str) -> Regex {
    // Patterns are literals covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

pub fn has_email(text: &str) -> bool {
    patterns().email.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    patterns().phone.is_match(text)
}

pub fn has_action_verbs(text: &str) -> bool {
    patterns().action_verbs.is_match(text)
}

pub fn has_metrics(text: &str) -> bool {
    let p = patterns();
    p.metric_symbols.is_match(text) || p.metric_phrases.is_match(text)
}

/// Runs all formatting checks against the raw resume text, in display order.
///
/// The last two checks need document layout information that plain text does
/// not carry, so they always pass and only contribute their reminder message.
pub fn check_formatting_rules(text: &str) -> Vec<FormatCheck> {
    vec![
        FormatCheck::new("Contact Email", has_email(text), "No email detected"),
        FormatCheck::new("Phone Number", has_phone(text), "No phone number"),
        FormatCheck::new(
            "Action Verbs",
            has_action_verbs(text),
            "Add verbs like 'Managed'",
        ),
        FormatCheck::new(
            "Metrics/Numbers",
            has_metrics(text),
            "Include measurable achievements (e.g., '20%')",
        ),
        FormatCheck::new("Consistent Formatting", true, "Ensure uniform font and style"),
        FormatCheck::new("No Typos", true, "Proofread for spelling errors"),
    ]
}
