//! Target keyword selection from a job description.

use std::collections::{HashMap, HashSet};

use crate::analysis::tokenizer::clean_text;
use crate::analysis::vocabulary::{is_stop_word, is_tech_skill};
use crate::config::KeywordSettings;

/// Picks the keywords a resume is scored against.
///
/// Tech skills mentioned in the JD come first, in order of first appearance.
/// When fewer than `min_skill_keywords` skills are found, the JD's most frequent
/// non-stop-words are appended (count descending, ties by first appearance).
pub fn select_target_keywords(jd_text: &str, settings: &KeywordSettings) -> Vec<String> {
    let jd_words = clean_text(jd_text);

    let mut targets = Vec::new();
    let mut seen = HashSet::new();

    for word in &jd_words {
        if is_tech_skill(word) && seen.insert(word.clone()) {
            targets.push(word.clone());
        }
    }

    if targets.len() < settings.min_skill_keywords {
        for word in most_frequent(&jd_words, settings.top_frequent_keywords) {
            if seen.insert(word.clone()) {
                targets.push(word);
            }
        }
    }

    targets
}

/// Normalizes a caller-supplied keyword list: trimmed, lowercased, de-duplicated.
pub fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

/// Splits a comma or newline separated keyword field into a normalized list.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = raw.split([',', '\n']).collect();
    normalize_keywords(&parts)
}

fn most_frequent(words: &[String], limit: usize) -> Vec<String> {
    // (count, first position) per word
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in words.iter().enumerate() {
        if is_stop_word(word) {
            continue;
        }
        counts.entry(word.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKILL_HEAVY_JD: &str = r#"
        Senior Backend Engineer. You will build APIs in Python and Java,
        deploy with Docker and Kubernetes on AWS, and keep SQL fast.
        Python experience required.
    "#;

    const SKILL_LIGHT_JD: &str = r#"
        Warehouse coordinator. The coordinator schedules shipments and
        coordinates inventory. Inventory accuracy matters; shipments go out daily.
    "#;

    #[test]
    fn test_skill_heavy_jd_uses_only_skills() {
        let targets = select_target_keywords(SKILL_HEAVY_JD, &KeywordSettings::default());
        assert_eq!(
            targets,
            vec!["backend", "python", "java", "docker", "kubernetes", "aws", "sql"]
        );
    }

    #[test]
    fn test_skill_light_jd_is_topped_up_with_frequent_words() {
        let targets = select_target_keywords(SKILL_LIGHT_JD, &KeywordSettings::default());
        // ranked by count, then first appearance
        assert_eq!(&targets[..3], &["coordinator", "shipments", "inventory"]);
        assert!(targets.len() <= 10);
    }

    #[test]
    fn test_stop_words_never_selected() {
        let targets = select_target_keywords(
            "the the the and and for for with rust",
            &KeywordSettings::default(),
        );
        assert_eq!(targets, vec!["rust"]);
    }

    #[test]
    fn test_top_up_skips_words_already_selected() {
        let targets = select_target_keywords("rust rust rust tokio", &KeywordSettings::default());
        assert_eq!(targets, vec!["rust", "tokio"]);
    }

    #[test]
    fn test_top_up_respects_limit() {
        let settings = KeywordSettings {
            min_skill_keywords: 5,
            top_frequent_keywords: 2,
        };
        let targets = select_target_keywords("alpha beta gamma delta", &settings);
        assert_eq!(targets, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_no_top_up_when_enough_skills() {
        let settings = KeywordSettings {
            min_skill_keywords: 1,
            top_frequent_keywords: 10,
        };
        let targets = select_target_keywords("rust plus lots of other words", &settings);
        assert_eq!(targets, vec!["rust"]);
    }

    #[test]
    fn test_empty_jd_has_no_targets() {
        assert!(select_target_keywords("", &KeywordSettings::default()).is_empty());
    }

    #[test]
    fn test_normalize_keywords() {
        let keywords = normalize_keywords(&[" Rust ", "rust", "", "Machine Learning"]);
        assert_eq!(keywords, vec!["rust", "machine learning"]);
    }

    #[test]
    fn test_parse_keyword_list() {
        assert_eq!(
            parse_keyword_list("Rust, Tokio\nAxum,,"),
            vec!["rust", "tokio", "axum"]
        );
    }
}
