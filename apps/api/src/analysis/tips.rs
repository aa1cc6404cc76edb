/// How many missing keywords the tip calls out.
const TOP_MISSING: usize = 3;

/// Builds the ordered list of optimization tips for a score and its missing keywords.
pub fn generate_optimization_tips(score: u32, missing_keywords: &[String]) -> Vec<String> {
    let mut tips = Vec::new();

    let headline = if score < 50 {
        "Your resume needs significant alignment with the job description."
    } else if score < 80 {
        "You're close! focus on adding specific technical keywords."
    } else {
        "Great match! Focus on readability and formatting now."
    };
    tips.push(headline.to_string());

    if !missing_keywords.is_empty() {
        let top: Vec<&str> = missing_keywords
            .iter()
            .take(TOP_MISSING)
            .map(String::as_str)
            .collect();
        tips.push(format!(
            "Try to weave in these top missing keywords: {}.",
            top.join(", ")
        ));
    }

    tips.push("Ensure you use 'Action Verbs' at the start of every bullet point.".to_string());
    tips.push("Quantify your experience with numbers (e.g., 'Reduced latency by 20%').".to_string());

    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_low_score_band() {
        let tips = generate_optimization_tips(49, &[]);
        assert!(tips[0].contains("significant alignment"));
    }

    #[test]
    fn test_middle_band_boundaries() {
        assert!(generate_optimization_tips(50, &[])[0].starts_with("You're close!"));
        assert!(generate_optimization_tips(79, &[])[0].starts_with("You're close!"));
    }

    #[test]
    fn test_high_band() {
        assert!(generate_optimization_tips(80, &[])[0].starts_with("Great match!"));
        assert!(generate_optimization_tips(100, &[])[0].starts_with("Great match!"));
    }

    #[test]
    fn test_no_missing_keywords_gives_three_tips() {
        assert_eq!(generate_optimization_tips(100, &[]).len(), 3);
    }

    #[test]
    fn test_missing_keywords_limited_to_three() {
        let tips = generate_optimization_tips(20, &missing(&["rust", "go", "aws", "gcp"]));
        assert_eq!(tips.len(), 4);
        assert_eq!(
            tips[1],
            "Try to weave in these top missing keywords: rust, go, aws."
        );
    }

    #[test]
    fn test_generic_tips_always_last() {
        let tips = generate_optimization_tips(60, &missing(&["docker"]));
        assert!(tips[tips.len() - 2].contains("Action Verbs"));
        assert!(tips[tips.len() - 1].contains("Quantify"));
    }
}
