//! Fixed word lists used for keyword selection and skill classification.

pub const COMMON_STOP_WORDS: &[&str] = &[
    "and", "the", "for", "with", "you", "that", "are", "this", "from", "will", "have", "your",
    "our", "can", "all", "but", "not", "of", "in", "to", "is", "a", "an", "or", "as", "be", "by",
    "on", "at", "it",
];

pub const TECH_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "html",
    "css",
    "typescript",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "jira",
    "agile",
    "scrum",
    "communication",
    "leadership",
    "redux",
    "node",
    "express",
    "mongodb",
    "ci/cd",
    "frontend",
    "backend",
    "fullstack",
    "api",
    "rest",
    "graphql",
    "machine learning",
    "data analysis",
    "go",
    "rust",
    "c++",
    "c#",
    "azure",
    "gcp",
    "terraform",
    "jenkins",
    "linux",
    "bash",
    "design patterns",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "agile",
    "scrum",
    "collaboration",
    "problem-solving",
    "adaptability",
    "time management",
    "critical thinking",
    "creativity",
];

pub fn is_stop_word(word: &str) -> bool {
    COMMON_STOP_WORDS.contains(&word)
}

pub fn is_tech_skill(word: &str) -> bool {
    TECH_SKILLS.contains(&word)
}

pub fn is_soft_skill(word: &str) -> bool {
    SOFT_SKILLS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("rust"));
        assert!(is_tech_skill("kubernetes"));
        assert!(is_tech_skill("machine learning"));
        assert!(!is_tech_skill("teamwork"));
        assert!(is_soft_skill("teamwork"));
    }

    #[test]
    fn test_lookups_are_case_sensitive() {
        // callers lowercase before lookup
        assert!(!is_tech_skill("Python"));
    }

    #[test]
    fn test_shared_entries_are_in_both_lists() {
        for word in ["communication", "leadership", "agile", "scrum"] {
            assert!(is_tech_skill(word), "{word} missing from tech skills");
            assert!(is_soft_skill(word), "{word} missing from soft skills");
        }
    }
}
