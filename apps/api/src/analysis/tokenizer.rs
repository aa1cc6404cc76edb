//! Text cleaning shared by resume and job description processing.

/// Words of this length or shorter are dropped.
const MIN_WORD_LEN_EXCLUSIVE: usize = 2;

/// Lowercases `text`, blanks out everything except ASCII letters, digits and
/// whitespace, and returns the remaining words longer than two characters.
pub fn clean_text(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.len() > MIN_WORD_LEN_EXCLUSIVE)
        .map(str::to_string)
        .collect()
}

/// Rough word count used for extraction summaries.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
