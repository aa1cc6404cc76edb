// Resume analysis: tokenize, pick target keywords, match, score, check formatting, advise.
// Pure Rust and deterministic; handlers are the only async/HTTP-aware part.

pub mod analyzer;
pub mod format_checks;
pub mod handlers;
pub mod keywords;
pub mod scoring;
pub mod tips;
pub mod tokenizer;
pub mod vocabulary;
