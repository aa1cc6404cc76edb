use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but not parseable.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on request bodies, uploads included.
    pub max_upload_bytes: usize,
    pub keywords: KeywordSettings,
}

/// Tunables for target keyword selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSettings {
    /// Below this many tech skills in the JD, frequent JD words are added as targets.
    pub min_skill_keywords: usize,
    /// How many frequent JD words are added when topping up.
    pub top_frequent_keywords: usize,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            min_skill_keywords: 5,
            top_frequent_keywords: 10,
        }
    }
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = KeywordSettings::default();

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            keywords: KeywordSettings {
                min_skill_keywords: parse_env("MIN_SKILL_KEYWORDS", defaults.min_skill_keywords)?,
                top_frequent_keywords: parse_env(
                    "TOP_FREQUENT_KEYWORDS",
                    defaults.top_frequent_keywords,
                )?,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            keywords: KeywordSettings::default(),
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'"))
}
