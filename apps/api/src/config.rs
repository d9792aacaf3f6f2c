use anyhow::{Context, Result};

const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Fallback order for the portfolio variant, fastest models first.
pub const DEFAULT_PORTFOLIO_MODELS: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-flash-8b",
    "gemini-2.0-flash-exp",
    "gemini-2.5-flash",
];

pub const DEFAULT_ARCHETYPE_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.0-flash-exp"];

/// Application configuration loaded from environment variables.
///
/// API keys are optional: a missing key makes every model attempt fail, so the
/// service answers with busy/offline responses instead of refusing to start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key for the résumé/portfolio variant (`GENAI_API_KEY`).
    pub genai_api_key: Option<String>,
    /// Key for the archetype variant (`GEMINI_API_KEY`).
    pub gemini_api_key: Option<String>,
    pub genai_base_url: String,
    pub portfolio_models: Vec<String>,
    pub archetype_models: Vec<String>,
    pub llm_call_timeout_secs: u64,
    pub llm_chain_deadline_secs: u64,
    pub request_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            genai_api_key: optional_env("GENAI_API_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            genai_base_url: optional_env("GENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GENAI_BASE_URL.to_string()),
            portfolio_models: parse_model_list(
                optional_env("PORTFOLIO_MODELS").as_deref(),
                DEFAULT_PORTFOLIO_MODELS,
            ),
            archetype_models: parse_model_list(
                optional_env("ARCHETYPE_MODELS").as_deref(),
                DEFAULT_ARCHETYPE_MODELS,
            ),
            llm_call_timeout_secs: nonzero_secs(
                "LLM_CALL_TIMEOUT_SECS",
                parse_env("LLM_CALL_TIMEOUT_SECS", 30)?,
            )?,
            llm_chain_deadline_secs: nonzero_secs(
                "LLM_CHAIN_DEADLINE_SECS",
                parse_env("LLM_CHAIN_DEADLINE_SECS", 90)?,
            )?,
            request_timeout_secs: nonzero_secs(
                "REQUEST_TIMEOUT_SECS",
                parse_env("REQUEST_TIMEOUT_SECS", 120)?,
            )?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank values the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

/// A zero timeout would expire every call immediately.
fn nonzero_secs(key: &str, secs: u64) -> Result<u64> {
    anyhow::ensure!(secs > 0, "Environment variable '{key}' must be at least 1 second");
    Ok(secs)
}

/// Splits a comma-separated model list. Falls back to `default` when the list
/// is absent or contains no names.
pub fn parse_model_list(raw: Option<&str>, default: &[&str]) -> Vec<String> {
    let models: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect();

    if models.is_empty() {
        default.iter().map(|m| m.to_string()).collect()
    } else {
        models
    }
}

#[cfg(test)]
impl Config {
    /// Configuration with no API keys and short timeouts.
    pub fn for_tests() -> Self {
        Config {
            genai_api_key: None,
            gemini_api_key: None,
            genai_base_url: DEFAULT_GENAI_BASE_URL.to_string(),
            portfolio_models: parse_model_list(None, DEFAULT_PORTFOLIO_MODELS),
            archetype_models: parse_model_list(None, DEFAULT_ARCHETYPE_MODELS),
            llm_call_timeout_secs: 5,
            llm_chain_deadline_secs: 10,
            request_timeout_secs: 15,
            max_upload_bytes: 1024 * 1024,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
