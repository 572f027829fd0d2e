use std::time::Duration;

use anyhow::{Context, Result};

use crate::embeddings::index::DEFAULT_TOP_K;

/// Sample roster shipped with the crate, resolved independently of the working directory.
pub const DEFAULT_ROSTER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/player_info.json");

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub roster_path: String,
    pub host: String,
    pub port: u16,
    /// Number of snippets retrieved per request.
    pub retrieval_top_k: usize,
    /// Total generation attempts per request, including the first one.
    pub generation_max_attempts: u32,
    pub generation_backoff: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let generation_max_attempts: u32 = parse_var(&lookup, "GENERATION_MAX_ATTEMPTS", 3)?;
        if generation_max_attempts == 0 {
            anyhow::bail!("GENERATION_MAX_ATTEMPTS must be at least 1");
        }

        Ok(Config {
            openai_api_key: require_var(&lookup, "OPENAI_API_KEY")?,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            roster_path: lookup("ROSTER_PATH").unwrap_or_else(|| DEFAULT_ROSTER_PATH.to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT", 8000)?,
            retrieval_top_k: parse_var(&lookup, "RETRIEVAL_TOP_K", DEFAULT_TOP_K)?,
            generation_max_attempts,
            generation_backoff: Duration::from_millis(parse_var(
                &lookup,
                "GENERATION_BACKOFF_MS",
                500,
            )?),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
