use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// JSON file mirroring the company store; in-memory only when unset.
    pub company_db_path: Option<PathBuf>,
    pub purge_on_start: bool,
    pub sheet_webhook_url: Option<String>,
    /// Display-only pause before answering a compare served from the store.
    pub cache_hit_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            company_db_path: optional_env("COMPANY_DB_PATH").map(PathBuf::from),
            purge_on_start: optional_env("COMPANY_DB_PURGE_ON_START")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("COMPANY_DB_PURGE_ON_START must be true or false")?
                .unwrap_or(false),
            sheet_webhook_url: optional_env("GOOGLE_SHEET_WEBHOOK_URL"),
            cache_hit_delay: Duration::from_millis(
                optional_env("CACHE_HIT_DELAY_MS")
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .context("CACHE_HIT_DELAY_MS must be a whole number of milliseconds")?
                    .unwrap_or(2000),
            ),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("off").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
