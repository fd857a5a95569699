use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_SESSION_STORE_PATH: &str = ".krystal/session.json";

/// Which backend the session store persists to.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionBackend {
    Memory,
    File(PathBuf),
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub session_backend: SessionBackend,
    pub simulated_latency: Duration,
    /// Maximum +/- points applied to displayed match scores. 0 disables jitter.
    pub match_score_jitter: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let session_backend = match optional_env("SESSION_STORE").as_deref() {
            Some("memory") => SessionBackend::Memory,
            Some("file") | None => SessionBackend::File(PathBuf::from(
                optional_env("SESSION_STORE_PATH")
                    .unwrap_or_else(|| DEFAULT_SESSION_STORE_PATH.to_string()),
            )),
            Some(other) => anyhow::bail!("SESSION_STORE must be 'memory' or 'file', got '{other}'"),
        };

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            session_backend,
            simulated_latency: Duration::from_millis(parse_env("SIMULATED_LATENCY_MS", 1500u64)?),
            match_score_jitter: parse_env("MATCH_SCORE_JITTER", 3u8)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            session_backend: SessionBackend::Memory,
            simulated_latency: Duration::from_millis(1500),
            match_score_jitter: 0,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
