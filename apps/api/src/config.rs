use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::agents::finance::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub port: u16,
    pub optimize_timeout_secs: u64,
    pub pdf_output_dir: PathBuf,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            port: 8080,
            optimize_timeout_secs: 120,
            pdf_output_dir: PathBuf::from("output"),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        Ok(Config {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            port: match get("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            optimize_timeout_secs: match get("OPTIMIZE_TIMEOUT_SECS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("OPTIMIZE_TIMEOUT_SECS must be a whole number of seconds")?,
                None => defaults.optimize_timeout_secs,
            },
            pdf_output_dir: get("PDF_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.pdf_output_dir),
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
