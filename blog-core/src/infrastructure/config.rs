use std::str::FromStr;

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info,blog_core=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(anyhow!("unknown log format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Start the session with the seed blogs and posts.
    pub seed_data: bool,
    pub log_format: LogFormat,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_data: true,
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed_data = match lookup("BLOG_SEED") {
            Some(raw) => parse_bool(&raw).context("invalid BLOG_SEED")?,
            None => defaults.seed_data,
        };
        let log_format = match lookup("BLOG_LOG_FORMAT") {
            Some(raw) => raw.parse().context("invalid BLOG_LOG_FORMAT")?,
            None => defaults.log_format,
        };
        let log_filter = lookup("BLOG_LOG_FILTER")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);
        EnvFilter::try_new(&log_filter)
            .with_context(|| format!("invalid BLOG_LOG_FILTER: {:?}", log_filter))?;

        Ok(Self {
            seed_data,
            log_format,
            log_filter,
        })
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got {:?}", other)),
    }
}
