use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::readiness::DEFAULT_READY_TIMEOUT;

const DEFAULT_CAREER_START: &str = "2012-09-01";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_addr: String,
    pub port: u16,
    pub static_dir: PathBuf,

    // Content
    pub content_path: Option<PathBuf>,
    pub ready_timeout: Duration,
    pub career_start: NaiveDate,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let career_start = var("CAREER_START").unwrap_or_else(|| DEFAULT_CAREER_START.to_string());

        Ok(Self {
            // Server
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match var("PORT") {
                Some(port) => port.parse().context("PORT must be a port number")?,
                None => 3000,
            },
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),

            // Content
            content_path: var("CONTENT_PATH").map(PathBuf::from),
            ready_timeout: var("READY_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_READY_TIMEOUT),
            career_start: NaiveDate::parse_from_str(&career_start, "%Y-%m-%d")
                .context("CAREER_START must be a YYYY-MM-DD date")?,
        })
    }
}
