//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Cloudflare API token variable. Required.
pub const API_TOKEN_VAR: &str = "CLOUDFLARE_API_TOKEN";
/// Domain list path variable. Defaults to `domains.txt`.
pub const DOMAINS_FILE_VAR: &str = "NOMAIL_DOMAINS";
/// Audit log path variable. Defaults to a timestamped file in the working
/// directory.
pub const LOG_FILE_VAR: &str = "NOMAIL_LOG";

const DEFAULT_DOMAINS_FILE: &str = "domains.txt";

/// Configuration-phase errors. All of these are fatal and abort before any
/// network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingToken(&'static str),

    #[error("domain list file not found: {0}")]
    DomainsFileNotFound(PathBuf),

    #[error("failed to read domain list {path}: {source}")]
    DomainsFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub domains_file: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment. An empty token counts as
    /// missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = env::var(API_TOKEN_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken(API_TOKEN_VAR))?;

        let domains_file = env::var(DOMAINS_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOMAINS_FILE));

        let log_path = env::var(LOG_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_log_path());

        Ok(Self {
            api_token,
            domains_file,
            log_path,
        })
    }
}

/// Timestamped default audit log name, e.g. `nomail-20260823-142501.log`.
fn default_log_path() -> PathBuf {
    PathBuf::from(format!(
        "nomail-{}.log",
        chrono::Utc::now().format("%Y%m%d-%H%M%S")
    ))
}
