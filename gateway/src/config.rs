//! # Gateway Configuration
//!
//! Configuration loaded from environment variables. The binary calls
//! `dotenvy::dotenv()` first, so a `.env` file works too.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `ARBOSOCIAL_API_URL` | `http://localhost:5000/api` | API base URL |
//! | `ARBOSOCIAL_SESSION_FILE` | `.arbosocial/session.json` | Persisted session (binary) |
//! | `RUST_LOG` | `gateway=info,warn` | Log filter |
//! | `ARBOSOCIAL_LOG_DIR` | unset | Directory for rotating log files |
//! | `ARBOSOCIAL_LOG_JSON` | `0` | `1` for JSON log lines |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{GatewayError, Result};

/// Local-development API endpoint used when `ARBOSOCIAL_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Fixed timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_SESSION_FILE: &str = ".arbosocial/session.json";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive (e.g. `gateway=debug,info`)
    pub level: String,
    /// When set, also write daily-rotated log files here
    pub log_dir: Option<PathBuf>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "gateway=info,warn".to_string(),
            log_dir: None,
            json: false,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "gateway=info,warn".to_string()),
            log_dir: non_blank_var("ARBOSOCIAL_LOG_DIR").map(PathBuf::from),
            json: env::var("ARBOSOCIAL_LOG_JSON")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }
}

/// Gateway configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Global request timeout
    pub timeout: Duration,
    /// Where the binary persists the session
    pub session_file: PathBuf,
    pub log: LogConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            log: LogConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: resolve_base_url(non_blank_var("ARBOSOCIAL_API_URL")),
            timeout: DEFAULT_TIMEOUT,
            session_file: non_blank_var("ARBOSOCIAL_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE)),
            log: LogConfig::from_env(),
        }
    }

    /// Configuration pointing at `base_url`, everything else default.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration before building a client.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            GatewayError::Config(format!("Invalid API base URL '{}': {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::Config(format!(
                "API base URL must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(GatewayError::Config("Request timeout must be positive".to_string()));
        }

        Ok(())
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Configured base URL, or the local default when unset/blank.
fn resolve_base_url(configured: Option<String>) -> String {
    match configured.filter(|v| !v.trim().is_empty()) {
        Some(url) => normalize_base_url(&url),
        None => DEFAULT_API_URL.to_string(),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
