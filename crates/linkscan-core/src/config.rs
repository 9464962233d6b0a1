use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/linkscan/config.toml`,
/// then overridden by `LINKSCAN_*` environment variables, then by CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkscanConfig {
    /// Root domain eligible for checking; subdomains are included.
    pub allowed_domain: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: f64,
    /// Fixed sleep between successive network probes, in seconds.
    pub delay_secs: f64,
    /// User-Agent header for every probe.
    pub user_agent: String,
}

impl Default for LinkscanConfig {
    fn default() -> Self {
        Self {
            allowed_domain: "rmit.edu.au".to_string(),
            timeout_secs: 10.0,
            delay_secs: 0.10,
            user_agent: "linkscan/0.1 (+https://example.local)".to_string(),
        }
    }
}

/// Engine-facing view of the configuration. Immutable for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub allowed_domain: String,
    pub timeout: Duration,
    pub delay: Duration,
    pub user_agent: String,
}

impl RunConfig {
    pub fn request_options(&self) -> crate::transport::RequestOptions {
        crate::transport::RequestOptions {
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}

impl LinkscanConfig {
    /// Freeze the configuration for a run.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            allowed_domain: self.allowed_domain.clone(),
            timeout: Duration::from_secs_f64(self.timeout_secs.max(0.0)),
            delay: Duration::from_secs_f64(self.delay_secs.max(0.0)),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Apply `LINKSCAN_*` environment overrides. Unparseable numeric values
    /// are ignored with a warning rather than aborting the run.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("LINKSCAN_ALLOWED_DOMAIN") {
            self.allowed_domain = v;
        }
        if let Ok(v) = std::env::var("LINKSCAN_HTTP_TIMEOUT") {
            match v.parse::<f64>() {
                Ok(n) => self.timeout_secs = n,
                Err(_) => tracing::warn!(value = %v, "ignoring bad LINKSCAN_HTTP_TIMEOUT"),
            }
        }
        if let Ok(v) = std::env::var("LINKSCAN_REQUEST_DELAY") {
            match v.parse::<f64>() {
                Ok(n) => self.delay_secs = n,
                Err(_) => tracing::warn!(value = %v, "ignoring bad LINKSCAN_REQUEST_DELAY"),
            }
        }
        if let Ok(v) = std::env::var("LINKSCAN_USER_AGENT") {
            self.user_agent = v;
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkscanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkscanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinkscanConfig = toml::from_str(&data)?;
    Ok(cfg)
}
