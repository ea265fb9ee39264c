//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{network, viewer};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Slide generation endpoint; `None` uses the in-process template generator
    pub generate_url: Option<String>,
    /// Directory holding `<id>.png` / `<id>.jpg` event images
    pub asset_dir: PathBuf,
    /// Idle time before slideshow controls auto-hide
    pub controls_idle: Duration,
    /// HTTP timeout for the generation client
    pub request_timeout: Duration,
    /// Seed for deterministic palette selection
    pub palette_seed: Option<u64>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            generate_url: None,
            asset_dir: PathBuf::from(viewer::DEFAULT_ASSET_DIR),
            controls_idle: Duration::from_secs(viewer::CONTROLS_IDLE_SECS),
            request_timeout: Duration::from_secs(network::REQUEST_TIMEOUT_SECS),
            palette_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.generate_url = lookup("EVENTDECK_GENERATE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if let Some(dir) = lookup("EVENTDECK_ASSET_DIR") {
            config.asset_dir = PathBuf::from(shellexpand::tilde(&dir).to_string());
        }

        if let Some(secs) = lookup("EVENTDECK_CONTROLS_IDLE_SECS") {
            config.controls_idle = Duration::from_secs(parse_number(
                "EVENTDECK_CONTROLS_IDLE_SECS",
                &secs,
                "Use a whole number of seconds, e.g. EVENTDECK_CONTROLS_IDLE_SECS=5",
            )?);
        }

        if let Some(secs) = lookup("EVENTDECK_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(parse_number(
                "EVENTDECK_REQUEST_TIMEOUT_SECS",
                &secs,
                "Use a whole number of seconds, e.g. EVENTDECK_REQUEST_TIMEOUT_SECS=30",
            )?);
        }

        if let Some(seed) = lookup("EVENTDECK_PALETTE_SEED") {
            config.palette_seed = Some(parse_number(
                "EVENTDECK_PALETTE_SEED",
                &seed,
                "Use an unsigned integer seed",
            )?);
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Check if a remote generation endpoint is configured
    pub const fn has_generate_endpoint(&self) -> bool {
        self.generate_url.is_some()
    }
}

fn parse_number(key: &str, raw: &str, hint: &'static str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| Error::config(format!("{key}={raw:?} is not a valid number ({e})"), hint))
}
