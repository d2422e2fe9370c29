//! Portal configuration
//!
//! Loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! ## Variables
//! - `PORTAL_DATA_DIR`: directory holding one JSON file per persisted key (default `./data`)
//! - `PORTAL_CHECKOUT_PHASE_MS`: delay per checkout processing phase in milliseconds (default 500)

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{PortalError, PortalResult};

pub const DATA_DIR_VAR: &str = "PORTAL_DATA_DIR";
pub const CHECKOUT_PHASE_MS_VAR: &str = "PORTAL_CHECKOUT_PHASE_MS";

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_CHECKOUT_PHASE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub data_dir: PathBuf,
    pub checkout_phase_delay: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            checkout_phase_delay: Duration::from_millis(DEFAULT_CHECKOUT_PHASE_MS),
        }
    }
}

impl PortalConfig {
    /// Defaults overlaid with `.env` and process environment
    pub fn from_env() -> PortalResult<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> PortalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(CHECKOUT_PHASE_MS_VAR) {
            let millis: u64 = raw.trim().parse().map_err(|_| PortalError::ConfigurationError {
                field: format!("{CHECKOUT_PHASE_MS_VAR}={raw}"),
            })?;
            config.checkout_phase_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_checkout_phase_delay(mut self, delay: Duration) -> Self {
        self.checkout_phase_delay = delay;
        self
    }
}
