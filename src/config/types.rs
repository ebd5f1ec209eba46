//! Configuration types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::common::errors::{ensure_security, Result, TraderError};
use crate::common::channels::DEFAULT_CHANNEL_SIZE;

/// Lot size used when none is configured
pub const DEFAULT_LOT: u32 = 100;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Threshold strategy configuration
    #[serde(default)]
    pub strategy: StrategyConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Threshold strategy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Quantity used for every order
    #[serde(default = "default_lot")]
    pub lot: u32,
    /// Per-security trigger levels
    #[serde(default)]
    pub thresholds: Vec<ThresholdConfig>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            lot: default_lot(),
            thresholds: Vec::new(),
        }
    }
}

impl StrategyConfig {
    /// Check every entry names a security and no security appears twice
    ///
    /// Inverted levels (buy at or above sell) are accepted.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.thresholds.len());
        for entry in &self.thresholds {
            ensure_security(&entry.security)
                .map_err(|e| TraderError::Configuration(e.to_string()))?;
            if !seen.insert(entry.security.as_str()) {
                return Err(TraderError::Configuration(format!(
                    "duplicate threshold entry for {}",
                    entry.security
                )));
            }
        }
        Ok(())
    }
}

fn default_lot() -> u32 {
    DEFAULT_LOT
}

/// Buy/sell trigger levels for one security
///
/// A missing side means no order is ever issued on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Security identifier
    pub security: String,
    /// Buy when the price falls below this level
    #[serde(default)]
    pub buy: Option<f64>,
    /// Sell when the price rises above this level
    #[serde(default)]
    pub sell: Option<f64>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Buffer size of the price update channel
    #[serde(default = "default_channel_size")]
    pub channel_size: usize,
    /// Record orders instead of sending them to the broker log
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            channel_size: default_channel_size(),
            dry_run: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_channel_size() -> usize {
    DEFAULT_CHANNEL_SIZE
}
