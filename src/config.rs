//! Application Configuration
//!
//! Defaults can be overridden per browser profile by storing a JSON object
//! under the `furima_settings` key. Missing fields keep their defaults.

use std::collections::BTreeMap;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::storage::Storage;

/// Storage key holding configuration overrides
pub const SETTINGS_KEY: &str = "furima_settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage key of the item array
    pub storage_key: String,
    /// Console log level ("error" .. "trace", or "off")
    pub log_level: String,
    /// Selling fee rate per sale platform
    pub fee_rates: BTreeMap<String, f64>,
    /// Sale/purchase multiplier assumed when nothing has sold yet
    pub expected_multiplier: f64,
    /// Fee rate assumed for expected profit
    pub expected_fee_rate: f64,
    /// Multiplier assumed for a price suggestion without category history
    pub suggestion_multiplier: f64,
    /// Fee rate assumed for a price suggestion
    pub suggestion_fee_rate: f64,
    /// Profit rate (%) reported for a category without history
    pub suggestion_rate: f64,
    /// Seconds a notice stays visible
    pub notice_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fee_rates = [("ラクマ", 0.10), ("ヤフーフリマ", 0.05), ("メルカリ", 0.10)]
            .into_iter()
            .map(|(platform, rate)| (platform.to_string(), rate))
            .collect();
        Self {
            storage_key: "furima_data".to_string(),
            log_level: "info".to_string(),
            fee_rates,
            expected_multiplier: 1.5,
            expected_fee_rate: 0.10,
            suggestion_multiplier: 1.8,
            suggestion_fee_rate: 0.08,
            suggestion_rate: 40.0,
            notice_seconds: 5,
        }
    }
}

impl AppConfig {
    /// Load overrides from storage, falling back to defaults
    pub fn load(storage: &impl Storage) -> Self {
        match storage.read(SETTINGS_KEY) {
            Ok(Some(raw)) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("[CONFIG] Ignoring malformed settings: {}", e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] Could not read settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Fee rate for a platform, 0 when unknown
    pub fn fee_rate(&self, platform: &str) -> f64 {
        self.fee_rates.get(platform).copied().unwrap_or(0.0)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
