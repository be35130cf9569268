//! Application configuration management.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::RoundingMode;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scale and rounding settings for the policy table.
    #[serde(default)]
    pub precision: PrecisionConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Scale and rounding settings.
///
/// Each named policy gets its own scale; a single rounding mode applies to all
/// of them. `currency_scales` overrides the `standard` scale per currency and is
/// merged over the built-in ISO minor units.
#[derive(Debug, Clone, Deserialize)]
pub struct PrecisionConfig {
    /// Scale for final monetary amounts.
    #[serde(default = "default_standard_scale")]
    pub standard_scale: u32,
    /// Scale for intermediate products before final rounding.
    #[serde(default = "default_intermediate_scale")]
    pub intermediate_scale: u32,
    /// Scale for conversion factors and exchange rates.
    #[serde(default = "default_rate_scale")]
    pub rate_scale: u32,
    /// Scale for stock quantities.
    #[serde(default = "default_quantity_scale")]
    pub quantity_scale: u32,
    /// Rounding mode applied by every policy.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Per-currency `standard` scale overrides, keyed by currency code.
    #[serde(default)]
    pub currency_scales: BTreeMap<String, u32>,
}

fn default_standard_scale() -> u32 {
    2
}

fn default_intermediate_scale() -> u32 {
    8
}

fn default_rate_scale() -> u32 {
    10
}

fn default_quantity_scale() -> u32 {
    4
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            standard_scale: default_standard_scale(),
            intermediate_scale: default_intermediate_scale(),
            rate_scale: default_rate_scale(),
            quantity_scale: default_quantity_scale(),
            rounding: RoundingMode::default(),
            currency_scales: BTreeMap::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "quanta=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `QUANTA__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("QUANTA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
