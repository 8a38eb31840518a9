//! # Till Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--store-name`, `--on-invalid`, `--format`)
//! 2. Environment variables (`GROCER_*`)
//! 3. Defaults (this file)
//!
//! Discount and tax rules are not configurable; they live in
//! `grocer_core::PricingPolicy::default()`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Store name env override.
pub const ENV_STORE_NAME: &str = "GROCER_STORE_NAME";
/// Invalid-input policy env override (`reprompt` | `abort`).
pub const ENV_ON_INVALID: &str = "GROCER_ON_INVALID";
/// Output format env override (`text` | `json`).
pub const ENV_FORMAT: &str = "GROCER_FORMAT";

/// What the collector does when a quantity or price fails validation.
/// A rejected item name is always asked again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// Explain the problem and ask the same question again.
    #[default]
    Reprompt,

    /// Stop the session without printing a receipt.
    Abort,
}

/// How the finished receipt is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable receipt.
    #[default]
    Text,

    /// Receipt as pretty JSON; prompts move to stderr.
    Json,
}

/// Effective settings for one till session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shown in the welcome banner.
    pub store_name: String,

    pub on_invalid: InvalidInputPolicy,

    pub format: OutputFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Samiullah Grocery Store".to_string(),
            on_invalid: InvalidInputPolicy::Reprompt,
            format: OutputFormat::Text,
        }
    }
}

impl StoreConfig {
    /// Loads defaults overlaid with `GROCER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(name) = lookup(ENV_STORE_NAME) {
            let name = name.trim();
            if !name.is_empty() {
                config.store_name = name.to_string();
            }
        }

        if let Some(value) = lookup(ENV_ON_INVALID) {
            config.on_invalid = parse_choice(ENV_ON_INVALID, &value)?;
        }

        if let Some(value) = lookup(ENV_FORMAT) {
            config.format = parse_choice(ENV_FORMAT, &value)?;
        }

        Ok(config)
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(name) = &args.store_name {
            self.store_name = name.clone();
        }
        if let Some(policy) = args.on_invalid {
            self.on_invalid = policy;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        self
    }
}

fn parse_choice<T: ValueEnum>(name: &str, value: &str) -> Result<T, ConfigError> {
    T::from_str(value.trim(), true).map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },
}
