//! # Statement Configuration
//!
//! Loads the pricing rules once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     THEATER_TRAGEDY_BASE_AMOUNT=45000                                  │
//! │     THEATER_COMEDY_CREDIT_DIVISOR=4                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else $THEATER_CONFIG, else                        │
//! │     ~/.config/theater-billing/statement.toml (Linux)                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     PricingRules::default()                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # statement.toml
//! [pricing]
//! tragedy_base_amount = 40000
//! comedy_credit_divisor = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info, warn};

use theater_core::{Money, PricingRules};

use crate::error::AppResult;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "THEATER_CONFIG";

/// Prefix of the per-rule environment overrides.
pub const ENV_PREFIX: &str = "THEATER_";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// Pricing and volume-credit constants.
    pub pricing: PricingRules,
}

impl StatementConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (statement.toml); a missing file is not an error
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading statement config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());

        config.pricing.validate()?;

        Ok(config)
    }

    /// Applies `THEATER_<FIELD>` overrides read through `lookup`.
    ///
    /// Values that do not parse are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let pricing = &mut self.pricing;

        let amounts: [(&str, &mut Money); 6] = [
            ("TRAGEDY_BASE_AMOUNT", &mut pricing.tragedy_base_amount),
            ("TRAGEDY_PER_EXTRA_ATTENDEE", &mut pricing.tragedy_per_extra_attendee),
            ("COMEDY_BASE_AMOUNT", &mut pricing.comedy_base_amount),
            ("COMEDY_OVER_THRESHOLD_BONUS", &mut pricing.comedy_over_threshold_bonus),
            ("COMEDY_PER_EXTRA_ATTENDEE", &mut pricing.comedy_per_extra_attendee),
            ("COMEDY_PER_ATTENDEE", &mut pricing.comedy_per_attendee),
        ];
        for (name, field) in amounts {
            if let Some(cents) = parse_override::<i64, _>(&lookup, name) {
                *field = Money::from_cents(cents);
            }
        }

        let counts: [(&str, &mut u32); 4] = [
            ("TRAGEDY_AUDIENCE_THRESHOLD", &mut pricing.tragedy_audience_threshold),
            ("COMEDY_AUDIENCE_THRESHOLD", &mut pricing.comedy_audience_threshold),
            ("BASE_CREDIT_THRESHOLD", &mut pricing.base_credit_threshold),
            ("COMEDY_CREDIT_DIVISOR", &mut pricing.comedy_credit_divisor),
        ];
        for (name, field) in counts {
            if let Some(count) = parse_override::<u32, _>(&lookup, name) {
                *field = count;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "theater", "billing")
            .map(|dirs| dirs.config_dir().join("statement.toml"))
    }
}

fn parse_override<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let key = format!("{ENV_PREFIX}{name}");
    let raw = lookup(&key)?;

    match raw.trim().parse() {
        Ok(value) => {
            debug!(key = %key, value = %raw, "Overriding pricing rule from environment");
            Some(value)
        }
        Err(_) => {
            warn!(key = %key, value = %raw, "Ignoring unparseable pricing override");
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
