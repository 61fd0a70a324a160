//! # Split Configuration
//!
//! Tunables shared by the roster and the presentation layer.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIPSPLIT_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! ```text
//! TIPSPLIT_MAX_PARTICIPANTS=12     roster ceiling (≥ 1)
//! TIPSPLIT_DEFAULT_TIP=18          starting tip percentage (0-100)
//! TIPSPLIT_CURRENCY_SYMBOL=€       symbol used by display helpers
//! ```
//!
//! Unparseable or out-of-range values are ignored with a warning and the
//! default is kept.

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::money::format_amount;
use crate::{DEFAULT_TIP_PERCENT, MAX_PARTICIPANTS, MAX_TIP_PERCENT, TIP_PRESETS};

/// Split configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SplitConfig {
    /// Upper bound for the participant count.
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,

    /// Tip percentage a new session starts with.
    #[serde(default = "default_tip_percent")]
    pub default_tip_percent: f64,

    /// Quick-pick tip percentages.
    #[serde(default = "default_tip_presets")]
    pub tip_presets: Vec<f64>,

    /// Currency symbol for display.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_max_participants() -> u32 {
    MAX_PARTICIPANTS
}

fn default_tip_percent() -> f64 {
    DEFAULT_TIP_PERCENT
}

fn default_tip_presets() -> Vec<f64> {
    TIP_PRESETS.to_vec()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for SplitConfig {
    /// ## Default Values
    /// - Participants: up to 20
    /// - Tip: 15%
    /// - Presets: 0, 5, 10, 15, 20, 25, 30, 40
    /// - Currency: `$`
    fn default() -> Self {
        SplitConfig {
            max_participants: default_max_participants(),
            default_tip_percent: default_tip_percent(),
            tip_presets: default_tip_presets(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl SplitConfig {
    /// Creates a SplitConfig from environment variables and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    ///
    /// Split out of [`from_env`](Self::from_env) so tests don't touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SplitConfig::default();

        if let Some(raw) = lookup("TIPSPLIT_MAX_PARTICIPANTS") {
            match raw.trim().parse::<u32>() {
                Ok(max) if max >= 1 => config.max_participants = max,
                _ => warn!(value = %raw, "Ignoring invalid TIPSPLIT_MAX_PARTICIPANTS"),
            }
        }

        if let Some(raw) = lookup("TIPSPLIT_DEFAULT_TIP") {
            match raw.trim().parse::<f64>() {
                Ok(tip) if (0.0..=MAX_TIP_PERCENT).contains(&tip) => {
                    config.default_tip_percent = tip
                }
                _ => warn!(value = %raw, "Ignoring invalid TIPSPLIT_DEFAULT_TIP"),
            }
        }

        if let Some(symbol) = lookup("TIPSPLIT_CURRENCY_SYMBOL") {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                warn!("Ignoring empty TIPSPLIT_CURRENCY_SYMBOL");
            } else {
                config.currency_symbol = symbol.to_string();
            }
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::SplitConfig;
    ///
    /// let config = SplitConfig::default();
    /// assert_eq!(config.format_currency(12.075), "$12.07");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        format_amount(amount, &self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SplitConfig::default();
        assert_eq!(config.max_participants, 20);
        assert_eq!(config.default_tip_percent, 15.0);
        assert_eq!(config.tip_presets.len(), 8);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_env_overrides() {
        let config = SplitConfig::from_lookup(lookup_from(&[
            ("TIPSPLIT_MAX_PARTICIPANTS", "8"),
            ("TIPSPLIT_DEFAULT_TIP", "18.5"),
            ("TIPSPLIT_CURRENCY_SYMBOL", "€"),
        ]));
        assert_eq!(config.max_participants, 8);
        assert_eq!(config.default_tip_percent, 18.5);
        assert_eq!(config.format_currency(3.5), "€3.50");
    }

    #[test]
    fn test_invalid_env_values_keep_defaults() {
        let config = SplitConfig::from_lookup(lookup_from(&[
            ("TIPSPLIT_MAX_PARTICIPANTS", "0"),
            ("TIPSPLIT_DEFAULT_TIP", "150"),
            ("TIPSPLIT_CURRENCY_SYMBOL", "  "),
        ]));
        assert_eq!(config, SplitConfig::default());
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: SplitConfig = serde_json::from_str(r#"{"maxParticipants": 4}"#).unwrap();
        assert_eq!(config.max_participants, 4);
        assert_eq!(config.default_tip_percent, 15.0);
        assert_eq!(config.currency_symbol, "$");
    }
}
