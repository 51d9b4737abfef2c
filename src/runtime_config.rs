// =============================================================================
// Runtime Configuration — indicator parameters and candle inputs
// =============================================================================
//
// All fields carry `#[serde(default)]` so that adding new fields never breaks
// loading an older config file. Persistence uses an atomic tmp + rename.
// =============================================================================

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::indicators::{
    DEFAULT_ATR_PERIOD, DEFAULT_BOLLINGER_PERIOD, DEFAULT_FAST_PERIOD, DEFAULT_RSI_PERIOD,
    DEFAULT_SIGNAL_PERIOD, DEFAULT_SLOW_PERIOD, DEFAULT_STD_DEV_MULTIPLIER,
};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_sma_period() -> usize {
    20
}

fn default_ema_period() -> usize {
    20
}

fn default_rsi_period() -> usize {
    DEFAULT_RSI_PERIOD
}

fn default_bollinger_period() -> usize {
    DEFAULT_BOLLINGER_PERIOD
}

fn default_std_dev_multiplier() -> f64 {
    DEFAULT_STD_DEV_MULTIPLIER
}

fn default_fast_period() -> usize {
    DEFAULT_FAST_PERIOD
}

fn default_slow_period() -> usize {
    DEFAULT_SLOW_PERIOD
}

fn default_signal_period() -> usize {
    DEFAULT_SIGNAL_PERIOD
}

fn default_atr_period() -> usize {
    DEFAULT_ATR_PERIOD
}

// =============================================================================
// IndicatorParams
// =============================================================================

/// Look-back periods and multipliers for every indicator in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    #[serde(default = "default_sma_period")]
    pub sma_period: usize,

    #[serde(default = "default_ema_period")]
    pub ema_period: usize,

    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Band distance from the middle band, in standard deviations.
    #[serde(default = "default_std_dev_multiplier")]
    pub std_dev_multiplier: f64,

    #[serde(default = "default_fast_period")]
    pub macd_fast_period: usize,

    #[serde(default = "default_slow_period")]
    pub macd_slow_period: usize,

    #[serde(default = "default_signal_period")]
    pub macd_signal_period: usize,

    #[serde(default = "default_atr_period")]
    pub atr_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_period: default_sma_period(),
            ema_period: default_ema_period(),
            rsi_period: default_rsi_period(),
            bollinger_period: default_bollinger_period(),
            std_dev_multiplier: default_std_dev_multiplier(),
            macd_fast_period: default_fast_period(),
            macd_slow_period: default_slow_period(),
            macd_signal_period: default_signal_period(),
            atr_period: default_atr_period(),
        }
    }
}

impl IndicatorParams {
    /// Reject parameter sets that cannot produce a meaningful series.
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("sma_period", self.sma_period),
            ("ema_period", self.ema_period),
            ("rsi_period", self.rsi_period),
            ("bollinger_period", self.bollinger_period),
            ("macd_fast_period", self.macd_fast_period),
            ("macd_slow_period", self.macd_slow_period),
            ("macd_signal_period", self.macd_signal_period),
            ("atr_period", self.atr_period),
        ];
        for (name, value) in periods {
            if value == 0 {
                bail!("{name} must be positive");
            }
        }
        if self.macd_fast_period >= self.macd_slow_period {
            bail!(
                "macd_fast_period ({}) must be shorter than macd_slow_period ({})",
                self.macd_fast_period,
                self.macd_slow_period
            );
        }
        if !(self.std_dev_multiplier.is_finite() && self.std_dev_multiplier > 0.0) {
            bail!("std_dev_multiplier must be a positive number");
        }
        Ok(())
    }
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// One candle history to analyse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleInput {
    pub symbol: String,
    /// JSON file holding an array of candles, oldest first.
    pub path: PathBuf,
}

/// Top-level configuration for the report runner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Candle histories to analyse.
    #[serde(default)]
    pub inputs: Vec<CandleInput>,

    #[serde(default)]
    pub params: IndicatorParams,
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            inputs = config.inputs.len(),
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise runtime config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "runtime config saved (atomic)");
        Ok(())
    }

    /// Parse a `SYMBOL=path,SYMBOL=path` list, as used by the
    /// `CANDLE_SIGNALS_INPUTS` override.
    pub fn parse_inputs(list: &str) -> Result<Vec<CandleInput>> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let Some((symbol, path)) = entry.split_once('=') else {
                    bail!("input `{entry}` must look like SYMBOL=path");
                };
                let (symbol, path) = (symbol.trim(), path.trim());
                if symbol.is_empty() || path.is_empty() {
                    bail!("input `{entry}` has an empty symbol or path");
                }
                Ok(CandleInput {
                    symbol: symbol.to_uppercase(),
                    path: PathBuf::from(path),
                })
            })
            .collect()
    }
}
