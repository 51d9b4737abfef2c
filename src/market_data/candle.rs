use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// A single OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl Candle {
    pub fn new(
        time: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Close prices of `candles`, oldest first.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

/// Reject a candle history whose timestamps go backwards.
///
/// Equal consecutive timestamps are accepted; calendar gaps are irrelevant.
pub fn validate_order(candles: &[Candle]) -> Result<()> {
    for (i, pair) in candles.windows(2).enumerate() {
        if pair[1].time < pair[0].time {
            bail!(
                "candle {} at {} precedes candle {} at {}",
                i + 1,
                pair[1].time.to_rfc3339(),
                i,
                pair[0].time.to_rfc3339()
            );
        }
    }
    Ok(())
}

/// Parse a JSON array of candles and check time order.
pub fn parse_candles(json: &str) -> Result<Vec<Candle>> {
    let candles: Vec<Candle> =
        serde_json::from_str(json).context("failed to parse candle history JSON")?;
    validate_order(&candles)?;
    debug!(count = candles.len(), "candle history parsed");
    Ok(candles)
}

/// Load a candle history from a JSON file at `path`.
pub fn load_candles(path: impl AsRef<Path>) -> Result<Vec<Candle>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read candle history from {}", path.display()))?;

    let candles = parse_candles(&content)
        .with_context(|| format!("invalid candle history in {}", path.display()))?;

    info!(path = %path.display(), count = candles.len(), "candle history loaded");
    Ok(candles)
}
