// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1: Compute per-bar gain / loss from consecutive closes.
// Step 2: Seed average gain / average loss with the mean of the first
//         `period` gains / losses.
// Step 3: For every later bar apply Wilder's smoothing with that bar's own
//         gain / loss:
//           avg_gain = (avg_gain * (period - 1) + gain) / period
//           avg_loss = (avg_loss * (period - 1) + loss) / period
// Step 4: RS  = avg_gain / avg_loss
//         RSI = 100 - 100 / (1 + RS)
//
// Output layout: `closes.len() - period` values. The first one corresponds to
// the seed and is undefined; value `j` lines up with close index `period + j`.
// Use `rsi_aligned` for a series padded to the input length.
//
// Thresholds:  RSI >= 70 => OVERBOUGHT,  RSI <= 30 => OVERSOLD.
// =============================================================================

use crate::series::{last_defined, left_pad, IndicatorSeries, UNDEFINED};

/// Standard Wilder look-back.
pub const DEFAULT_RSI_PERIOD: usize = 14;

pub const OVERBOUGHT: f64 = 70.0;
pub const OVERSOLD: f64 = 30.0;

/// Compute the RSI series for `closes` and `period`.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `closes.len() <= period` => empty vec
/// - Average loss of exactly zero => RSI 100.
/// - A NaN close makes every later value undefined, as with EMA.
pub fn rsi(closes: &[f64], period: usize) -> IndicatorSeries {
    if period == 0 || closes.len() <= period {
        return Vec::new();
    }

    // --- Per-bar gains and losses -------------------------------------------
    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            if change.is_nan() {
                // `f64::max` would drop the NaN and report a flat bar.
                (UNDEFINED, UNDEFINED)
            } else {
                (change.max(0.0), (-change).max(0.0))
            }
        })
        .unzip();

    // --- Seed averages with the mean of the first `period` changes ----------
    let period_f = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / period_f;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period_f;

    let mut result = Vec::with_capacity(closes.len() - period);
    result.push(UNDEFINED);

    // --- Wilder's smoothing for subsequent bars -----------------------------
    for (&gain, &loss) in gains[period..].iter().zip(&losses[period..]) {
        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
        result.push(rsi_from_averages(avg_gain, avg_loss));
    }

    result
}

/// RSI left-padded with `period` undefined values so that it has the input's
/// length and each value sits at the index of the close it describes.
pub fn rsi_aligned(closes: &[f64], period: usize) -> IndicatorSeries {
    let raw = rsi(closes, period);
    if raw.is_empty() {
        return vec![UNDEFINED; closes.len()];
    }
    left_pad(&raw, period)
}

/// Human-readable zone for an RSI value.
pub fn rsi_zone(value: f64) -> &'static str {
    if value >= OVERBOUGHT {
        "OVERBOUGHT"
    } else if value <= OVERSOLD {
        "OVERSOLD"
    } else {
        "NEUTRAL"
    }
}

/// Convenience function: return the most recent defined RSI value together
/// with its zone label.
pub fn current_rsi(closes: &[f64], period: usize) -> Option<(f64, &'static str)> {
    let value = last_defined(&rsi(closes, period))?;
    Some((value, rsi_zone(value)))
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // RS is infinite: saturate instead of leaning on inf arithmetic.
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
