// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// SMA_i = mean(input[i - period + 1 ..= i])
//
// The window sum is recomputed per position rather than carried as a running
// total, so a NaN in the input only poisons the windows that contain it.
// =============================================================================

use crate::series::{undefined_series, IndicatorSeries};

/// Compute the SMA series for `series` over a trailing window of `period`.
///
/// The output has the input's length. Indices `< period - 1` are undefined.
///
/// # Edge cases
/// - `period == 0` => all-undefined
/// - `series.len() < period` => all-undefined
pub fn sma(series: &[f64], period: usize) -> IndicatorSeries {
    let mut out = undefined_series(series.len());
    if period == 0 || series.len() < period {
        return out;
    }

    let period_f = period as f64;
    for (offset, window) in series.windows(period).enumerate() {
        out[offset + period - 1] = window.iter().sum::<f64>() / period_f;
    }
    out
}
