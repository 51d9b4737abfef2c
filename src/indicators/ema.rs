// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = EMA_{t-1} + multiplier * (value_t - EMA_{t-1})
//
// The first EMA value, at index `period - 1`, is seeded with the SMA of the
// first `period` values.
// =============================================================================

use crate::series::{undefined_series, IndicatorSeries};

/// Compute the EMA series for `series` and look-back `period`.
///
/// The output has the input's length; indices before `period - 1` are
/// undefined.
///
/// # Edge cases
/// - `period == 0` => all-undefined
/// - `series.len() < period` => all-undefined
/// - A NaN input propagates to every later EMA value.
pub fn ema(series: &[f64], period: usize) -> IndicatorSeries {
    let mut out = undefined_series(series.len());
    if period == 0 || series.len() < period {
        return out;
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: SMA of the first `period` values. Summed in the same order as
    // `sma` so the seed is bit-identical to `sma(series, period)[period - 1]`.
    let seed = series[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = seed;

    let mut prev = seed;
    for (i, &value) in series.iter().enumerate().skip(period) {
        prev += multiplier * (value - prev);
        out[i] = prev;
    }

    out
}
