// =============================================================================
// Average True Range (ATR)
// =============================================================================
//
// ATR measures market volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR_0 = H - L                                   (no previous close)
//   TR_t = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is the EMA of the TR series (SMA seed at index `period - 1`, then
// multiplier 2 / (period + 1)).
//
// Default period: 14
// =============================================================================

use crate::indicators::ema::ema;
use crate::market_data::Candle;
use crate::series::{last_defined, IndicatorSeries};

pub const DEFAULT_ATR_PERIOD: usize = 14;

/// True Range of every candle, oldest first. Same length as `candles`.
pub fn true_range(candles: &[Candle]) -> IndicatorSeries {
    let mut tr = Vec::with_capacity(candles.len());
    let mut prev_close: Option<f64> = None;

    for candle in candles {
        let hl = candle.high - candle.low;
        let value = match prev_close {
            None => hl,
            Some(pc) => hl.max((candle.high - pc).abs()).max((candle.low - pc).abs()),
        };
        tr.push(value);
        prev_close = Some(candle.close);
    }

    tr
}

/// Compute the ATR series for `candles` over `period`.
///
/// Output has one entry per candle; indices before `period - 1` are
/// undefined, and fewer than `period` candles yields an all-undefined series.
pub fn atr(candles: &[Candle], period: usize) -> IndicatorSeries {
    ema(&true_range(candles), period)
}

/// Latest defined ATR as a percentage of the latest close.
///
/// Useful for comparing volatility across assets with different price scales.
pub fn atr_percent(candles: &[Candle], period: usize) -> Option<f64> {
    let latest = last_defined(&atr(candles, period))?;
    let last_close = candles.last()?.close;
    if last_close == 0.0 {
        return None;
    }
    let pct = latest / last_close * 100.0;
    pct.is_finite().then_some(pct)
}
