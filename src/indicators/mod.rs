// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the technical indicators. Every
// series-returning function keeps the input's length and marks warm-up
// positions with the undefined sentinel, so insufficient data is a
// representable outcome rather than an error. RSI is the one exception: its
// raw output is `len - period` long (see `rsi_aligned`).

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use atr::{atr, atr_percent, true_range, DEFAULT_ATR_PERIOD};
pub use bollinger::{
    bollinger_bands, BandSet, DEFAULT_BOLLINGER_PERIOD, DEFAULT_STD_DEV_MULTIPLIER,
};
pub use ema::ema;
pub use macd::{
    macd, MacdResult, DEFAULT_FAST_PERIOD, DEFAULT_SIGNAL_PERIOD, DEFAULT_SLOW_PERIOD,
};
pub use rsi::{current_rsi, rsi, rsi_aligned, rsi_zone, DEFAULT_RSI_PERIOD};
pub use sma::sma;
