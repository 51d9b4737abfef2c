// =============================================================================
// candle-signals — technical indicators and MACD crossover signals
// =============================================================================
//
// Candle or price history in, derived series and a classified signal out.
// Every indicator is a pure function over a slice; nothing is cached or shared
// between calls, so any number of computations may run in parallel.
// =============================================================================

pub mod indicators;
pub mod market_data;
pub mod report;
pub mod runtime_config;
pub mod series;
pub mod signals;

pub use indicators::{
    atr, bollinger_bands, ema, macd, rsi, rsi_aligned, sma, true_range, BandSet, MacdResult,
};
pub use market_data::Candle;
pub use report::IndicatorReport;
pub use runtime_config::{CandleInput, IndicatorParams, RuntimeConfig};
pub use series::{IndicatorSeries, UNDEFINED};
pub use signals::{analyze_macd_signal, Signal, SignalAlert, SignalKind};
