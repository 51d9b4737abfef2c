// =============================================================================
// Indicator Report — candle history to every series plus the latest signal
// =============================================================================
//
// Pipeline:
//   candles -> closes -> SMA / EMA / RSI / Bollinger / MACD
//   candles -> ATR
//   MACD triad -> crossover signal -> optional alert
//
// Every series in the report is index-aligned with the candle history (RSI is
// the padded variant). Undefined entries serialise as JSON `null`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::indicators::{
    atr, bollinger_bands, ema, macd, rsi_aligned, rsi_zone, sma, BandSet, MacdResult,
};
use crate::market_data::{closes, Candle};
use crate::runtime_config::IndicatorParams;
use crate::series::{last_defined, IndicatorSeries};
use crate::signals::{analyze_macd_signal, Signal, SignalAlert};

/// Most recent defined value of each series.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LatestValues {
    pub time: Option<DateTime<Utc>>,
    pub close: Option<f64>,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub rsi_zone: Option<&'static str>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_middle: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub bollinger_width: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub atr: Option<f64>,
}

/// Full indicator snapshot for one symbol.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorReport {
    pub symbol: String,
    pub candles: usize,
    pub params: IndicatorParams,
    pub sma: IndicatorSeries,
    pub ema: IndicatorSeries,
    pub rsi: IndicatorSeries,
    pub bollinger: BandSet,
    pub macd: MacdResult,
    pub atr: IndicatorSeries,
    pub latest: LatestValues,
    pub signal: Signal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<SignalAlert>,
}

impl IndicatorReport {
    /// Run every indicator over `candles` and classify the latest bar.
    ///
    /// Short histories are not an error: the affected series stay undefined
    /// and the signal reports insufficient data. An alert that fails
    /// `SignalAlert::validate` is logged and left out.
    pub fn build(symbol: impl Into<String>, candles: &[Candle], params: &IndicatorParams) -> Self {
        let symbol = symbol.into();
        let prices = closes(candles);

        let sma = sma(&prices, params.sma_period);
        let ema = ema(&prices, params.ema_period);
        let rsi = rsi_aligned(&prices, params.rsi_period);
        let bollinger =
            bollinger_bands(&prices, params.bollinger_period, params.std_dev_multiplier);
        let macd = macd(
            &prices,
            params.macd_fast_period,
            params.macd_slow_period,
            params.macd_signal_period,
        );
        let atr = atr(candles, params.atr_period);

        let signal = analyze_macd_signal(&macd.macd, &macd.signal, &macd.histogram);
        let alert = SignalAlert::from_signal(symbol.as_str(), &signal).and_then(|alert| {
            match alert.validate() {
                Ok(()) => Some(alert),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Dropping invalid signal alert");
                    None
                }
            }
        });

        let latest_rsi = last_defined(&rsi);
        let latest = LatestValues {
            time: candles.last().map(|c| c.time),
            close: prices.last().copied(),
            sma: last_defined(&sma),
            ema: last_defined(&ema),
            rsi: latest_rsi,
            rsi_zone: latest_rsi.map(rsi_zone),
            bollinger_upper: last_defined(&bollinger.upper),
            bollinger_middle: last_defined(&bollinger.middle),
            bollinger_lower: last_defined(&bollinger.lower),
            bollinger_width: last_defined(&bollinger.width()),
            macd: last_defined(&macd.macd),
            macd_signal: last_defined(&macd.signal),
            macd_histogram: last_defined(&macd.histogram),
            atr: last_defined(&atr),
        };

        debug!(
            symbol = %symbol,
            candles = candles.len(),
            signal = %signal.kind,
            strength = format!("{:.1}", signal.strength),
            rsi = ?latest.rsi,
            atr = ?latest.atr,
            "indicator report built"
        );

        Self {
            symbol,
            candles: candles.len(),
            params: params.clone(),
            sma,
            ema,
            rsi,
            bollinger,
            macd,
            atr,
            latest,
            signal,
            alert,
        }
    }
}
