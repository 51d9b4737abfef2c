// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   macd      = EMA(fast) - EMA(slow)      defined where both EMAs are
//   signal    = EMA(signal_period) over the defined macd values only
//   histogram = macd - signal
//
// The signal EMA runs over a compacted copy of the macd line. Each compacted
// value keeps its original index and results are scattered back by that index,
// so the alignment holds even if undefined runs appear mid-series.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::indicators::ema::ema;
use crate::series::{compact_defined, is_defined, scatter, IndicatorSeries, UNDEFINED};

pub const DEFAULT_FAST_PERIOD: usize = 12;
pub const DEFAULT_SLOW_PERIOD: usize = 26;
pub const DEFAULT_SIGNAL_PERIOD: usize = 9;

/// MACD line, signal line and histogram, each aligned to the input length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdResult {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// Compute the MACD triad for `series`.
pub fn macd(
    series: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdResult {
    let fast = ema(series, fast_period);
    let slow = ema(series, slow_period);

    let macd_line: IndicatorSeries = fast
        .iter()
        .zip(&slow)
        .map(|(&f, &s)| {
            if is_defined(f) && is_defined(s) {
                f - s
            } else {
                UNDEFINED
            }
        })
        .collect();

    let (indices, values): (Vec<usize>, Vec<f64>) =
        compact_defined(&macd_line).into_iter().unzip();
    let compact_signal = ema(&values, signal_period);
    let signal = scatter(series.len(), &indices, &compact_signal);

    let histogram = macd_line
        .iter()
        .zip(&signal)
        .map(|(&m, &s)| {
            if is_defined(m) && is_defined(s) {
                m - s
            } else {
                UNDEFINED
            }
        })
        .collect();

    MacdResult {
        macd: macd_line,
        signal,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::defined_count;

    fn wave(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + (i as f64 * 0.25).sin() * 8.0 + i as f64 * 0.1)
            .collect()
    }

    #[test]
    fn macd_lengths_match_input() {
        let s = wave(80);
        let r = macd(&s, 12, 26, 9);
        assert_eq!(r.macd.len(), 80);
        assert_eq!(r.signal.len(), 80);
        assert_eq!(r.histogram.len(), 80);
    }

    #[test]
    fn macd_warm_up_boundaries() {
        let s = wave(80);
        let r = macd(&s, 12, 26, 9);
        // macd defined from slow warm-up, signal 8 bars later.
        assert!(r.macd[..25].iter().all(|v| !is_defined(*v)));
        assert!(r.macd[25..].iter().all(|v| is_defined(*v)));
        assert!(r.signal[..33].iter().all(|v| !is_defined(*v)));
        assert!(r.signal[33..].iter().all(|v| is_defined(*v)));
        assert_eq!(defined_count(&r.histogram), 80 - 33);
    }

    #[test]
    fn macd_line_is_fast_minus_slow() {
        let s = wave(60);
        let r = macd(&s, 12, 26, 9);
        let fast = ema(&s, 12);
        let slow = ema(&s, 26);
        for i in 25..60 {
            assert_eq!(r.macd[i], fast[i] - slow[i]);
        }
    }

    #[test]
    fn signal_is_ema_of_defined_macd_values() {
        let s = wave(70);
        let r = macd(&s, 12, 26, 9);
        let compact: Vec<f64> = r.macd[25..].to_vec();
        let expected = ema(&compact, 9);
        for (k, i) in (25..70).enumerate() {
            if is_defined(expected[k]) {
                assert_eq!(r.signal[i].to_bits(), expected[k].to_bits());
                assert_eq!(r.histogram[i], r.macd[i] - expected[k]);
            } else {
                assert!(!is_defined(r.signal[i]));
            }
        }
    }

    #[test]
    fn histogram_undefined_wherever_macd_is() {
        for n in [0, 5, 26, 30, 34, 100] {
            let r = macd(&wave(n), 12, 26, 9);
            for i in 0..n {
                if !is_defined(r.macd[i]) {
                    assert!(!is_defined(r.histogram[i]), "n={n} i={i}");
                }
                if is_defined(r.histogram[i]) {
                    assert!(is_defined(r.macd[i]));
                }
            }
        }
    }

    #[test]
    fn macd_short_input_is_all_undefined() {
        let r = macd(&[1.0, 2.0, 3.0], 12, 26, 9);
        assert_eq!(defined_count(&r.macd), 0);
        assert_eq!(defined_count(&r.signal), 0);
        assert_eq!(defined_count(&r.histogram), 0);
    }

    #[test]
    fn macd_flat_series_is_zero() {
        let r = macd(&[50.0; 60], 12, 26, 9);
        for i in 33..60 {
            assert!(r.macd[i].abs() < 1e-10);
            assert!(r.histogram[i].abs() < 1e-10);
        }
    }

    #[test]
    fn macd_realigns_around_mid_series_gap() {
        // NaN in the input poisons both EMAs from that point; the signal line
        // must still sit on the defined macd positions only.
        let mut s = wave(50);
        s[40] = f64::NAN;
        let r = macd(&s, 3, 6, 3);
        assert!(r.macd[5..40].iter().all(|v| is_defined(*v)));
        assert!(r.macd[40..].iter().all(|v| !is_defined(*v)));
        assert!(r.signal[7..40].iter().all(|v| is_defined(*v)));
        assert!(r.signal[40..].iter().all(|v| !is_defined(*v)));
    }

    #[test]
    fn macd_does_not_mutate_and_is_repeatable() {
        let s = wave(90);
        let copy = s.clone();
        let a = macd(&s, 12, 26, 9);
        let b = macd(&s, 12, 26, 9);
        assert_eq!(s, copy);
        let pairs = [
            (&a.macd, &b.macd),
            (&a.signal, &b.signal),
            (&a.histogram, &b.histogram),
        ];
        for (x, y) in pairs {
            assert_eq!(x.len(), y.len());
            for (p, q) in x.iter().zip(y.iter()) {
                assert_eq!(p.to_bits(), q.to_bits());
            }
        }
    }
}
