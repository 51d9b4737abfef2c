// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), where σ is the population standard deviation
// over the same trailing window as the SMA.
//
// The Band Width (BBW) is the normalised distance:
//   BBW = (upper - lower) / middle * 100
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::indicators::sma::sma;
use crate::series::{is_defined, undefined_series, IndicatorSeries, UNDEFINED};

pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const DEFAULT_STD_DEV_MULTIPLIER: f64 = 2.0;

/// Upper / middle / lower envelope, each the length of the source series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSet {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

impl BandSet {
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// Per-index Bollinger Band Width in percent of the middle band.
    ///
    /// Undefined where the bands are undefined or the middle band is zero.
    pub fn width(&self) -> IndicatorSeries {
        self.upper
            .iter()
            .zip(&self.middle)
            .zip(&self.lower)
            .map(|((&u, &m), &l)| {
                if !is_defined(m) || m == 0.0 {
                    UNDEFINED
                } else {
                    (u - l) / m * 100.0
                }
            })
            .collect()
    }
}

/// Calculate Bollinger Bands for `series`.
///
/// All three bands share the SMA warm-up boundary (`period - 1`).
pub fn bollinger_bands(series: &[f64], period: usize, std_dev_multiplier: f64) -> BandSet {
    let middle = sma(series, period);
    let mut upper = undefined_series(series.len());
    let mut lower = undefined_series(series.len());

    if period > 0 && series.len() >= period {
        let period_f = period as f64;
        for (offset, window) in series.windows(period).enumerate() {
            let i = offset + period - 1;
            let mean = middle[i];
            let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period_f;
            let band = std_dev_multiplier * variance.sqrt();
            upper[i] = mean + band;
            lower[i] = mean - band;
        }
    }

    BandSet {
        upper,
        middle,
        lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::defined_count;

    #[test]
    fn bollinger_basic() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let bb = bollinger_bands(&closes, 20, 2.0);
        assert_eq!(bb.len(), 20);
        assert_eq!(defined_count(&bb.middle), 1);
        assert!(bb.upper[19] > bb.middle[19]);
        assert!(bb.lower[19] < bb.middle[19]);
        assert!(bb.width()[19] > 0.0);
    }

    #[test]
    fn bollinger_uses_population_std_dev() {
        // [2,4,4,4,5,5,7,9]: mean 5, population σ = 2.
        let closes = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bb = bollinger_bands(&closes, 8, 2.0);
        assert!((bb.middle[7] - 5.0).abs() < 1e-12);
        assert!((bb.upper[7] - 9.0).abs() < 1e-12);
        assert!((bb.lower[7] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bollinger_middle_equals_sma_and_bands_are_symmetric() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let bb = bollinger_bands(&closes, 20, 2.0);
        let m = sma(&closes, 20);
        for i in 0..closes.len() {
            if i < 19 {
                assert!(!is_defined(bb.upper[i]));
                assert!(!is_defined(bb.middle[i]));
                assert!(!is_defined(bb.lower[i]));
                continue;
            }
            assert_eq!(bb.middle[i].to_bits(), m[i].to_bits());
            let up = bb.upper[i] - bb.middle[i];
            let down = bb.middle[i] - bb.lower[i];
            assert!((up - down).abs() < 1e-9, "asymmetric at {i}");
        }
    }

    #[test]
    fn bollinger_insufficient_data() {
        let bb = bollinger_bands(&[1.0, 2.0, 3.0], 20, 2.0);
        assert_eq!(bb.len(), 3);
        assert_eq!(defined_count(&bb.upper), 0);
        assert_eq!(defined_count(&bb.lower), 0);
    }

    #[test]
    fn bollinger_flat() {
        let bb = bollinger_bands(&[100.0; 20], 20, 2.0);
        assert_eq!(bb.upper[19], 100.0);
        assert_eq!(bb.lower[19], 100.0);
        assert!(bb.width()[19].abs() < 1e-10);
    }

    #[test]
    fn width_undefined_on_zero_middle() {
        let bb = bollinger_bands(&[0.0; 5], 5, 2.0);
        assert!(!is_defined(bb.width()[4]));
    }

    #[test]
    fn bollinger_does_not_mutate_and_is_repeatable() {
        let closes: Vec<f64> = (0..50).map(|i| 80.0 + (i as f64 * 0.9).cos() * 3.0).collect();
        let copy = closes.clone();
        let a = bollinger_bands(&closes, 20, 2.0);
        let b = bollinger_bands(&closes, 20, 2.0);
        assert_eq!(closes, copy);
        for (x, y) in [(&a.upper, &b.upper), (&a.middle, &b.middle), (&a.lower, &b.lower)] {
            assert_eq!(x.len(), y.len());
            for (p, q) in x.iter().zip(y.iter()) {
                assert_eq!(p.to_bits(), q.to_bits());
            }
        }
    }
}
