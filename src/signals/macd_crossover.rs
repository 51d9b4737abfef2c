// =============================================================================
// MACD Crossover Analyzer — classify the latest bar
// =============================================================================
//
// Compares the last two points of the MACD and signal lines:
//   bullish: prev macd <= prev signal AND cur macd > cur signal
//   bearish: prev macd >= prev signal AND cur macd < cur signal
//   else:    neutral
//
// Strength = min(|current histogram| * 10, 100). Bullish is checked first.

use serde::{Deserialize, Serialize};

/// Minimum points required in both the MACD and signal lines.
pub const MIN_POINTS: usize = 3;

/// Histogram magnitude to strength multiplier.
pub const STRENGTH_SCALE: f64 = 10.0;
pub const MAX_STRENGTH: f64 = 100.0;

/// Direction of a classified signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Bullish,
    Bearish,
    Neutral,
}

impl Default for SignalKind {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "bullish"),
            Self::Bearish => write!(f, "bearish"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Classification of the most recent bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    /// In `[0, 100]`.
    pub strength: f64,
    pub description: String,
}

impl Signal {
    fn neutral(description: &str) -> Self {
        Self {
            kind: SignalKind::Neutral,
            strength: 0.0,
            description: description.to_string(),
        }
    }
}

/// Classify the latest bar of a MACD triad.
///
/// Returns a neutral "Insufficient data" signal when either the MACD or the
/// signal line has fewer than three points.
pub fn analyze_macd_signal(macd: &[f64], signal: &[f64], histogram: &[f64]) -> Signal {
    if macd.len() < MIN_POINTS || signal.len() < MIN_POINTS {
        return Signal::neutral("Insufficient data");
    }

    let (prev_macd, cur_macd) = (macd[macd.len() - 2], macd[macd.len() - 1]);
    let (prev_signal, cur_signal) = (signal[signal.len() - 2], signal[signal.len() - 1]);

    let kind = if prev_macd <= prev_signal && cur_macd > cur_signal {
        SignalKind::Bullish
    } else if prev_macd >= prev_signal && cur_macd < cur_signal {
        SignalKind::Bearish
    } else {
        return Signal::neutral("No MACD crossover");
    };

    let strength = crossover_strength(histogram.last().copied());
    let description = match kind {
        SignalKind::Bullish => "Bullish MACD crossover: MACD crossed above signal line",
        _ => "Bearish MACD crossover: MACD crossed below signal line",
    };

    Signal {
        kind,
        strength,
        description: description.to_string(),
    }
}

/// Linear mapping of histogram magnitude onto `[0, 100]`.
///
/// `f64::min` would turn a NaN into the cap, so an undefined histogram maps
/// to 0.
fn crossover_strength(histogram: Option<f64>) -> f64 {
    match histogram {
        Some(h) if !h.is_nan() => (h.abs() * STRENGTH_SCALE).min(MAX_STRENGTH),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_macd_points() {
        let s = analyze_macd_signal(&[1.0, 2.0], &[0.0, 0.0, 0.0], &[1.0, 2.0]);
        assert_eq!(s.kind, SignalKind::Neutral);
        assert_eq!(s.strength, 0.0);
        assert_eq!(s.description, "Insufficient data");
    }

    #[test]
    fn insufficient_signal_points() {
        let s = analyze_macd_signal(&[1.0, 2.0, 3.0], &[0.0], &[]);
        assert_eq!(s.kind, SignalKind::Neutral);
        assert_eq!(s.description, "Insufficient data");
    }

    #[test]
    fn bullish_crossover_from_below() {
        let s = analyze_macd_signal(&[-2.0, -1.0, 1.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, 5.0]);
        assert_eq!(s.kind, SignalKind::Bullish);
        assert_eq!(s.strength, 50.0);
    }

    #[test]
    fn bullish_from_touching() {
        // prev macd == prev signal counts as "at or below".
        let s = analyze_macd_signal(&[0.0, 0.0, 0.5], &[0.0, 0.0, 0.2], &[0.3]);
        assert_eq!(s.kind, SignalKind::Bullish);
        assert!((s.strength - 3.0).abs() < 1e-12);
    }

    #[test]
    fn bearish_crossover_from_above() {
        let s = analyze_macd_signal(&[2.0, 1.0, -1.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, -4.0]);
        assert_eq!(s.kind, SignalKind::Bearish);
        assert_eq!(s.strength, 40.0);
    }

    #[test]
    fn strength_is_capped() {
        let s = analyze_macd_signal(&[-2.0, -1.0, 30.0], &[0.0, 0.0, 0.0], &[30.0]);
        assert_eq!(s.kind, SignalKind::Bullish);
        assert_eq!(s.strength, 100.0);
    }

    #[test]
    fn no_crossover_is_neutral() {
        let s = analyze_macd_signal(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]);
        assert_eq!(s.kind, SignalKind::Neutral);
        assert_eq!(s.strength, 0.0);

        let s = analyze_macd_signal(&[-1.0, -2.0, -3.0], &[0.0, 0.0, 0.0], &[-1.0, -2.0, -3.0]);
        assert_eq!(s.kind, SignalKind::Neutral);
    }

    #[test]
    fn equal_current_values_are_neutral() {
        let s = analyze_macd_signal(&[0.0, -1.0, 0.0], &[0.0, 0.0, 0.0], &[0.0]);
        assert_eq!(s.kind, SignalKind::Neutral);
    }

    #[test]
    fn undefined_tail_is_neutral() {
        let nan = f64::NAN;
        let s = analyze_macd_signal(&[nan, nan, nan], &[nan, nan, nan], &[nan, nan, nan]);
        assert_eq!(s.kind, SignalKind::Neutral);
        assert_eq!(s.strength, 0.0);
    }

    #[test]
    fn undefined_histogram_gives_zero_strength() {
        let s = analyze_macd_signal(&[-2.0, -1.0, 1.0], &[0.0, 0.0, 0.0], &[f64::NAN]);
        assert_eq!(s.kind, SignalKind::Bullish);
        assert_eq!(s.strength, 0.0);
    }

    #[test]
    fn kind_serialises_lowercase() {
        let json = serde_json::to_string(&SignalKind::Bearish).unwrap();
        assert_eq!(json, "\"bearish\"");
        assert_eq!(SignalKind::Bullish.to_string(), "bullish");
    }
}
