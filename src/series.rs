// =============================================================================
// Series Utilities — undefined sentinel, compaction and scatter
// =============================================================================
//
// Every indicator series is a plain `Vec<f64>` index-aligned with its source.
// Positions without enough history hold `UNDEFINED` (NaN).
//
// Compaction keeps each defined value paired with its original index so that
// a derived series can be scattered back to exactly the positions it came from.
// =============================================================================

/// An indicator output, same length as its source series.
pub type IndicatorSeries = Vec<f64>;

/// Sentinel marking warm-up positions that lack sufficient history.
pub const UNDEFINED: f64 = f64::NAN;

/// `true` when `value` carries a real number (not the undefined sentinel).
#[inline]
pub fn is_defined(value: f64) -> bool {
    !value.is_nan()
}

/// An all-undefined series of length `len`.
pub fn undefined_series(len: usize) -> IndicatorSeries {
    vec![UNDEFINED; len]
}

/// Number of defined entries in `series`.
pub fn defined_count(series: &[f64]) -> usize {
    series.iter().filter(|v| is_defined(**v)).count()
}

/// Most recent defined value, if any.
pub fn last_defined(series: &[f64]) -> Option<f64> {
    series.iter().rev().copied().find(|v| is_defined(*v))
}

/// Collect the defined entries of `series` as `(original_index, value)` pairs,
/// preserving order.
pub fn compact_defined(series: &[f64]) -> Vec<(usize, f64)> {
    series
        .iter()
        .enumerate()
        .filter(|(_, v)| is_defined(**v))
        .map(|(i, &v)| (i, v))
        .collect()
}

/// Write `values[k]` to `indices[k]` in a fresh all-undefined series of length
/// `len`. Indices outside `0..len` are ignored.
pub fn scatter(len: usize, indices: &[usize], values: &[f64]) -> IndicatorSeries {
    let mut out = undefined_series(len);
    for (&idx, &value) in indices.iter().zip(values) {
        if let Some(slot) = out.get_mut(idx) {
            *slot = value;
        }
    }
    out
}

/// Prefix `series` with `count` undefined values.
pub fn left_pad(series: &[f64], count: usize) -> IndicatorSeries {
    let mut out = Vec::with_capacity(series.len() + count);
    out.extend(std::iter::repeat(UNDEFINED).take(count));
    out.extend_from_slice(series);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_keeps_original_indices() {
        let s = vec![UNDEFINED, 1.0, UNDEFINED, 3.0];
        assert_eq!(compact_defined(&s), vec![(1, 1.0), (3, 3.0)]);
    }

    #[test]
    fn scatter_restores_positions() {
        let out = scatter(5, &[1, 3], &[10.0, 30.0]);
        assert_eq!(out.len(), 5);
        assert!(!is_defined(out[0]));
        assert_eq!(out[1], 10.0);
        assert!(!is_defined(out[2]));
        assert_eq!(out[3], 30.0);
        assert!(!is_defined(out[4]));
    }

    #[test]
    fn scatter_ignores_out_of_range() {
        let out = scatter(2, &[0, 7], &[1.0, 2.0]);
        assert_eq!(out[0], 1.0);
        assert!(!is_defined(out[1]));
    }

    #[test]
    fn last_defined_skips_trailing_nan() {
        assert_eq!(last_defined(&[1.0, 2.0, UNDEFINED]), Some(2.0));
        assert_eq!(last_defined(&[UNDEFINED, UNDEFINED]), None);
        assert_eq!(last_defined(&[]), None);
    }

    #[test]
    fn left_pad_prefixes_undefined() {
        let out = left_pad(&[5.0], 2);
        assert_eq!(out.len(), 3);
        assert_eq!(defined_count(&out), 1);
        assert_eq!(out[2], 5.0);
    }
}
