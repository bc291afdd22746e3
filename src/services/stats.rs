//! Numeric reductions used by the aggregator.

/// Running mean, so that large finite samples do not overflow a plain sum.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mean = values
        .iter()
        .enumerate()
        .fold(0.0, |acc, (i, v)| acc + (v - acc) / (i + 1) as f64);
    Some(mean)
}

/// Percentile `p` (0..=100) with linear interpolation between the closest
/// ranks of the sorted sample, i.e. `rank = p/100 * (n - 1)`.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Half away from zero. Magnitudes too large to scale have no fractional
/// digits left and are returned as is.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

pub fn count_above(values: &[f64], threshold: f64) -> u64 {
    values.iter().filter(|&&v| v > threshold).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4.0]), Some(4.0));
        assert_eq!(mean(&[100.0, 300.0]), Some(200.0));
    }

    #[test]
    fn test_near_max_values_stay_finite() {
        let values = [1.7e308, 1.7e308];
        assert_eq!(mean(&values), Some(1.7e308));
        assert_eq!(percentile(&values, 95.0), Some(1.7e308));
        assert_eq!(round2(1.7e308), 1.7e308);
    }

    #[test]
    fn test_percentile_interpolates() {
        assert_eq!(percentile(&[100.0, 300.0], 95.0), Some(290.0));
        assert_eq!(percentile(&[300.0, 100.0], 50.0), Some(200.0));
        // rank = 0.95 * 4 = 3.8 -> 4 + (5 - 4) * 0.8
        let p = percentile(&[5.0, 1.0, 3.0, 2.0, 4.0], 95.0).unwrap();
        assert!((p - 4.8).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_bounds() {
        assert_eq!(percentile(&[], 95.0), None);
        assert_eq!(percentile(&[42.0], 95.0), Some(42.0));
        assert_eq!(percentile(&[1.0, 2.0, 3.0], 0.0), Some(1.0));
        assert_eq!(percentile(&[1.0, 2.0, 3.0], 100.0), Some(3.0));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(99.45), 99.45);
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(200.0), 200.0);
    }

    #[test]
    fn test_count_above_is_strict() {
        assert_eq!(count_above(&[179.0, 180.0, 180.01, 300.0], 180.0), 2);
        assert_eq!(count_above(&[], 180.0), 0);
    }
}
