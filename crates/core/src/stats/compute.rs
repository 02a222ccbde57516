use std::collections::HashMap;

use super::types::{Mode, StatisticsSummary};
use crate::input::ParsedLines;

/// Upper bound on Newton iterations; convergence from above takes far fewer.
const MAX_SQRT_ITERATIONS: usize = 2048;

fn valid_values(values: &[Option<f64>]) -> impl Iterator<Item = f64> + '_ {
    values.iter().flatten().copied()
}

/// Mean of the valid values, together with how many there were.
///
/// Returns `(None, 0)` when the sample has no valid values.
pub fn compute_mean(values: &[Option<f64>]) -> (Option<f64>, usize) {
    let (total, count) = valid_values(values).fold((0.0, 0usize), |(total, count), v| {
        (total + v, count + 1)
    });

    if count == 0 {
        return (None, 0);
    }

    (Some(total / count as f64), count)
}

/// Median of the valid values.
///
/// Even-sized samples average the two middle values.
pub fn compute_median(values: &[Option<f64>]) -> Option<f64> {
    let mut sorted: Vec<f64> = valid_values(values).collect();
    if sorted.is_empty() {
        return None;
    }

    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Every value tied for the highest frequency.
///
/// A sample where each value occurs once has no mode.
pub fn compute_mode(values: &[Option<f64>]) -> Mode {
    let mut freq: HashMap<u64, (f64, usize)> = HashMap::new();

    for v in valid_values(values) {
        // `+ 0.0` folds -0.0 into 0.0 so both share one bucket.
        let v = v + 0.0;
        freq.entry(v.to_bits()).or_insert((v, 0)).1 += 1;
    }

    let max_count = freq.values().map(|(_, count)| *count).max().unwrap_or(0);
    if max_count <= 1 {
        return Mode::NoMode;
    }

    let mut modes: Vec<f64> = freq
        .into_values()
        .filter(|(_, count)| *count == max_count)
        .map(|(value, _)| value)
        .collect();
    modes.sort_by(f64::total_cmp);

    Mode::Values(modes)
}

/// Population variance (sum of squared deviations divided by `n`).
pub fn compute_variance(values: &[Option<f64>], mean: Option<f64>) -> Option<f64> {
    let mean = mean?;

    let (total_sq_dev, count) = valid_values(values).fold((0.0, 0usize), |(total, count), v| {
        let diff = v - mean;
        (total + diff * diff, count + 1)
    });

    if count == 0 {
        return None;
    }

    Some(total_sq_dev / count as f64)
}

/// Standard deviation as the square root of `variance`.
///
/// A negative variance yields `Some(NaN)`.
pub fn compute_standard_deviation(variance: Option<f64>) -> Option<f64> {
    variance.map(newton_sqrt)
}

/// Square root by Newton's method.
///
/// Starts at or above the root so the iterates decrease monotonically, and
/// stops as soon as an iteration no longer improves the guess.
pub fn newton_sqrt(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x.is_infinite() {
        return x;
    }

    let mut guess = if x >= 1.0 { x } else { 1.0 };

    for _ in 0..MAX_SQRT_ITERATIONS {
        let next = 0.5 * (guess + x / guess);
        if next >= guess {
            break;
        }
        guess = next;
    }

    guess
}

/// Compute every statistic for a parsed input file.
pub fn summarize(parsed: &ParsedLines<f64>) -> StatisticsSummary {
    let values = &parsed.entries;

    let (mean, valid_count) = compute_mean(values);
    let median = compute_median(values);
    let mode = compute_mode(values);
    let variance = compute_variance(values, mean);
    let std_dev = compute_standard_deviation(variance);

    StatisticsSummary {
        valid_count,
        invalid_count: parsed.invalid_count(),
        mean,
        median,
        mode,
        variance,
        std_dev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{parse_float, parse_lines};

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    // ============================================================================
    // compute_mean tests
    // ============================================================================

    #[test]
    fn test_compute_mean_with_floats() {
        let (mean, count) = compute_mean(&some(&[1.5, 2.5, 3.0]));
        assert_eq!(count, 3);
        assert!(approx(mean.unwrap(), 7.0 / 3.0));
    }

    #[test]
    fn test_compute_mean_skips_placeholders() {
        let (mean, count) = compute_mean(&[Some(2.0), None, Some(4.0)]);
        assert_eq!(count, 2);
        assert_eq!(mean, Some(3.0));
    }

    #[test]
    fn test_compute_mean_no_valid_values() {
        assert_eq!(compute_mean(&[None, None]), (None, 0));
        assert_eq!(compute_mean(&[]), (None, 0));
    }

    // ============================================================================
    // compute_median tests
    // ============================================================================

    #[test]
    fn test_compute_median_even_count() {
        assert_eq!(compute_median(&some(&[1.0, 4.0, 2.0, 3.0])), Some(2.5));
    }

    #[test]
    fn test_compute_median_odd_count() {
        assert_eq!(compute_median(&some(&[9.0, -1.0, 3.0])), Some(3.0));
    }

    #[test]
    fn test_compute_median_empty() {
        assert_eq!(compute_median(&[None]), None);
    }

    // ============================================================================
    // compute_mode tests
    // ============================================================================

    #[test]
    fn test_compute_mode_no_mode_all_unique() {
        assert_eq!(compute_mode(&some(&[1.0, 2.0, 3.0])), Mode::NoMode);
    }

    #[test]
    fn test_compute_mode_single() {
        assert_eq!(
            compute_mode(&some(&[1.0, 2.0, 2.0, 3.0])),
            Mode::Values(vec![2.0])
        );
    }

    #[test]
    fn test_compute_mode_multimodal_sorted() {
        assert_eq!(
            compute_mode(&some(&[5.0, 1.0, 5.0, 1.0, 3.0])),
            Mode::Values(vec![1.0, 5.0])
        );
    }

    #[test]
    fn test_compute_mode_negative_zero_matches_zero() {
        assert_eq!(
            compute_mode(&some(&[0.0, -0.0, 1.0])),
            Mode::Values(vec![0.0])
        );
    }

    #[test]
    fn test_compute_mode_empty() {
        assert_eq!(compute_mode(&[None, None]), Mode::NoMode);
    }

    // ============================================================================
    // compute_variance / compute_standard_deviation tests
    // ============================================================================

    #[test]
    fn test_compute_variance_simple_case() {
        let values = some(&[1.0, 2.0, 3.0]);
        let (mean, _) = compute_mean(&values);
        let variance = compute_variance(&values, mean).unwrap();
        assert!(approx(variance, 2.0 / 3.0));
    }

    #[test]
    fn test_compute_variance_without_mean() {
        assert_eq!(compute_variance(&[], None), None);
    }

    #[test]
    fn test_compute_standard_deviation_matches_sqrt() {
        let std_dev = compute_standard_deviation(Some(4.0)).unwrap();
        assert!(approx(std_dev, 2.0));
    }

    #[test]
    fn test_compute_standard_deviation_edges() {
        assert_eq!(compute_standard_deviation(Some(0.0)), Some(0.0));
        assert_eq!(compute_standard_deviation(None), None);
        assert!(compute_standard_deviation(Some(-1.0)).unwrap().is_nan());
    }

    #[test]
    fn test_newton_sqrt_small_and_large() {
        assert!(approx(newton_sqrt(0.25), 0.5));
        assert!(approx(newton_sqrt(2.0), std::f64::consts::SQRT_2));
        assert!(approx(newton_sqrt(1e300), 1e150));
        assert!(approx(newton_sqrt(1e-300), 1e-150));
    }

    // ============================================================================
    // summarize tests
    // ============================================================================

    #[test]
    fn test_summarize_full_pipeline() {
        let parsed = parse_lines("0\n7.5\n-8\nbad\n2.5\n", parse_float);
        let summary = summarize(&parsed);

        assert_eq!(summary.valid_count, 4);
        assert_eq!(summary.invalid_count, 1);
        assert_eq!(summary.mean, Some(0.5));
        assert_eq!(summary.median, Some(1.25));
        assert_eq!(summary.mode, Mode::NoMode);
        assert!(approx(summary.variance.unwrap(), 31.375));
        assert!(approx(summary.std_dev.unwrap(), 31.375f64.sqrt()));
    }

    #[test]
    fn test_summarize_only_invalid_lines() {
        let parsed = parse_lines("x\n\n", parse_float);
        let summary = summarize(&parsed);

        assert_eq!(summary.valid_count, 0);
        assert_eq!(summary.invalid_count, 2);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.median, None);
        assert_eq!(summary.variance, None);
        assert_eq!(summary.std_dev, None);
    }
}
