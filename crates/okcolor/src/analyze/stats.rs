//! Small statistics helpers for palette reports.

/// Median of a set of values. Returns 0.0 for an empty slice.
///
/// Even-length inputs average the two middle values.
pub(crate) fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        0.5 * (sorted[mid - 1] + sorted[mid])
    }
}

/// Population variance. Returns 0.0 for fewer than two values.
pub(crate) fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}

/// Variance of the circular gaps between hues (degrees).
///
/// Sorts the hues, takes the consecutive gaps plus the wrap-around gap
/// (they always sum to 360), and returns their population variance.
/// Evenly spaced hues score 0; two near-identical hues produce one tiny
/// gap and correspondingly inflated others, driving the variance up.
/// Fewer than two hues score 0.
pub(crate) fn hue_gap_variance(hues: &[f64]) -> f64 {
    if hues.len() < 2 {
        return 0.0;
    }
    let mut sorted = hues.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut gaps: Vec<f64> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
    gaps.push(360.0 - (sorted[sorted.len() - 1] - sorted[0]));
    variance(&gaps)
}
