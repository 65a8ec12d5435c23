//! Series Statistics
//!
//! Trend and spread over a window of samples taken at equal spacing. The
//! index is the x-axis; no timestamps are involved.
//!
//! Inputs and outputs are `f32` to match sensor precision, but every sum is
//! carried in `f64`. Σx² grows with n³ and Σxy cancels against Σx·Σy, so
//! single-precision accumulators lose the slope on a day of hourly samples.
//!
//! Degenerate input never fails: an empty window has zero mean and variance,
//! and a window with fewer than two points has zero trend.

/// Arithmetic mean, `0.0` for an empty series
pub fn mean(values: &[f32]) -> f32 {
    mean_f64(values) as f32
}

fn mean_f64(values: &[f32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    sum / values.len() as f64
}

/// Least-squares slope of `values[i]` against `i`
///
/// Returns `0.0` for fewer than two samples or a zero denominator.
pub fn trend(values: &[f32]) -> f32 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut sum_xy = 0.0f64;
    let mut sum_xx = 0.0f64;

    for (i, &value) in values.iter().enumerate() {
        let x = i as f64;
        let y = value as f64;

        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let n = n as f64;
    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        // Unreachable for n >= 2 with integer x, kept for exotic n
        log_debug!("Trend: degenerate denominator for {} samples", n);
        return 0.0;
    }

    ((n * sum_xy - sum_x * sum_y) / denom) as f32
}

/// Population variance (divisor n), `0.0` for an empty series
pub fn variance(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = mean_f64(values);
    let sq_diff: f64 = values
        .iter()
        .map(|&v| {
            let diff = v as f64 - mean;
            diff * diff
        })
        .sum();

    (sq_diff / values.len() as f64) as f32
}

/// Round to two decimal places, as shown to operators
pub(crate) fn round_hundredths(value: f32) -> f32 {
    libm::roundf(value * 100.0) / 100.0
}
