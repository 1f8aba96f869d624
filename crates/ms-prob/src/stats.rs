//! Summary statistics over observation samples.
//!
//! Pure helpers consumed by distribution calibration. Every function requires
//! a non-empty sample of finite values; ranks outside `[0,1]` are domain
//! errors, never clamped.

use ms_core::{Error, Result};

pub(crate) fn validate_sample(xs: &[f64]) -> Result<()> {
    if xs.is_empty() {
        return Err(Error::EmptySample);
    }
    if xs.iter().any(|v| !v.is_finite()) {
        return Err(Error::Validation("sample must contain only finite values".to_string()));
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(xs: &[f64]) -> Result<f64> {
    validate_sample(xs)?;
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Unbiased sample variance (`n-1` denominator).
///
/// A single observation carries no spread information and yields 0.
pub fn variance(xs: &[f64]) -> Result<f64> {
    let m = mean(xs)?;
    if xs.len() == 1 {
        return Ok(0.0);
    }
    let ss: f64 = xs.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(ss / (xs.len() - 1) as f64)
}

/// Sample standard deviation, `sqrt(variance)`.
pub fn std(xs: &[f64]) -> Result<f64> {
    Ok(variance(xs)?.sqrt())
}

/// Median, i.e. `percentile(xs, 0.5)`.
pub fn median(xs: &[f64]) -> Result<f64> {
    percentile(xs, 0.5)
}

/// Percentile via sorting + linear interpolation between order statistics.
///
/// - `p=0` returns the minimum
/// - `p=1` returns the maximum
pub fn percentile(xs: &[f64], p: f64) -> Result<f64> {
    validate_sample(xs)?;
    let mut v = xs.to_vec();
    v.sort_by(f64::total_cmp);
    percentile_sorted(&v, p)
}

/// Percentile for data already sorted ascending.
///
/// The rank maps to the position `p * (n-1)`; values between two order
/// statistics are linearly interpolated.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::EmptySample);
    }
    if !(p.is_finite() && (0.0..=1.0).contains(&p)) {
        return Err(Error::NumericDomain(format!("percentile rank must be in [0,1], got {p}")));
    }
    if sorted.len() == 1 {
        return Ok(sorted[0]);
    }

    let pos = p * (sorted.len() - 1) as f64;
    let i = pos.floor() as usize;
    let j = pos.ceil() as usize;
    if i == j {
        return Ok(sorted[i]);
    }
    let t = pos - i as f64;
    Ok((1.0 - t) * sorted[i] + t * sorted[j])
}

/// Median for data already sorted ascending.
pub fn median_sorted(sorted: &[f64]) -> Result<f64> {
    percentile_sorted(sorted, 0.5)
}
