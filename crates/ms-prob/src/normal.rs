//! Normal measurement-error model. A point mass (Dirac) if the standard
//! deviation is zero.

use ms_core::{Distribution, Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::stats;

/// `sqrt(2π)`.
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Natural log of `sqrt(2π)`.
///
/// `ln(sqrt(2π)) = 0.5*ln(2π)` (precomputed to keep this crate const-friendly).
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// A normal distribution over measurement errors.
///
/// `std == 0` switches every query to the point-mass conventions documented
/// on the individual methods; `std > 0` is the continuous Gaussian regime.
/// Instances are immutable once constructed, so sharing across threads needs
/// no locking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalDistribution {
    mean: f64,
    std: f64,
}

impl NormalDistribution {
    /// Create a distribution from explicit parameters.
    ///
    /// # Errors
    /// `Validation` if either parameter is non-finite or `std` is negative.
    pub fn new(mean: f64, std: f64) -> Result<Self> {
        if !mean.is_finite() || !std.is_finite() {
            return Err(Error::Validation(format!(
                "parameters must be finite, got mean={mean}, std={std}"
            )));
        }
        if std < 0.0 {
            return Err(Error::Validation(format!("std must be >= 0, got {std}")));
        }
        Ok(Self { mean, std })
    }

    /// Calibrate on the sample mean and standard deviation.
    ///
    /// # Errors
    /// `EmptySample` if `xs` holds no observations.
    pub fn from_sample(xs: &[f64]) -> Result<Self> {
        Self::from_calibration(stats::mean(xs)?, stats::std(xs)?)
    }

    /// Calibrate on the median and the 15.9%-84.1% inter-percentile distance.
    ///
    /// For a true Gaussian those percentiles sit one standard deviation below
    /// and above the mean, so half the distance between them estimates `std`
    /// while staying resistant to outliers that corrupt the classical
    /// mean/variance estimator. Assumes a single mode centered at the median.
    ///
    /// # Errors
    /// `EmptySample` if `xs` holds no observations.
    pub fn from_sample_robust(xs: &[f64]) -> Result<Self> {
        stats::validate_sample(xs)?;
        let mut sorted = xs.to_vec();
        sorted.sort_by(f64::total_cmp);
        let spread = (stats::percentile_sorted(&sorted, 0.841)?
            - stats::percentile_sorted(&sorted, 0.159)?)
            / 2.0;
        Self::from_calibration(stats::median_sorted(&sorted)?, spread)
    }

    fn from_calibration(mean: f64, std: f64) -> Result<Self> {
        let dist = Self::new(mean, std)?;
        if dist.std == 0.0 {
            log::warn!("calibrated spread is zero; error model degenerates to a point mass at {}", dist.mean);
        }
        Ok(dist)
    }

    /// Location parameter.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Scale parameter. Zero selects the point-mass regime.
    pub fn std(&self) -> f64 {
        self.std
    }

    /// `std^2`.
    pub fn variance(&self) -> f64 {
        self.std * self.std
    }

    /// Log of [`Distribution::density_at`].
    ///
    /// `log f(x) = -0.5*((x-mean)/std)^2 - ln(std) - ln(sqrt(2π))` on the
    /// continuous branch. The degenerate branch takes the logarithm of the
    /// point-mass convention: `0.0` at the atom, `-inf` elsewhere.
    pub fn log_density_at(&self, x: f64) -> Result<f64> {
        if self.std == 0.0 {
            return Ok(if x == self.mean { 0.0 } else { f64::NEG_INFINITY });
        }
        let z = (x - self.mean) / self.std;
        Ok(-0.5 * z * z - self.std.ln() - LN_SQRT_2PI)
    }

    /// Continuous-branch CDF machinery. Callers check `std > 0` first.
    fn gaussian(&self) -> Result<Normal> {
        Normal::new(self.mean, self.std).map_err(|e| {
            Error::NumericDomain(format!("cumulative machinery needs std > 0: {e}"))
        })
    }

    /// Half-width of the density-level bracket.
    ///
    /// Solves `f(x) = p` on one side of the mean:
    /// `|x - mean| = sqrt(-2*std^2*ln(std*p*sqrt(2π)))`, defined for
    /// `std*p*sqrt(2π)` in `(0, 1]`.
    fn density_level_offset(&self, p: f64) -> Result<f64> {
        let arg = self.std * p * SQRT_2PI;
        if !(arg > 0.0) {
            return Err(Error::NumericDomain(format!("density level must be > 0, got {p}")));
        }
        let radicand = -2.0 * self.std * self.std * arg.ln();
        if radicand < 0.0 {
            return Err(Error::NumericDomain(format!(
                "density level {p} exceeds the density maximum {}",
                1.0 / (self.std * SQRT_2PI)
            )));
        }
        Ok(radicand.sqrt())
    }
}

fn validate_cumulative_p(p: f64) -> Result<f64> {
    if !(p.is_finite() && (0.0..=1.0).contains(&p)) {
        return Err(Error::NumericDomain(format!(
            "cumulative probability must be in [0,1], got {p}"
        )));
    }
    Ok(p)
}

impl Distribution for NormalDistribution {
    fn density_at(&self, x: f64) -> Result<f64> {
        if self.std == 0.0 {
            // Point-mass convention: density 1 at the single atom. This does
            // not integrate to 1 in the measure-theoretic sense.
            return Ok(if x == self.mean { 1.0 } else { 0.0 });
        }
        let z = (x - self.mean) / self.std;
        Ok((-0.5 * z * z).exp() / (self.std * SQRT_2PI))
    }

    fn max_value_for_probability(&self, p: f64) -> Result<f64> {
        if self.std == 0.0 {
            // The density-level bracket collapses to the single atom.
            return Ok(self.mean);
        }
        Ok(self.mean + self.density_level_offset(p)?)
    }

    fn min_value_for_probability(&self, p: f64) -> Result<f64> {
        if self.std == 0.0 {
            return Ok(self.mean);
        }
        Ok(self.mean - self.density_level_offset(p)?)
    }

    fn cumulative_probability_at(&self, x: f64) -> Result<f64> {
        if self.std == 0.0 {
            // Step-function convention: 0.5 at the discontinuity.
            return Ok(if x < self.mean {
                0.0
            } else if x == self.mean {
                0.5
            } else {
                1.0
            });
        }
        Ok(self.gaussian()?.cdf(x))
    }

    fn value_at_cumulative_probability(&self, p: f64) -> Result<f64> {
        let p = validate_cumulative_p(p)?;
        if self.std == 0.0 {
            // All mass sits at the mean; quantiles away from 0.5 escape to
            // the largest finite magnitude, not a true infinity, so that
            // downstream arithmetic stays finite.
            return Ok(if p < 0.5 {
                -f64::MAX
            } else if p == 0.5 {
                self.mean
            } else {
                f64::MAX
            });
        }
        if p == 0.0 {
            return Ok(-f64::MAX);
        }
        if p == 1.0 {
            return Ok(f64::MAX);
        }
        Ok(self.gaussian()?.inverse_cdf(p))
    }

    fn descending_cumulative_probability_at(&self, x: f64) -> Result<f64> {
        if self.std == 0.0 {
            return Ok(if x > self.mean {
                0.0
            } else if x == self.mean {
                0.5
            } else {
                1.0
            });
        }
        Ok(1.0 - self.gaussian()?.cdf(x))
    }

    fn value_at_descending_cumulative_probability(&self, p: f64) -> Result<f64> {
        let p = validate_cumulative_p(p)?;
        if self.std == 0.0 {
            return Ok(if p < 0.5 {
                f64::MAX
            } else if p == 0.5 {
                self.mean
            } else {
                -f64::MAX
            });
        }
        self.value_at_cumulative_probability(1.0 - p)
    }
}
