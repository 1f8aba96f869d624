//! Core traits for MassStat
//!
//! This module defines the query contract every distribution used for
//! measurement-error calibration must satisfy. Consumers (e.g. a tolerance
//! window derived from a calibrated error model) depend on this trait, not
//! on the concrete distribution types.

use crate::Result;

/// Probability distribution query contract.
///
/// Two distinct inversions live side by side and must not be confused:
/// [`max_value_for_probability`](Distribution::max_value_for_probability) /
/// [`min_value_for_probability`](Distribution::min_value_for_probability)
/// invert the *density* (they bracket the region where the density reaches a
/// given level), while
/// [`value_at_cumulative_probability`](Distribution::value_at_cumulative_probability)
/// inverts the *cumulative* distribution (quantile function).
pub trait Distribution: Send + Sync {
    /// Value of the density function at `x`.
    fn density_at(&self, x: f64) -> Result<f64>;

    /// Largest `x` at which the density still reaches level `p`.
    ///
    /// Upper branch of the density inversion; see
    /// [`min_value_for_probability`](Distribution::min_value_for_probability)
    /// for the lower branch.
    fn max_value_for_probability(&self, p: f64) -> Result<f64>;

    /// Smallest `x` at which the density still reaches level `p`.
    fn min_value_for_probability(&self, p: f64) -> Result<f64>;

    /// `P(X <= x)`.
    fn cumulative_probability_at(&self, x: f64) -> Result<f64>;

    /// Quantile function: the `x` with `P(X <= x) = p`.
    fn value_at_cumulative_probability(&self, p: f64) -> Result<f64>;

    /// `P(X > x)`, the complement of
    /// [`cumulative_probability_at`](Distribution::cumulative_probability_at).
    fn descending_cumulative_probability_at(&self, x: f64) -> Result<f64>;

    /// The `x` with `P(X > x) = p`.
    fn value_at_descending_cumulative_probability(&self, p: f64) -> Result<f64>;
}
