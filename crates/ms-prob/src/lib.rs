//! Probability building blocks for MassStat.
//!
//! This crate hosts the distribution math used to calibrate error models over
//! empirical measurement data:
//! - summary statistics over observation samples (mean/std/median/percentile)
//! - the normal measurement-error model, degenerating to a point mass when
//!   the calibrated spread is zero

pub mod normal;
pub mod stats;

pub use normal::NormalDistribution;
