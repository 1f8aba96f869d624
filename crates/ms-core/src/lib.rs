//! # ms-core
//!
//! Core error type and the distribution query contract for MassStat.
//!
//! Higher-level calibration steps (tolerance-window estimation, scoring)
//! depend on the [`Distribution`] trait defined here rather than on concrete
//! distribution types in `ms-prob`.

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::Distribution;
