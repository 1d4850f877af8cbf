//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use errorlab::prelude::*;
//! ```

pub use crate::dist::SamplingDistribution;
pub use crate::error::{ErrorLabError, Result};
pub use crate::experiment::{
    Decision, DerivedValues, DistributionPoint, ExperimentParameters, PowerCurvePoint,
    RejectionRegion, SampleObservation, Sidedness, TestType, TwoByTwoCounts,
};
pub use crate::power::{beta_and_power, calculate_2x2_counts, calculate_derived_values, BetaPower};
pub use crate::sample::{generate_sample, SeededRng};
pub use crate::sweep::{display_range, distribution_curve, power_curve, CurveVariable, DisplayRange};
