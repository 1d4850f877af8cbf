//! errorlab: statistics engine for teaching hypothesis testing.
//!
//! The engine behind an interactive Type I/II error explorer: special
//! function approximations, normal and Student's-t primitives, test
//! geometry, power/error calculation, seeded reproducible sampling, and
//! power-curve sweeps. It exposes a pure computational API with no
//! network, file, or persistence surface; chart and table rendering are
//! external collaborators that consume the data shapes defined here.
//!
//! # Quick Start
//!
//! ```
//! use errorlab::prelude::*;
//!
//! let params = ExperimentParameters::default();
//!
//! // Derived values recompute synchronously on every parameter change
//! let derived = calculate_derived_values(&params).expect("valid parameters");
//! assert!(derived.power > 0.99); // 5-standard-error effect
//!
//! // Reproducible sampling: same seed, same sample
//! let obs = generate_sample(&params, true).expect("valid parameters");
//! assert_eq!(obs.values.len(), 100);
//!
//! // Power curve over effect size
//! let curve = power_curve(&params, CurveVariable::EffectSize, 0.0, 2.0, 50)
//!     .expect("valid sweep");
//! assert_eq!(curve.len(), 51);
//! ```
//!
//! # Modules
//!
//! - [`special`]: erf, log-gamma, incomplete beta approximations
//! - [`dist`]: normal and Student's-t PDF/CDF/quantile
//! - [`experiment`]: parameter and result data model
//! - [`geometry`]: critical values, standard error, non-centrality
//! - [`power`]: Type II error and power, derived values, 2×2 counts
//! - [`sample`]: seeded RNG and single-sample test pipeline
//! - [`sweep`]: power curves and distribution plot data
//!
//! # Determinism
//!
//! Every function is a pure computation over its inputs. The only state
//! anywhere is the RNG sequence inside one [`sample::generate_sample`]
//! call, and that is reconstructed from the explicit seed on every call,
//! so concurrent invocations with different parameter sets are trivially
//! independent.

pub mod dist;
pub mod error;
pub mod experiment;
pub mod geometry;
pub mod power;
pub mod prelude;
pub mod sample;
pub mod special;
pub mod sweep;

pub use error::{ErrorLabError, Result};
pub use experiment::{
    DerivedValues, ExperimentParameters, SampleObservation, Sidedness, TestType, TwoByTwoCounts,
};
pub use power::{calculate_2x2_counts, calculate_derived_values};
pub use sample::generate_sample;
pub use sweep::{power_curve, CurveVariable};
