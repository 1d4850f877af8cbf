//! Seeded pseudo-random sampling and the single-sample test pipeline.
//!
//! The generator is deliberately simple and deliberately *not* shared:
//! every [`generate_sample`] call constructs a fresh [`SeededRng`] from
//! the experiment's seed, so the same seed and parameters always
//! reproduce the same sample byte for byte, and concurrent calls with
//! different parameter sets never interact. Draw order is part of the
//! contract: each Gaussian value consumes exactly two uniform draws, in
//! sequence.

use crate::dist::SamplingDistribution;
use crate::error::{ErrorLabError, Result};
use crate::experiment::{Decision, ExperimentParameters, SampleObservation, Sidedness, TestType};
use crate::geometry::effect_direction;
use std::f64::consts::PI;

/// LCG multiplier.
const LCG_MUL: u64 = 9_301;
/// LCG increment.
const LCG_ADD: u64 = 49_297;
/// LCG modulus; uniform draws are `state / LCG_MOD`.
const LCG_MOD: u64 = 233_280;

/// Deterministic linear congruential generator with a Box-Muller
/// Gaussian transform.
///
/// Not remotely cryptographic, and a short period by modern standards;
/// the point is cheap, seed-stable reproducibility for a teaching tool,
/// not statistical quality.
///
/// # Examples
///
/// ```
/// use errorlab::sample::SeededRng;
///
/// let mut a = SeededRng::new(42);
/// let mut b = SeededRng::new(42);
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next uniform draw in [0, 1).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.state = (self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_ADD)) % LCG_MOD;
        self.state as f64 / LCG_MOD as f64
    }

    /// Next Gaussian draw with the given mean and standard deviation.
    ///
    /// Box-Muller transform, cosine branch; consumes exactly two uniform
    /// draws. Mean and standard deviation are parameters of the transform
    /// output, not of the underlying uniform stream.
    pub fn next_gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next();
        let u2 = self.next();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        z0 * std_dev + mean
    }
}

/// Draw one sample and run the hypothesis test on it.
///
/// With `under_h1` false the sample is drawn from the H₀ world (true mean
/// 0); with it true, from the H₁ world (true mean direction · effect
/// size). Either way the test itself is identical: statistic, p-value per
/// sidedness, and a reject/fail-to-reject decision at the experiment's
/// alpha.
///
/// The standard error uses sigma for a z-test and the sample standard
/// deviation for a t-test.
///
/// # Errors
///
/// Returns [`ErrorLabError::InvalidParameter`] if `sample_size` is 0.
/// A t-test at n = 1 has an undefined sample variance; that propagates
/// as a non-finite statistic rather than an error (documented boundary —
/// keep n >= 2 for t-test sampling).
///
/// # Examples
///
/// ```
/// use errorlab::prelude::*;
///
/// let params = ExperimentParameters::default();
/// let obs = generate_sample(&params, false).expect("valid parameters");
/// assert_eq!(obs.values.len(), params.sample_size);
/// assert!((0.0..=1.0).contains(&obs.p_value));
/// ```
pub fn generate_sample(
    params: &ExperimentParameters,
    under_h1: bool,
) -> Result<SampleObservation> {
    let n = params.sample_size;
    if n == 0 {
        return Err(ErrorLabError::InvalidParameter {
            param: "sample_size".to_string(),
            value: "0".to_string(),
            constraint: "must be at least 1 to draw a sample".to_string(),
        });
    }

    let mut rng = SeededRng::new(params.seed);

    let true_mean = if under_h1 {
        effect_direction(params.sidedness) * params.effect_size
    } else {
        0.0
    };

    let values: Vec<f64> = (0..n)
        .map(|_| rng.next_gaussian(true_mean, params.sigma))
        .collect();

    let n_f = n as f64;
    let mean = values.iter().sum::<f64>() / n_f;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n_f - 1.0);
    let sd = variance.sqrt();

    let se = match params.test_type {
        TestType::ZTest => params.sigma / n_f.sqrt(),
        TestType::TTest => sd / n_f.sqrt(),
    };
    let test_statistic = mean / se;

    let dist = SamplingDistribution::for_test(params.test_type, n_f);
    let p_value = match params.sidedness {
        Sidedness::OneSidedRight => 1.0 - dist.cdf(test_statistic),
        Sidedness::OneSidedLeft => dist.cdf(test_statistic),
        Sidedness::TwoSided => 2.0 * (1.0 - dist.cdf(test_statistic.abs())),
    };

    let decision = if p_value < params.alpha {
        Decision::Reject
    } else {
        Decision::FailToReject
    };

    Ok(SampleObservation {
        values,
        mean,
        sd,
        test_statistic,
        p_value,
        decision,
    })
}
