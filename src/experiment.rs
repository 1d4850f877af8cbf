//! Experiment data model: parameters, derived values, and observations.
//!
//! [`ExperimentParameters`] is the single input record for every engine
//! entry point. It is immutable per calculation; interactive callers
//! rebuild or clone-and-modify it on each slider change and recompute
//! derived values synchronously. Nothing in the engine caches or retains
//! parameter state between calls.
//!
//! All types serialize with serde so presets and results can round-trip
//! as JSON state blobs.

use crate::error::{ErrorLabError, Result};
use serde::{Deserialize, Serialize};

/// Which test statistic distribution the experiment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    /// z-test: sigma treated as known, standard normal reference.
    ZTest,
    /// t-test: sigma estimated from the sample, Student's-t reference
    /// with n − 1 degrees of freedom.
    TTest,
}

/// Sidedness of the alternative hypothesis.
///
/// The effect size is always a non-negative magnitude; sidedness alone
/// encodes the direction of the true shift under H₁. One-sided-left means
/// H₁: μ < μ₀, so the non-centrality parameter picks up a negative sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sidedness {
    /// H₁: μ ≠ μ₀, rejection in both tails.
    TwoSided,
    /// H₁: μ > μ₀, rejection in the upper tail.
    OneSidedRight,
    /// H₁: μ < μ₀, rejection in the lower tail.
    OneSidedLeft,
}

/// Outcome of a hypothesis test on one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    /// p-value below alpha: reject H₀.
    Reject,
    /// p-value at or above alpha: fail to reject H₀.
    FailToReject,
}

/// Full parameter set for one experiment configuration.
///
/// # Examples
///
/// ```
/// use errorlab::experiment::ExperimentParameters;
///
/// let params = ExperimentParameters::default();
/// assert_eq!(params.alpha, 0.05);
/// assert_eq!(params.sample_size, 100);
/// params.validate().expect("defaults are valid");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentParameters {
    /// Significance level (Type I error rate), in (0, 1).
    pub alpha: f64,
    /// Sample size n.
    pub sample_size: usize,
    /// Effect size δ: non-negative magnitude of the mean shift under H₁.
    pub effect_size: f64,
    /// Population (or assumed) standard deviation, positive.
    pub sigma: f64,
    /// z-test or t-test.
    pub test_type: TestType,
    /// Tail configuration of the alternative.
    pub sidedness: Sidedness,
    /// Prior probability that H₁ is true, in [0, 1]. Used only by the
    /// 2×2 count derivation, never by the error/power math.
    pub prevalence: f64,
    /// Total hypothetical cases for 2×2 table scaling.
    pub population_size: u64,
    /// RNG seed for reproducible sampling.
    pub seed: u64,
}

impl Default for ExperimentParameters {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            sample_size: 100,
            effect_size: 0.5,
            sigma: 1.0,
            test_type: TestType::ZTest,
            sidedness: Sidedness::TwoSided,
            prevalence: 0.1,
            population_size: 10_000,
            seed: 12_345,
        }
    }
}

impl ExperimentParameters {
    /// Check every parameter against its domain.
    ///
    /// Interactive callers should validate once per parameter change,
    /// before fanning out into derived-value, sample, and sweep
    /// computations (which assume valid inputs).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorLabError::InvalidParameter`] naming the first
    /// parameter that violates its constraint.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(invalid("alpha", self.alpha, "must be in (0, 1)"));
        }
        if self.sample_size < 1 {
            return Err(ErrorLabError::InvalidParameter {
                param: "sample_size".to_string(),
                value: self.sample_size.to_string(),
                constraint: "must be at least 1".to_string(),
            });
        }
        if !(self.effect_size >= 0.0 && self.effect_size.is_finite()) {
            return Err(invalid(
                "effect_size",
                self.effect_size,
                "must be a non-negative finite magnitude",
            ));
        }
        if !(self.sigma > 0.0 && self.sigma.is_finite()) {
            return Err(invalid("sigma", self.sigma, "must be positive and finite"));
        }
        if !(0.0..=1.0).contains(&self.prevalence) {
            return Err(invalid("prevalence", self.prevalence, "must be in [0, 1]"));
        }
        if self.population_size < 1 {
            return Err(ErrorLabError::InvalidParameter {
                param: "population_size".to_string(),
                value: self.population_size.to_string(),
                constraint: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn invalid(param: &str, value: f64, constraint: &str) -> ErrorLabError {
    ErrorLabError::InvalidParameter {
        param: param.to_string(),
        value: format!("{value}"),
        constraint: constraint.to_string(),
    }
}

/// Bounds of the rejection region in test-statistic units.
///
/// `None` on a side means the region is unbounded away from that side
/// (a one-sided test rejects in only one tail).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RejectionRegion {
    /// Reject when the statistic is at or below this bound.
    pub lower: Option<f64>,
    /// Reject when the statistic is at or above this bound.
    pub upper: Option<f64>,
}

/// Quantities derived deterministically from [`ExperimentParameters`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedValues {
    /// One critical value for one-sided tests, two (lower then upper)
    /// for two-sided.
    pub critical_values: Vec<f64>,
    /// Rejection-region bounds matching the critical values.
    pub rejection_region: RejectionRegion,
    /// Type II error probability, clamped to [0, 1].
    pub beta: f64,
    /// Statistical power 1 − beta, clamped to [0, 1].
    pub power: f64,
    /// n − 1 for a t-test, `None` for a z-test.
    pub degrees_of_freedom: Option<usize>,
    /// Non-centrality parameter: shift of the H₁ distribution from 0 in
    /// test-statistic units. Negative for one-sided-left.
    pub ncp: f64,
}

/// One generated sample and its test outcome.
///
/// Holds no reference back to the parameters; it is replaced wholesale by
/// the next generation or discarded on parameter reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleObservation {
    /// The n Gaussian draws.
    pub values: Vec<f64>,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected).
    pub sd: f64,
    /// Observed test statistic.
    pub test_statistic: f64,
    /// p-value under H₀, per the experiment's sidedness.
    pub p_value: f64,
    /// Reject or fail to reject at the experiment's alpha.
    pub decision: Decision,
}

/// One point on a power curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerCurvePoint {
    /// The swept variable's value (sample size or effect size).
    pub x: f64,
    /// Power at x.
    pub power: f64,
    /// Type II error rate at x.
    pub beta: f64,
}

/// One point on a pair of sampling-distribution curves for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionPoint {
    /// Position in test-statistic units.
    pub x: f64,
    /// Density of the H₀-centered distribution at x.
    pub h0_density: f64,
    /// Density of the H₁-centered (ncp-shifted) distribution at x.
    pub h1_density: f64,
    /// Whether x falls inside the rejection region.
    pub in_rejection_region: bool,
}

/// Expected 2×2 outcome counts over a hypothetical case population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoByTwoCounts {
    /// H₀ true, fail to reject (correct).
    pub true_negative: u64,
    /// H₀ true, reject (Type I error).
    pub false_positive: u64,
    /// H₁ true, fail to reject (Type II error).
    pub false_negative: u64,
    /// H₁ true, reject (power, correct).
    pub true_positive: u64,
}

/// Slider bounds for interactive parameter controls.
pub mod ranges {
    /// Inclusive bounds and step for one parameter slider.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ParameterRange {
        pub min: f64,
        pub max: f64,
        pub step: f64,
    }

    /// Significance level slider.
    pub const ALPHA: ParameterRange = ParameterRange {
        min: 0.001,
        max: 0.2,
        step: 0.001,
    };

    /// Sample size slider.
    pub const SAMPLE_SIZE: ParameterRange = ParameterRange {
        min: 10.0,
        max: 1000.0,
        step: 10.0,
    };

    /// Effect size slider.
    pub const EFFECT_SIZE: ParameterRange = ParameterRange {
        min: 0.0,
        max: 2.0,
        step: 0.1,
    };

    /// Standard deviation slider.
    pub const SIGMA: ParameterRange = ParameterRange {
        min: 0.1,
        max: 5.0,
        step: 0.1,
    };

    /// Prevalence slider.
    pub const PREVALENCE: ParameterRange = ParameterRange {
        min: 0.01,
        max: 0.99,
        step: 0.01,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = ExperimentParameters::default();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_alpha() {
        let mut params = ExperimentParameters::default();
        params.alpha = 0.0;
        assert!(params.validate().is_err());
        params.alpha = 1.0;
        assert!(params.validate().is_err());
        params.alpha = -0.05;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_sigma() {
        let mut params = ExperimentParameters::default();
        params.sigma = 0.0;
        assert!(params.validate().is_err());
        params.sigma = f64::INFINITY;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_effect_size() {
        // Direction lives in sidedness, so a signed magnitude is a caller bug
        let mut params = ExperimentParameters::default();
        params.effect_size = -0.5;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let mut params = ExperimentParameters::default();
        params.sample_size = 0;
        assert!(params.validate().is_err());

        let mut params = ExperimentParameters::default();
        params.population_size = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_prevalence_outside_unit_interval() {
        let mut params = ExperimentParameters::default();
        params.prevalence = 1.2;
        assert!(params.validate().is_err());
        params.prevalence = -0.1;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_enum_serde_kebab_case_tags() {
        let json = serde_json::to_string(&TestType::ZTest).expect("serializes");
        assert_eq!(json, "\"z-test\"");
        let json = serde_json::to_string(&Sidedness::OneSidedLeft).expect("serializes");
        assert_eq!(json, "\"one-sided-left\"");
        let json = serde_json::to_string(&Decision::FailToReject).expect("serializes");
        assert_eq!(json, "\"fail-to-reject\"");
    }

    #[test]
    fn test_parameters_json_round_trip() {
        let params = ExperimentParameters::default();
        let json = serde_json::to_string(&params).expect("serializes");
        let back: ExperimentParameters = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(params, back);
    }

    #[test]
    fn test_ranges_contain_defaults() {
        let params = ExperimentParameters::default();
        assert!(params.alpha >= ranges::ALPHA.min && params.alpha <= ranges::ALPHA.max);
        assert!(
            params.sigma >= ranges::SIGMA.min && params.sigma <= ranges::SIGMA.max
        );
        let n = params.sample_size as f64;
        assert!(n >= ranges::SAMPLE_SIZE.min && n <= ranges::SAMPLE_SIZE.max);
    }
}
