//! Type II error and power calculation, plus the derived-value and
//! 2×2 count entry points.
//!
//! Beta is the probability mass of the H₁ sampling distribution that
//! lands inside the acceptance region. Rather than constructing a shifted
//! distribution, the critical values are shifted by −ncp and evaluated
//! against the H₀-centered CDF; the two are equivalent and the latter
//! reuses the resolved distribution unchanged.

use crate::dist::SamplingDistribution;
use crate::error::Result;
use crate::experiment::{
    DerivedValues, ExperimentParameters, RejectionRegion, Sidedness, TestType, TwoByTwoCounts,
};
use crate::geometry::{critical_values, noncentrality, standard_error};

/// Type II error rate and power for one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaPower {
    /// P(fail to reject | H₁ true), clamped to [0, 1].
    pub beta: f64,
    /// 1 − beta, clamped to [0, 1].
    pub power: f64,
}

/// Compute beta and power for the given parameters.
///
/// # Errors
///
/// Returns [`crate::error::ErrorLabError::InvalidParameter`] if `alpha`
/// is outside (0, 1).
pub fn beta_and_power(params: &ExperimentParameters) -> Result<BetaPower> {
    beta_and_power_at(params, params.sample_size as f64, params.effect_size)
}

/// Beta and power with sample size and effect size overridden.
///
/// The sweep generator interpolates both variables continuously, so `n`
/// is real-valued here; a fractional n simply yields fractional degrees
/// of freedom for the t reference distribution.
pub(crate) fn beta_and_power_at(
    params: &ExperimentParameters,
    n: f64,
    effect_size: f64,
) -> Result<BetaPower> {
    let dist = SamplingDistribution::for_test(params.test_type, n);
    let se = standard_error(params.sigma, n);
    let ncp = noncentrality(effect_size, params.sidedness, se);

    let cv = critical_values(params.alpha, params.sidedness, &dist)?;

    let beta = match params.sidedness {
        // Under H₁ the distribution sits at +ncp; mass left of the
        // critical value fails to reject.
        Sidedness::OneSidedRight => dist.cdf(cv[0] - ncp),
        // Mirror image: mass right of the critical value fails to reject.
        Sidedness::OneSidedLeft => 1.0 - dist.cdf(cv[0] - ncp),
        // Mass strictly between the two critical values.
        Sidedness::TwoSided => dist.cdf(cv[1] - ncp) - dist.cdf(cv[0] - ncp),
    };

    let power = 1.0 - beta;

    Ok(BetaPower {
        beta: beta.clamp(0.0, 1.0),
        power: power.clamp(0.0, 1.0),
    })
}

/// Compute every derived quantity for one parameter set.
///
/// This is the main synchronous entry point interactive callers invoke on
/// each parameter change.
///
/// # Errors
///
/// Returns [`crate::error::ErrorLabError::InvalidParameter`] if `alpha`
/// is outside (0, 1).
///
/// # Examples
///
/// ```
/// use errorlab::prelude::*;
///
/// let params = ExperimentParameters::default();
/// let derived = calculate_derived_values(&params).expect("valid parameters");
///
/// // alpha=0.05, n=100, delta=0.5, sigma=1, z-test, two-sided
/// assert_eq!(derived.critical_values.len(), 2);
/// assert!((derived.ncp - 5.0).abs() < 1e-9);
/// assert!(derived.power > 0.99);
/// ```
pub fn calculate_derived_values(params: &ExperimentParameters) -> Result<DerivedValues> {
    let n = params.sample_size as f64;
    let dist = SamplingDistribution::for_test(params.test_type, n);
    let cv = critical_values(params.alpha, params.sidedness, &dist)?;
    let BetaPower { beta, power } = beta_and_power(params)?;

    let rejection_region = match params.sidedness {
        Sidedness::OneSidedLeft => RejectionRegion {
            lower: Some(cv[0]),
            upper: None,
        },
        Sidedness::OneSidedRight => RejectionRegion {
            lower: None,
            upper: Some(cv[0]),
        },
        Sidedness::TwoSided => RejectionRegion {
            lower: Some(cv[0]),
            upper: Some(cv[1]),
        },
    };

    let se = standard_error(params.sigma, n);
    let ncp = noncentrality(params.effect_size, params.sidedness, se);

    let degrees_of_freedom = match params.test_type {
        TestType::TTest => Some(params.sample_size - 1),
        TestType::ZTest => None,
    };

    Ok(DerivedValues {
        critical_values: cv,
        rejection_region,
        beta,
        power,
        degrees_of_freedom,
        ncp,
    })
}

/// Expected 2×2 outcome counts over the hypothetical case population.
///
/// Splits `population_size` by prevalence into H₀-true and H₁-true
/// groups, then applies the error rates: {1 − alpha, alpha} to the H₀
/// group and {beta, power} to the H₁ group, rounding each count.
///
/// Because every cell is rounded independently, the four counts can be
/// off by one from `population_size` in aggregate; display code shows
/// the cells, not their sum.
#[must_use]
pub fn calculate_2x2_counts(
    params: &ExperimentParameters,
    derived: &DerivedValues,
) -> TwoByTwoCounts {
    let n_pop = params.population_size as f64;

    let h0_true = (n_pop * (1.0 - params.prevalence)).round();
    let h1_true = (n_pop * params.prevalence).round();

    TwoByTwoCounts {
        true_negative: (h0_true * (1.0 - params.alpha)).round() as u64,
        false_positive: (h0_true * params.alpha).round() as u64,
        false_negative: (h1_true * derived.beta).round() as u64,
        true_positive: (h1_true * derived.power).round() as u64,
    }
}

#[cfg(test)]
#[path = "power_tests.rs"]
mod tests;
