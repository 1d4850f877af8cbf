//! Test geometry: critical values, standard error, and non-centrality.
//!
//! Everything here works in test-statistic units: the H₀ distribution is
//! centered at 0 and the H₁ distribution is shifted by the non-centrality
//! parameter. Direction is carried by sidedness, never by the effect-size
//! magnitude.

use crate::dist::SamplingDistribution;
use crate::error::Result;
use crate::experiment::Sidedness;

/// Critical value(s) for a test at significance level `alpha`.
///
/// One-sided tests get a single value (upper quantile for right, lower
/// for left); two-sided tests get the alpha/2 pair ordered lower then
/// upper.
///
/// # Errors
///
/// Returns [`crate::error::ErrorLabError::InvalidParameter`] if `alpha`
/// puts a quantile argument outside (0, 1).
pub fn critical_values(
    alpha: f64,
    sidedness: Sidedness,
    dist: &SamplingDistribution,
) -> Result<Vec<f64>> {
    match sidedness {
        Sidedness::OneSidedRight => Ok(vec![dist.quantile(1.0 - alpha)?]),
        Sidedness::OneSidedLeft => Ok(vec![dist.quantile(alpha)?]),
        Sidedness::TwoSided => Ok(vec![
            dist.quantile(alpha / 2.0)?,
            dist.quantile(1.0 - alpha / 2.0)?,
        ]),
    }
}

/// Standard error of the mean: sigma / √n.
///
/// Accepts real-valued n because the power-curve sweep interpolates
/// fractional sample sizes.
#[must_use]
pub fn standard_error(sigma: f64, n: f64) -> f64 {
    sigma / n.sqrt()
}

/// Sign applied to the effect magnitude by the alternative's direction.
///
/// −1 for one-sided-left, +1 otherwise. Effect size is always a
/// non-negative magnitude; this is the only place a sign enters.
#[must_use]
pub fn effect_direction(sidedness: Sidedness) -> f64 {
    match sidedness {
        Sidedness::OneSidedLeft => -1.0,
        Sidedness::OneSidedRight | Sidedness::TwoSided => 1.0,
    }
}

/// Non-centrality parameter: direction · effect size / standard error.
///
/// This is the center of the H₁ sampling distribution in test-statistic
/// units.
#[must_use]
pub fn noncentrality(effect_size: f64, sidedness: Sidedness, se: f64) -> f64 {
    effect_direction(sidedness) * effect_size / se
}
