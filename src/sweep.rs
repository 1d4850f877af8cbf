//! Batch curve generation: power-vs-parameter sweeps and distribution
//! plot data.
//!
//! Both generators are finite, synchronous batch computations with no
//! internal state: the same inputs always produce the same points, and
//! the caller's parameter set is never mutated. Hot loops run against a
//! [`SamplingDistribution`] resolved once up front.

use crate::dist::SamplingDistribution;
use crate::error::{ErrorLabError, Result};
use crate::experiment::{
    DerivedValues, DistributionPoint, ExperimentParameters, PowerCurvePoint,
};
use crate::power::beta_and_power_at;
use serde::{Deserialize, Serialize};

/// Which experiment parameter a power curve sweeps over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveVariable {
    /// Sweep sample size n (interpolated continuously).
    SampleSize,
    /// Sweep effect size δ.
    EffectSize,
}

/// Display window for distribution plots, in test-statistic units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

/// Margin shown beyond each distribution center, in statistic units.
const RANGE_MARGIN: f64 = 4.0;
/// Minimum display window width.
const RANGE_MIN_WIDTH: f64 = 8.0;

/// Power curve over `variable` from `min` to `max` in `steps` segments.
///
/// Produces `steps + 1` points with strictly increasing x, each computed
/// from a copy of `params` with the swept variable substituted. Sample
/// size is interpolated continuously, so intermediate x values need not
/// be whole numbers; they feed the same real-valued power math the
/// discrete entry points use.
///
/// # Errors
///
/// Returns [`ErrorLabError::InvalidParameter`] if `steps` is 0 or
/// `alpha` is outside (0, 1).
///
/// # Examples
///
/// ```
/// use errorlab::prelude::*;
///
/// let params = ExperimentParameters::default();
/// let curve =
///     power_curve(&params, CurveVariable::EffectSize, 0.0, 2.0, 50).expect("valid sweep");
/// assert_eq!(curve.len(), 51);
/// assert!(curve.last().expect("non-empty").power > curve[0].power);
/// ```
pub fn power_curve(
    params: &ExperimentParameters,
    variable: CurveVariable,
    min: f64,
    max: f64,
    steps: usize,
) -> Result<Vec<PowerCurvePoint>> {
    if steps == 0 {
        return Err(ErrorLabError::InvalidParameter {
            param: "steps".to_string(),
            value: "0".to_string(),
            constraint: "must be at least 1".to_string(),
        });
    }

    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let x = min + (max - min) * (i as f64 / steps as f64);

        let (n, effect_size) = match variable {
            CurveVariable::SampleSize => (x, params.effect_size),
            CurveVariable::EffectSize => (params.sample_size as f64, x),
        };

        let bp = beta_and_power_at(params, n, effect_size)?;
        points.push(PowerCurvePoint {
            x,
            power: bp.power,
            beta: bp.beta,
        });
    }

    Ok(points)
}

/// Choose a display window covering both hypothesis distributions.
///
/// Spans at least ±4 statistic units around the H₀ center (0) and the H₁
/// center (ncp); if an observed test statistic is supplied the window is
/// widened to keep it in frame with one unit of margin, and the final
/// window is never narrower than 8 units.
#[must_use]
pub fn display_range(derived: &DerivedValues, observed_statistic: Option<f64>) -> DisplayRange {
    let h1_center = derived.ncp;

    let mut min = (-RANGE_MARGIN).min(h1_center - RANGE_MARGIN);
    let mut max = RANGE_MARGIN.max(h1_center + RANGE_MARGIN);

    if let Some(stat) = observed_statistic {
        min = min.min(stat - 1.0);
        max = max.max(stat + 1.0);
    }

    if max - min < RANGE_MIN_WIDTH {
        let center = (min + max) / 2.0;
        min = center - RANGE_MIN_WIDTH / 2.0;
        max = center + RANGE_MIN_WIDTH / 2.0;
    }

    DisplayRange { min, max }
}

/// Sample both hypothesis densities over a display window.
///
/// Produces `points + 1` evenly spaced [`DistributionPoint`]s: the H₀
/// density at x, the H₁ density at x − ncp, and whether x falls inside
/// the rejection region given by `derived`.
///
/// # Errors
///
/// Returns [`ErrorLabError::InvalidParameter`] if `points` is 0.
pub fn distribution_curve(
    params: &ExperimentParameters,
    derived: &DerivedValues,
    range: DisplayRange,
    points: usize,
) -> Result<Vec<DistributionPoint>> {
    if points == 0 {
        return Err(ErrorLabError::InvalidParameter {
            param: "points".to_string(),
            value: "0".to_string(),
            constraint: "must be at least 1".to_string(),
        });
    }

    let dist = SamplingDistribution::for_test(params.test_type, params.sample_size as f64);
    let step = (range.max - range.min) / points as f64;

    let mut out = Vec::with_capacity(points + 1);
    for i in 0..=points {
        let x = range.min + i as f64 * step;

        let h0_density = dist.pdf(x);
        let h1_density = dist.pdf(x - derived.ncp);

        let below = derived
            .rejection_region
            .lower
            .is_some_and(|lower| x <= lower);
        let above = derived
            .rejection_region
            .upper
            .is_some_and(|upper| x >= upper);

        out.push(DistributionPoint {
            x,
            h0_density,
            h1_density,
            in_rejection_region: below || above,
        });
    }

    Ok(out)
}
