//! Distribution primitives: normal and Student's-t PDF/CDF/quantile.
//!
//! Built on the approximations in [`crate::special`]. The t-distribution
//! functions accept real-valued degrees of freedom because the power-curve
//! sweep interpolates fractional sample sizes.
//!
//! # Examples
//!
//! ```
//! use errorlab::dist::{normal_cdf, normal_quantile};
//!
//! assert!((normal_cdf(0.0) - 0.5).abs() < 1e-9);
//! let z = normal_quantile(0.975).expect("0.975 is a valid probability");
//! assert!((z - 1.96).abs() < 1e-3);
//! ```

use crate::error::{ErrorLabError, Result};
use crate::experiment::TestType;
use crate::special::{beta_incomplete, erf, log_gamma};
use std::f64::consts::PI;

/// Acklam quantile coefficients: central-region numerator.
const ACKLAM_A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];

/// Acklam quantile coefficients: central-region denominator.
const ACKLAM_B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

/// Acklam quantile coefficients: tail-region numerator.
const ACKLAM_C: [f64; 6] = [
    -7.784_894_002_430_432e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];

/// Acklam quantile coefficients: tail-region denominator.
const ACKLAM_D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Regime boundary between Acklam's tail and central approximations.
const ACKLAM_P_LOW: f64 = 0.024_25;

/// Degrees of freedom above which the t-distribution is treated as normal.
const NORMAL_APPROX_DF: f64 = 100.0;

/// Standard normal PDF φ(x).
#[must_use]
pub fn normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal CDF Φ(x), via the error function.
#[must_use]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal quantile Φ⁻¹(p) for p in (0, 1).
///
/// Acklam's rational approximation with three regimes: low tail
/// (p < 0.02425), central region, and high tail (p > 0.97575).
///
/// # Errors
///
/// Returns [`ErrorLabError::InvalidParameter`] if p is outside the open
/// interval (0, 1). Probability-valued inputs (alpha, quantile levels)
/// must be validated by the caller before reaching a hot loop.
pub fn normal_quantile(p: f64) -> Result<f64> {
    if p <= 0.0 || p >= 1.0 || p.is_nan() {
        return Err(ErrorLabError::InvalidParameter {
            param: "p".to_string(),
            value: format!("{p}"),
            constraint: "must be in the open interval (0, 1)".to_string(),
        });
    }

    let p_high = 1.0 - ACKLAM_P_LOW;

    let z = if p < ACKLAM_P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((ACKLAM_C[0] * q + ACKLAM_C[1]) * q + ACKLAM_C[2]) * q + ACKLAM_C[3]) * q
            + ACKLAM_C[4])
            * q
            + ACKLAM_C[5])
            / ((((ACKLAM_D[0] * q + ACKLAM_D[1]) * q + ACKLAM_D[2]) * q + ACKLAM_D[3]) * q + 1.0)
    } else if p <= p_high {
        let q = p - 0.5;
        let r = q * q;
        (((((ACKLAM_A[0] * r + ACKLAM_A[1]) * r + ACKLAM_A[2]) * r + ACKLAM_A[3]) * r
            + ACKLAM_A[4])
            * r
            + ACKLAM_A[5])
            * q
            / (((((ACKLAM_B[0] * r + ACKLAM_B[1]) * r + ACKLAM_B[2]) * r + ACKLAM_B[3]) * r
                + ACKLAM_B[4])
                * r
                + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((ACKLAM_C[0] * q + ACKLAM_C[1]) * q + ACKLAM_C[2]) * q + ACKLAM_C[3]) * q
            + ACKLAM_C[4])
            * q
            + ACKLAM_C[5])
            / ((((ACKLAM_D[0] * q + ACKLAM_D[1]) * q + ACKLAM_D[2]) * q + ACKLAM_D[3]) * q + 1.0)
    };

    Ok(z)
}

/// Student's-t PDF with `df` degrees of freedom.
///
/// Closed form via [`log_gamma`]:
/// `Γ((df+1)/2) / (√(df·π) · Γ(df/2) · (1 + t²/df)^((df+1)/2))`.
#[must_use]
pub fn t_pdf(t: f64, df: f64) -> f64 {
    let num = (log_gamma((df + 1.0) / 2.0) - log_gamma(df / 2.0)).exp();
    let denom = (df * PI).sqrt() * (1.0 + (t * t) / df).powf((df + 1.0) / 2.0);
    num / denom
}

/// Student's-t CDF with `df` degrees of freedom.
///
/// For df > 100 the normal CDF is used directly (the difference is below
/// display precision). Otherwise the tail probability comes from the
/// regularized incomplete beta, `P(T > |t|) = I_x(df/2, 1/2) / 2` with
/// `x = df/(df + t²)`, mapped to the correct tail by the sign of t.
#[must_use]
pub fn t_cdf(t: f64, df: f64) -> f64 {
    if df > NORMAL_APPROX_DF {
        return normal_cdf(t);
    }

    let x = df / (df + t * t);
    let prob = 0.5 * beta_incomplete(df / 2.0, 0.5, x);

    if t >= 0.0 {
        1.0 - prob
    } else {
        prob
    }
}

/// Student's-t quantile for p in (0, 1) with `df` degrees of freedom.
///
/// For df > 100 delegates to [`normal_quantile`]. Otherwise runs up to 5
/// Newton-Raphson steps starting from the normal quantile, with [`t_pdf`]
/// as the derivative and convergence tolerance 1e-8.
///
/// # Errors
///
/// Returns [`ErrorLabError::InvalidParameter`] if p is outside (0, 1).
pub fn t_quantile(p: f64, df: f64) -> Result<f64> {
    if df > NORMAL_APPROX_DF {
        return normal_quantile(p);
    }

    let mut t = normal_quantile(p)?;
    for _ in 0..5 {
        let delta = t_cdf(t, df) - p;
        if delta.abs() < 1e-8 {
            break;
        }
        t -= delta / t_pdf(t, df);
    }

    Ok(t)
}

/// A sampling distribution resolved from the test-type tag.
///
/// The engine branches on [`TestType`] exactly once per calculation and
/// carries the resolved variant through hot loops (the power-curve sweep
/// and distribution-plot sampling), so the tag is never re-inspected per
/// point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingDistribution {
    /// Standard normal (z-test).
    Normal,
    /// Student's t with the given degrees of freedom (t-test).
    StudentT {
        /// Degrees of freedom; fractional values arise from sweep
        /// interpolation over sample size.
        df: f64,
    },
}

impl SamplingDistribution {
    /// Resolve the distribution for a test type at sample size `n`.
    ///
    /// For a t-test the degrees of freedom are n − 1.
    #[must_use]
    pub fn for_test(test_type: TestType, n: f64) -> Self {
        match test_type {
            TestType::ZTest => SamplingDistribution::Normal,
            TestType::TTest => SamplingDistribution::StudentT { df: n - 1.0 },
        }
    }

    /// Probability density at x.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        match self {
            SamplingDistribution::Normal => normal_pdf(x),
            SamplingDistribution::StudentT { df } => t_pdf(x, *df),
        }
    }

    /// Cumulative probability at x.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            SamplingDistribution::Normal => normal_cdf(x),
            SamplingDistribution::StudentT { df } => t_cdf(x, *df),
        }
    }

    /// Quantile (inverse CDF) at probability p.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorLabError::InvalidParameter`] if p is outside (0, 1).
    pub fn quantile(&self, p: f64) -> Result<f64> {
        match self {
            SamplingDistribution::Normal => normal_quantile(p),
            SamplingDistribution::StudentT { df } => t_quantile(p, *df),
        }
    }
}

#[cfg(test)]
#[path = "dist_tests.rs"]
mod tests;
