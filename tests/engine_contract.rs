// =========================================================================
// FALSIFY-EL: engine contract tests (errorlab)
//
// Each test names an invariant the engine promises to its UI consumers
// and tries to falsify it. References:
//   - Abramowitz & Stegun (1964), Handbook of Mathematical Functions, 7.1.26
//   - Acklam (2003), "An algorithm for computing the inverse normal CDF"
//   - Student (1908), "The Probable Error of a Mean"
// =========================================================================

use errorlab::prelude::*;

/// FALSIFY-EL-001: beta and power are complementary and bounded
#[test]
fn falsify_el_001_beta_power_complementary() {
    let params = ExperimentParameters::default();
    let bp = beta_and_power(&params).expect("valid input");

    assert!(
        (bp.beta + bp.power - 1.0).abs() < 1e-12,
        "FALSIFIED EL-001: beta={} + power={} != 1",
        bp.beta,
        bp.power
    );
    assert!((0.0..=1.0).contains(&bp.beta), "FALSIFIED EL-001: beta out of [0,1]");
    assert!((0.0..=1.0).contains(&bp.power), "FALSIFIED EL-001: power out of [0,1]");
}

/// FALSIFY-EL-002: two-sided z critical values are symmetric negatives
#[test]
fn falsify_el_002_two_sided_z_symmetry() {
    for alpha in [0.001, 0.01, 0.05, 0.1, 0.2] {
        let params = ExperimentParameters {
            alpha,
            ..ExperimentParameters::default()
        };
        let derived = calculate_derived_values(&params).expect("valid input");
        let cv = &derived.critical_values;

        assert_eq!(cv.len(), 2);
        assert!(
            (cv[0] + cv[1]).abs() < 1e-9,
            "FALSIFIED EL-002: critical values {} and {} not symmetric at alpha={alpha}",
            cv[0],
            cv[1]
        );
        assert!(cv[0] < 0.0 && cv[1] > 0.0);
    }
}

/// FALSIFY-EL-003: one-sided-left flips the non-centrality sign
#[test]
fn falsify_el_003_left_sided_ncp_negative() {
    let params = ExperimentParameters {
        sidedness: Sidedness::OneSidedLeft,
        ..ExperimentParameters::default()
    };
    let derived = calculate_derived_values(&params).expect("valid input");

    assert!(
        (derived.ncp + 5.0).abs() < 1e-9,
        "FALSIFIED EL-003: ncp={} should be -5.0",
        derived.ncp
    );
}

/// FALSIFY-EL-004: same seed reproduces the sample byte for byte
#[test]
fn falsify_el_004_seeded_reproducibility() {
    let params = ExperimentParameters::default();
    let a = generate_sample(&params, false).expect("valid input");
    let b = generate_sample(&params, false).expect("valid input");

    assert_eq!(a.values, b.values, "FALSIFIED EL-004: values differ");
    assert_eq!(
        a.test_statistic, b.test_statistic,
        "FALSIFIED EL-004: statistic differs"
    );
    assert_eq!(a.p_value, b.p_value, "FALSIFIED EL-004: p-value differs");
}

/// FALSIFY-EL-005: power curve has steps+1 strictly increasing points
#[test]
fn falsify_el_005_power_curve_shape() {
    let params = ExperimentParameters::default();
    let curve = power_curve(&params, CurveVariable::SampleSize, 0.0, 1000.0, 50)
        .expect("valid input");

    assert_eq!(curve.len(), 51, "FALSIFIED EL-005: wrong point count");
    for pair in curve.windows(2) {
        assert!(
            pair[1].x > pair[0].x,
            "FALSIFIED EL-005: x not strictly increasing at {}",
            pair[0].x
        );
    }
}

/// FALSIFY-EL-006: quantile functions fail fast outside (0, 1)
#[test]
fn falsify_el_006_quantile_domain() {
    use errorlab::dist::{normal_quantile, t_quantile};

    for p in [-0.5, 0.0, 1.0, 1.5] {
        assert!(
            normal_quantile(p).is_err(),
            "FALSIFIED EL-006: normal_quantile accepted p={p}"
        );
        assert!(
            t_quantile(p, 10.0).is_err(),
            "FALSIFIED EL-006: t_quantile accepted p={p}"
        );
    }
}

/// FALSIFY-EL-007: 2x2 counts follow the documented rate grid
#[test]
fn falsify_el_007_two_by_two_rates() {
    let params = ExperimentParameters::default();
    let derived = calculate_derived_values(&params).expect("valid input");
    let counts = calculate_2x2_counts(&params, &derived);

    let h0_group = (params.population_size as f64 * (1.0 - params.prevalence)).round();
    let h1_group = (params.population_size as f64 * params.prevalence).round();

    assert_eq!(
        counts.true_negative,
        (h0_group * (1.0 - params.alpha)).round() as u64,
        "FALSIFIED EL-007: true_negative != round(h0_group * (1 - alpha))"
    );
    assert_eq!(
        counts.false_positive,
        (h0_group * params.alpha).round() as u64,
        "FALSIFIED EL-007: false_positive != round(h0_group * alpha)"
    );
    assert_eq!(
        counts.false_negative,
        (h1_group * derived.beta).round() as u64,
        "FALSIFIED EL-007: false_negative != round(h1_group * beta)"
    );
    assert_eq!(
        counts.true_positive,
        (h1_group * derived.power).round() as u64,
        "FALSIFIED EL-007: true_positive != round(h1_group * power)"
    );
}

/// FALSIFY-EL-008: t-based power converges to z-based power at large n
#[test]
fn falsify_el_008_t_converges_to_z() {
    let z_params = ExperimentParameters {
        sample_size: 500,
        effect_size: 0.15,
        ..ExperimentParameters::default()
    };
    let t_params = ExperimentParameters {
        test_type: TestType::TTest,
        ..z_params.clone()
    };

    let z_power = beta_and_power(&z_params).expect("valid input").power;
    let t_power = beta_and_power(&t_params).expect("valid input").power;

    assert!(
        (z_power - t_power).abs() < 1e-3,
        "FALSIFIED EL-008: z power {z_power} and t power {t_power} diverge at n=500"
    );
}

/// FALSIFY-EL-009: sampling decision agrees with the published p-value
#[test]
fn falsify_el_009_decision_consistency() {
    for seed in [1_u64, 7, 99, 12_345, 888_888] {
        let params = ExperimentParameters {
            seed,
            ..ExperimentParameters::default()
        };
        let obs = generate_sample(&params, true).expect("valid input");

        let expected = if obs.p_value < params.alpha {
            Decision::Reject
        } else {
            Decision::FailToReject
        };
        assert_eq!(
            obs.decision, expected,
            "FALSIFIED EL-009: decision disagrees with p-value at seed={seed}"
        );
    }
}
