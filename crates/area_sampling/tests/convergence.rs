//! Convergence tests for Monte Carlo area estimation.
//!
//! These tests check that estimates approach closed-form areas and that the
//! averaged relative error shrinks as the sample count grows.
//!
//! # Test Categories
//!
//! 1. **Closed-form agreement**: disc, lens and the reference configuration
//! 2. **Convergence**: error at large N below error at small N
//! 3. **Sweep shape**: full reference sweep row count and field layout

use approx::assert_relative_eq;
use area_sampling::mc::{ExperimentSweep, MonteCarloEstimator, SweepConfig, SINGLE_SHOT_SAMPLES};
use geometry_core::analytical::{
    circle_area, lens_area, reference_circles, reference_intersection_area,
};
use geometry_core::shapes::{BoundingBox, Circle};

// ============================================================================
// Closed-form agreement
// ============================================================================

#[test]
fn test_unit_disc_within_one_hundredth_of_pi() {
    let unit = [Circle::new(0.0, 0.0, 1.0)];
    let bounds = BoundingBox::covering(&unit).unwrap();

    for seed in [1, 2, 3] {
        let mut estimator = MonteCarloEstimator::from_seed(seed);
        let area = estimator
            .estimate_area(SINGLE_SHOT_SAMPLES, &unit, &bounds)
            .unwrap();
        assert!(
            (area - circle_area(1.0)).abs() < 0.01,
            "seed {}: estimate = {}",
            seed,
            area
        );
    }
}

#[test]
fn test_offset_lens_matches_closed_form() {
    let circles = [Circle::new(-0.4, 0.2, 1.3), Circle::new(0.9, -0.1, 0.8)];
    let bounds = BoundingBox::covering(&circles).unwrap();
    let exact = lens_area(&circles[0], &circles[1]);

    let mut estimator = MonteCarloEstimator::from_seed(99);
    let result = estimator
        .estimate(SINGLE_SHOT_SAMPLES, &circles, &bounds, exact)
        .unwrap();

    assert!(result.relative_error < 0.02, "result = {:?}", result);
}

#[test]
fn test_reference_configuration_single_shot() {
    let circles = reference_circles();
    let bounds = BoundingBox::covering(&circles).unwrap();

    let mut estimator = MonteCarloEstimator::from_seed(2718);
    let area = estimator
        .estimate_area(SINGLE_SHOT_SAMPLES, &circles, &bounds)
        .unwrap();

    assert_relative_eq!(area, reference_intersection_area(), epsilon = 0.02);
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_averaged_error_shrinks_with_sample_count() {
    let config = SweepConfig::reference_builder()
        .unwrap()
        .sample_range(100, 40_100)
        .sample_step(20_000)
        .build()
        .unwrap();
    let sweep = ExperimentSweep::new(config);
    let mut estimator = MonteCarloEstimator::from_seed(17);
    let rows = sweep.run(&mut estimator).unwrap();

    for label in ["tight", "wide"] {
        let arm: Vec<_> = rows.iter().filter(|r| r.label == label).collect();
        assert_eq!(arm.len(), 3);

        let small = arm[0].avg_error;
        let large = arm[2].avg_error;
        assert!(
            large < small,
            "{}: error at N={} ({}) not below error at N={} ({})",
            label,
            arm[2].sample_count,
            large,
            arm[0].sample_count,
            small
        );
    }
}

#[test]
fn test_tight_box_beats_wide_box_at_equal_samples() {
    // Same sample count over a smaller box means more hits and less variance
    let config = SweepConfig::reference_builder()
        .unwrap()
        .sample_range(20_000, 20_000)
        .runs_per_config(30)
        .build()
        .unwrap();
    let sweep = ExperimentSweep::new(config);
    let mut estimator = MonteCarloEstimator::from_seed(23);
    let rows = sweep.run(&mut estimator).unwrap();

    assert_eq!(rows[0].label, "tight");
    assert_eq!(rows[1].label, "wide");
    assert!(rows[0].avg_error < rows[1].avg_error);
}

// ============================================================================
// Sweep shape
// ============================================================================

#[test]
fn test_full_reference_sweep_shape() {
    let config = SweepConfig::reference_builder()
        .unwrap()
        .runs_per_config(1)
        .build()
        .unwrap();
    let sweep = ExperimentSweep::new(config);
    let mut estimator = MonteCarloEstimator::from_seed(0);

    let mut lines = Vec::new();
    sweep
        .run_streaming(&mut estimator, |row| {
            lines.push(row.to_string());
            Ok::<_, area_sampling::mc::EstimationError>(())
        })
        .unwrap();

    assert_eq!(lines.len(), ((100_000 - 100) / 500 + 1) * 2);
    for line in &lines {
        let fields: Vec<_> = line.split(' ').collect();
        assert_eq!(fields.len(), 4, "line: {}", line);
        assert!(fields[0] == "tight" || fields[0] == "wide");
        assert!(fields[1].parse::<usize>().is_ok());
        assert!(fields[2].parse::<f64>().is_ok());
        assert!(fields[3].parse::<f64>().is_ok());
    }
    assert!(lines[0].starts_with("tight 100 "));
    assert!(lines[200].starts_with("wide 100 "));
    assert!(lines[399].starts_with("wide 99600 "));
}
