//! Single command implementation
//!
//! Reads three circles from the input, samples their common area inside the
//! tightest covering box and writes only the estimate.

use std::io::{Read, Write};

use area_sampling::mc::MonteCarloEstimator;
use geometry_core::shapes::{BoundingBox, Circle};
use tracing::{info, warn};

use crate::{CliError, Result};

/// Number of circles read from the input.
pub const CIRCLE_COUNT: usize = 3;

/// Numbers expected on the input (`x y r` per circle).
pub const VALUE_COUNT: usize = CIRCLE_COUNT * 3;

/// Parse `x1 y1 r1 x2 y2 r2 x3 y3 r3` from whitespace-separated text
///
/// Values past the ninth are ignored with a warning.
pub fn parse_circles(text: &str) -> Result<[Circle; CIRCLE_COUNT]> {
    let mut values = [0.0_f64; VALUE_COUNT];
    let mut tokens = text.split_whitespace();

    for (i, slot) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| {
            CliError::InvalidInput(format!(
                "expected {} values (x y r for {} circles), found {}",
                VALUE_COUNT, CIRCLE_COUNT, i
            ))
        })?;
        *slot = token.parse().map_err(|_| {
            CliError::InvalidInput(format!("value {} ('{}') is not a number", i + 1, token))
        })?;
    }

    let extra = tokens.count();
    if extra > 0 {
        warn!("Ignoring {} trailing value(s) after the first {}", extra, VALUE_COUNT);
    }

    let [x1, y1, r1, x2, y2, r2, x3, y3, r3] = values;
    Ok([
        Circle::new(x1, y1, r1),
        Circle::new(x2, y2, r2),
        Circle::new(x3, y3, r3),
    ])
}

/// Run the single command
///
/// Returns the estimated area after writing it to `out`.
pub fn run<R: Read, W: Write>(
    mut input: R,
    mut out: W,
    estimator: &mut MonteCarloEstimator,
    samples: usize,
) -> Result<f64> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let circles = parse_circles(&text)?;
    let bounds = BoundingBox::covering(&circles)?;
    info!(?circles, ?bounds, samples, "Estimating intersection area");

    let area = estimator.estimate_area(samples, &circles, &bounds)?;
    writeln!(out, "{}", area)?;
    out.flush()?;

    info!("Estimate complete: {}", area);
    Ok(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use area_sampling::mc::SINGLE_SHOT_SAMPLES;
    use geometry_core::analytical::reference_intersection_area;

    #[test]
    fn test_parse_circles() {
        let circles = parse_circles("1 1 1\n1.5 2 1.118\n2 1.5 1.118\n").unwrap();
        assert_eq!(circles[0], Circle::new(1.0, 1.0, 1.0));
        assert_eq!(circles[1], Circle::new(1.5, 2.0, 1.118));
        assert_eq!(circles[2], Circle::new(2.0, 1.5, 1.118));
    }

    #[test]
    fn test_parse_ignores_trailing_values() {
        let circles = parse_circles("0 0 1 0 0 1 0 0 1 99 98").unwrap();
        assert_eq!(circles[2], Circle::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_parse_too_few_values() {
        match parse_circles("1 1 1 2 2") {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("found 5"), "{}", msg),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(parse_circles(""), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_malformed_value() {
        match parse_circles("1 1 1 2 x 1 3 3 1") {
            Err(CliError::InvalidInput(msg)) => {
                assert!(msg.contains("value 5"), "{}", msg);
                assert!(msg.contains("'x'"), "{}", msg);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_reference_input_end_to_end() {
        let input = "1 1 1  1.5 2 1.118  2 1.5 1.118";
        let mut out = Vec::new();
        let mut estimator = MonteCarloEstimator::from_seed(1234);

        let area = run(input.as_bytes(), &mut out, &mut estimator, SINGLE_SHOT_SAMPLES).unwrap();

        // Standard error is ~0.003 over the 3.118 x 3.118 covering box
        assert_relative_eq!(area, reference_intersection_area(), epsilon = 0.02);

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert_eq!(printed.trim().parse::<f64>().unwrap(), area);
    }

    #[test]
    fn test_disjoint_circles_print_zero() {
        let mut out = Vec::new();
        let mut estimator = MonteCarloEstimator::from_seed(0);

        let area = run("0 0 1 10 0 1 20 0 1".as_bytes(), &mut out, &mut estimator, 1_000).unwrap();
        assert_eq!(area, 0.0);
        assert_eq!(String::from_utf8(out).unwrap(), "0\n");
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut estimator = MonteCarloEstimator::from_seed(0);
        let result = run("0 0 1 0 0 1 0 0 1".as_bytes(), Vec::new(), &mut estimator, 0);
        assert!(matches!(result, Err(CliError::Estimation(_))));
    }
}
