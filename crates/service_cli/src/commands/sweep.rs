//! Sweep command implementation
//!
//! Runs the convergence sweep and streams one row per (box, sample count)
//! pair to the output.

use std::io::Write;

use area_sampling::mc::{ExperimentSweep, MonteCarloEstimator, SweepConfig};
use clap::ValueEnum;
use tracing::info;

use crate::Result;

/// Output format for sweep rows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<label> <N> <avg_area> <avg_error>` per line, no header
    #[default]
    Text,
    /// CSV with a header row
    Csv,
}

/// Run the sweep command
pub fn run<W: Write>(
    config: SweepConfig,
    estimator: &mut MonteCarloEstimator,
    format: OutputFormat,
    out: W,
) -> Result<usize> {
    info!("Starting sweep...");
    info!("  Boxes: {}", config.experiments().len());
    info!(
        "  Samples: {}..={} step {}",
        config.sample_start(),
        config.sample_end(),
        config.sample_step()
    );
    info!("  Runs per configuration: {}", config.runs_per_config());
    info!("  Output format: {:?}", format);

    let sweep = ExperimentSweep::new(config);

    let rows = match format {
        OutputFormat::Text => {
            let mut out = out;
            let rows = sweep.run_streaming(estimator, |row| {
                writeln!(out, "{}", row)?;
                Ok::<_, crate::CliError>(())
            })?;
            out.flush()?;
            rows
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            let rows = sweep.run_streaming(estimator, |row| {
                writer.serialize(&row)?;
                Ok::<_, crate::CliError>(())
            })?;
            writer.flush()?;
            rows
        }
    };

    info!("Sweep complete: {} rows", rows);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry_core::shapes::{BoundingBox, Circle};

    fn small_config() -> SweepConfig {
        SweepConfig::builder()
            .sample_range(100, 600)
            .sample_step(500)
            .runs_per_config(2)
            .circle(Circle::new(0.0, 0.0, 1.0))
            .experiment("a", BoundingBox::square(-1.0, 1.0).unwrap())
            .experiment("b", BoundingBox::square(-2.0, 2.0).unwrap())
            .exact_area(std::f64::consts::PI)
            .build()
            .unwrap()
    }

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        let mut estimator = MonteCarloEstimator::from_seed(1);
        let rows = run(small_config(), &mut estimator, OutputFormat::Text, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(rows, 4);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("a 100 "));
        assert!(lines[1].starts_with("a 600 "));
        assert!(lines[2].starts_with("b 100 "));
        assert!(lines[3].starts_with("b 600 "));
        assert!(lines.iter().all(|l| l.split(' ').count() == 4));
    }

    #[test]
    fn test_csv_output() {
        let mut buffer = Vec::new();
        let mut estimator = MonteCarloEstimator::from_seed(1);
        run(small_config(), &mut estimator, OutputFormat::Csv, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "label,sample_count,avg_area,avg_error");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("a,100,"));
    }

    #[test]
    fn test_formats_share_values() {
        let mut text = Vec::new();
        let mut csv = Vec::new();
        run(
            small_config(),
            &mut MonteCarloEstimator::from_seed(9),
            OutputFormat::Text,
            &mut text,
        )
        .unwrap();
        run(
            small_config(),
            &mut MonteCarloEstimator::from_seed(9),
            OutputFormat::Csv,
            &mut csv,
        )
        .unwrap();

        let text = String::from_utf8(text).unwrap();
        let csv = String::from_utf8(csv).unwrap();
        for (t, c) in text.lines().zip(csv.lines().skip(1)) {
            let t: Vec<_> = t.split(' ').collect();
            let c: Vec<_> = c.split(',').collect();
            assert_eq!(t[..2], c[..2]);
            for i in 2..4 {
                assert_eq!(t[i].parse::<f64>().unwrap(), c[i].parse::<f64>().unwrap());
            }
        }
    }
}
