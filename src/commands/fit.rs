//! Fit command implementation.
//!
//! The fit command:
//! 1. Reads harness output
//! 2. Filters samples by curve
//! 3. Classifies and aggregates samples
//! 4. Builds cost models
//! 5. Writes the cost document

use super::models::{FitArgs, TimeDisplay};
use crate::aggregator::{summarize, AggregateOptions};
use crate::classifier::registry_for;
use crate::output::{write_document, write_document_to};
use crate::parser::{path_mentions_curve, read_samples, retain_curve, Harness, RawSample};
use crate::pipeline::{fit_samples, FitOutcome};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::time::Instant;

/// Execute the fit command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed harness output
/// * A sample with an unknown time unit (aborts the whole batch)
/// * File write errors
pub fn execute_fit(args: FitArgs) -> Result<FitOutcome> {
    let start_time = Instant::now();

    // Step 1: Read samples
    info!("Step 1/5: Reading {:?} benchmark output...", args.harness);
    let samples = load_samples(&args)?;
    debug!("Read {} raw samples", samples.len());

    // Step 2: Filter by curve
    let samples = match &args.curve {
        Some(curve) => {
            info!("Step 2/5: Keeping benchmarks for curve '{}'...", curve);
            filter_curve(&args, samples, curve)?
        }
        None => {
            info!("Step 2/5: Skipping curve filter (not requested)");
            samples
        }
    };

    // Steps 3 and 4: Classify, aggregate and fit
    info!("Step 3/5: Classifying and aggregating samples...");
    let registry = registry_for(args.harness).context("Failed to compile benchmark probes")?;
    let options = AggregateOptions::default().with_stddev(args.with_stddev);

    info!("Step 4/5: Building cost models...");
    let outcome = fit_samples(&samples, &registry, options, args.include_samples)
        .context("Failed to fit cost models")?;

    let summary = summarize(&outcome.aggregation);
    info!("Aggregation: {}", summary.summary());

    // Step 5: Write output
    info!("Step 5/5: Writing cost document...");
    match &args.output {
        Some(path) => {
            write_document(&outcome.document, path).context("Failed to write cost document")?;
            info!("✓ Cost document written to: {}", path.display());
        }
        None => {
            write_document_to(&outcome.document, io::stdout().lock())
                .context("Failed to write cost document to stdout")?;
        }
    }

    if args.print_summary {
        // Keep stdout valid JSON when the document is written there
        if summary_to_stderr(&args) {
            write_summary(&outcome, io::stderr().lock())?;
        } else {
            write_summary(&outcome, io::stdout().lock())?;
        }
    }

    let elapsed = start_time.elapsed();
    info!("Fit completed in {:.2}s", elapsed.as_secs_f64());

    Ok(outcome)
}

/// Read raw samples from the input file or stdin
///
/// **Private** - internal helper for execute_fit
fn load_samples(args: &FitArgs) -> Result<Vec<RawSample>> {
    let samples = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_samples(BufReader::new(file), args.harness)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => read_samples(io::stdin().lock(), args.harness)
            .context("Failed to parse benchmark output from stdin")?,
    };
    Ok(samples)
}

/// Apply the curve filter to freshly read samples
///
/// **Private** - internal helper for execute_fit
///
/// Go benchmark names carry no curve, so for that harness the input file
/// name is matched instead and the file is kept or rejected as a whole.
fn filter_curve(args: &FitArgs, samples: Vec<RawSample>, curve: &str) -> Result<Vec<RawSample>> {
    if args.harness != Harness::Golang {
        return Ok(retain_curve(samples, curve));
    }

    let Some(input) = &args.input else {
        anyhow::bail!("--curve with Go benchmark output needs an --input file named after the curve");
    };
    if !path_mentions_curve(input, curve) {
        anyhow::bail!(
            "Go benchmark file {} does not mention curve '{}' in its name",
            input.display(),
            curve
        );
    }

    debug!("Go input {} matches curve '{}'", input.display(), curve);
    Ok(samples)
}

/// Whether the text summary must go to stderr
///
/// **Private** - true when the cost document itself goes to stdout
fn summary_to_stderr(args: &FitArgs) -> bool {
    args.output.is_none()
}

/// Write a per-operation table of the fitted models
///
/// **Private** - internal helper for execute_fit
fn write_summary<W: Write>(outcome: &FitOutcome, mut out: W) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(80))?;
    writeln!(out, "COST MODEL SUMMARY")?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "{}", summarize(&outcome.aggregation).summary())?;
    writeln!(out)?;

    for (operation, model) in &outcome.models {
        let series = &outcome.aggregation.series[operation];
        let sizes = series.sizes();
        let (first, last) = (sizes.first().copied().unwrap_or(1), sizes.last().copied().unwrap_or(1));
        writeln!(
            out,
            "{:<12} {:<10} {:>3} points  size {:>8}..{:<8}  t({}) = {}",
            operation.as_str(),
            model.kind(),
            series.len(),
            first,
            last,
            last,
            TimeDisplay::format(model.predict(last))
        )?;
    }

    if !outcome.aggregation.skipped.is_empty() {
        writeln!(out, "\nSkipped {} unclassified benchmarks:", outcome.aggregation.skipped.len())?;
        for name in outcome.aggregation.skipped.iter().take(10) {
            writeln!(out, "  {}", name)?;
        }
    }
    writeln!(out, "{}", "=".repeat(80))
}

/// Validate fit arguments
///
/// **Public** - can be called before execute_fit for early validation
pub fn validate_args(args: &FitArgs) -> Result<()> {
    if let Some(input) = &args.input {
        if !input.is_file() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
    }

    if let Some(curve) = &args.curve {
        if curve.trim().is_empty() {
            anyhow::bail!("Curve name cannot be empty");
        }
        if args.harness == Harness::Golang && args.input.is_none() {
            anyhow::bail!("--curve with Go benchmark output needs an --input file named after the curve");
        }
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_missing_input() {
        let args = FitArgs {
            input: Some(PathBuf::from("/definitely/not/here.json")),
            ..FitArgs::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_curve() {
        let args = FitArgs {
            curve: Some("  ".to_string()),
            ..FitArgs::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_defaults() {
        assert!(validate_args(&FitArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_go_curve_needs_file() {
        let args = FitArgs {
            harness: Harness::Golang,
            curve: Some("bn254".to_string()),
            ..FitArgs::default()
        };
        assert!(validate_args(&args).is_err());
    }

    const GO_OUTPUT: &str = "BenchmarkG1JacAdd-8   \t 3915462\t       306.2 ns/op\n\
                             BenchmarkMultiExpG1/16_points-8  \t 1000\t   90000 ns/op\n";

    fn fit_go_file(file_name: &str, curve: &str) -> Result<FitOutcome> {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join(file_name);
        std::fs::write(&input, GO_OUTPUT).unwrap();

        execute_fit(FitArgs {
            input: Some(input),
            harness: Harness::Golang,
            curve: Some(curve.to_string()),
            output: Some(temp_dir.path().join("models.json")),
            ..FitArgs::default()
        })
    }

    #[test]
    fn test_go_curve_matches_file_name() {
        let outcome = fit_go_file("gnark-bn254.txt", "bn254").unwrap();

        assert_eq!(outcome.models.len(), 2);
        assert!(outcome.document.get("msm_G1").is_some());
        assert!(outcome.document.get("add_G1").is_some());
    }

    #[test]
    fn test_go_curve_rejects_other_file() {
        assert!(fit_go_file("gnark-bls12-381.txt", "bn254").is_err());
        assert!(fit_go_file("gnark-bls12-381.txt", "bls12_381").is_ok());
    }

    #[test]
    fn test_summary_goes_to_stderr_with_stdout_document() {
        let to_stdout = FitArgs {
            output: None,
            ..FitArgs::default()
        };
        assert!(summary_to_stderr(&to_stdout));
        assert!(!summary_to_stderr(&FitArgs::default()));
    }

    #[test]
    fn test_write_summary() {
        let samples = vec![RawSample::new("bn254/add_ff", 3.0, "ns")];
        let registry = registry_for(Harness::Raw).unwrap();
        let outcome = fit_samples(&samples, &registry, AggregateOptions::default(), false).unwrap();

        let mut buffer = Vec::new();
        write_summary(&outcome, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("COST MODEL SUMMARY"));
        assert!(text.contains("add_ff"));
    }
}
