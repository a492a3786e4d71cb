//! zkcost CLI
//!
//! Classifies benchmark output from criterion, Go and tinybench harnesses
//! and fits per-operation cost models.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use zkcost::commands::{
    display_schema, display_version, execute_fit, predict_from_file, validate_args,
    validate_document_file, FitArgs,
};
use zkcost::parser::Harness;

/// zkcost - cost models from micro-benchmarks
#[derive(Parser, Debug)]
#[command(name = "zkcost")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fit cost models to benchmark output
    Fit {
        /// Benchmark output file (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Harness that produced the output
        #[arg(short, long, value_enum, default_value = "criterion")]
        format: Harness,

        /// Only keep benchmarks whose name mentions this curve
        #[arg(short, long)]
        curve: Option<String>,

        /// Output path for the cost document
        #[arg(short, long, default_value = "models.json")]
        output: PathBuf,

        /// Write the cost document to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Compute per-size standard deviations (criterion only)
        #[arg(long)]
        stddev: bool,

        /// Leave measured range/results arrays out of the document
        #[arg(long)]
        no_samples: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a cost document
    Validate {
        /// Path to cost document JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Predict the time of an operation at one or more sizes
    Predict {
        /// Path to cost document JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Operation id (e.g. msm_G1)
        #[arg(long)]
        op: String,

        /// Input sizes
        #[arg(short, long, num_args = 1.., default_value = "1")]
        size: Vec<u64>,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Fit {
            input,
            format,
            curve,
            output,
            stdout,
            stddev,
            no_samples,
            summary,
        } => {
            let args = FitArgs {
                input,
                harness: format,
                curve,
                output: if stdout { None } else { Some(output) },
                with_stddev: stddev,
                include_samples: !no_samples,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_fit(args)?;
        }

        Commands::Validate { file } => {
            validate_document_file(&file)?;
        }

        Commands::Predict { file, op, size } => {
            predict_from_file(&file, &op, &size)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
