use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use share_recovery::params::{
    OutlierScope, Precision, RecoveryParams, DEFAULT_INPUTS, DEFAULT_TOLERANCE,
};
use share_recovery::recover::recover_files;
use share_recovery::report::RunReport;

/// Recover a polynomial's constant term from base-encoded shares and report
/// shares that are not on it.
#[derive(Parser, Debug)]
#[command(name = "share-recover", version, about, long_about = None)]
struct Cli {
    /// Test case files, processed in order (default: testcase1.json testcase2.json)
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Which cases to check for wrong points: none, last or all
    #[arg(long, default_value_t = OutlierScope::Last)]
    outliers: OutlierScope,

    /// Largest deviation from the polynomial still treated as on it
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Use exact rational arithmetic and print the exact constant term
    #[arg(long)]
    exact: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    fn params(&self) -> RecoveryParams {
        RecoveryParams {
            tolerance: self.tolerance,
            outliers: self.outliers,
            precision: if self.exact {
                Precision::Exact
            } else {
                Precision::Float
            },
        }
    }

    fn inputs(&self) -> Vec<PathBuf> {
        if self.inputs.is_empty() {
            DEFAULT_INPUTS.iter().map(PathBuf::from).collect()
        } else {
            self.inputs.clone()
        }
    }
}

fn emit(run: &RunReport, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for case in &run.cases {
                println!("{case}");
            }
            for failure in &run.failures {
                eprintln!("{}: {}", failure.label, failure.error);
            }
        }
        Format::Json => {
            let text = serde_json::to_string_pretty(run)
                .context("failed to serialize report")?;
            println!("{text}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "share_recovery=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.params();
    if let Err(e) = params.validate() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let run = recover_files(&cli.inputs(), &params);
    if let Err(e) = emit(&run, cli.format) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    if run.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
