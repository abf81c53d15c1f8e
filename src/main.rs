//! fibseq CLI entry point.
//!
//! Writes the first Fibonacci terms to standard output as digit bytes followed
//! by a newline, and exits with the last term as its status. Logs go to
//! standard error.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fibseq_common::ConfigFile;
use fibseq_core::{Driver, FibonacciGenerator};

/// Emit Fibonacci terms as single output bytes.
#[derive(Debug, Parser)]
#[command(name = "fibseq", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of terms to emit.
    #[arg(short = 'n', long, env = "FIBSEQ_ITERATIONS")]
    iterations: Option<u32>,

    /// Print a JSON run summary to standard error.
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigFile::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigFile::default(),
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(iterations) = cli.iterations {
        config.run.driver.iterations = iterations;
    }

    info!(
        iterations = config.run.driver.iterations,
        seed = ?config.run.sequence.seed(),
        "Configuration loaded"
    );

    let mut generator = FibonacciGenerator::with_config(&config.run.sequence);
    let driver = Driver::with_config(&config.run.driver);

    let report = driver
        .run(&mut generator, &mut io::stdout().lock())
        .context("Sequence run failed")?;

    if cli.summary {
        let summary = serde_json::to_string(&report).context("Failed to encode run summary")?;
        eprintln!("{summary}");
    }

    debug!(exit_code = report.exit_code(), "Exiting");

    Ok(ExitCode::from(report.exit_code()))
}
