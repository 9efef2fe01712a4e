use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use claim_core::Catalog;
use claim_data::{ScenarioLoader, ScenarioRunner, ScenarioWriter};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Run a sheet of answer scenarios through the compensation calculators.
///
/// The CSV file should have the following columns:
/// - scenario: A name for the row
/// - calculator: The calculator slug (e.g., bus-accident)
/// - answers: key=value pairs separated by ';'
///
/// Results are written as scenario,calculator,low,high.
#[derive(Parser, Debug)]
#[command(name = "claim-scenarios")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing scenarios
    #[arg(short, long)]
    file: PathBuf,

    /// Where to write results (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter for stderr; `RUST_LOG` takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let catalog = Catalog::builtin().context("Built-in calculator catalog is invalid")?;

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let scenarios = ScenarioLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    eprintln!("Parsed {} scenarios from {}", scenarios.len(), args.file.display());

    let outcomes = ScenarioRunner::new(&catalog)
        .run(&scenarios)
        .context("Failed to run scenarios")?;

    let written = match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            ScenarioWriter::write(out, &outcomes)
                .with_context(|| format!("Failed to write: {}", path.display()))?
        }
        None => ScenarioWriter::write(io::stdout().lock(), &outcomes)
            .context("Failed to write results")?,
    };

    eprintln!("Wrote {} results.", written);

    let misspelled: Vec<&str> = outcomes
        .iter()
        .filter(|outcome| !outcome.unknown_questions.is_empty())
        .map(|outcome| outcome.scenario.as_str())
        .collect();
    if !misspelled.is_empty() {
        warn!(
            count = misspelled.len(),
            scenarios = %misspelled.join(", "),
            "scenarios had answers for unknown questions; defaults were used in their place"
        );
    }

    Ok(())
}
