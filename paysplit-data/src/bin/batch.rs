use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use paysplit_data::SplitBatch;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Find the optimal salary/dividend split for every income in a CSV file.
///
/// The CSV file should have the following columns:
/// - income: Total income in pounds (e.g., 40000 or "40,000.50")
/// - country: Optional jurisdiction code (eng, sco, wal, ni); defaults to eng
#[derive(Parser, Debug)]
#[command(name = "paysplit-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing incomes
    #[arg(short, long)]
    file: PathBuf,

    /// Where to write the results; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    info!("Loading incomes from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = SplitBatch::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    info!("Parsed {} records from CSV", records.len());

    let splits = SplitBatch::evaluate(&records).context("Failed to evaluate incomes")?;

    let written = match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            SplitBatch::write(out, &splits)
        }
        None => SplitBatch::write(io::stdout().lock(), &splits),
    }
    .context("Failed to write results")?;

    info!("Successfully wrote {} optimal splits.", written);

    Ok(())
}
