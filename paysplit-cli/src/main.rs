use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use paysplit_cli::{CliConfig, OutputFormat, Settings, parse_amount, render_json, render_text};
use paysplit_core::{Jurisdiction, optimal_split, tax_curve};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Find the salary/dividend split of a UK income that minimises combined
/// income tax and dividend tax.
#[derive(Debug, Parser)]
#[command(name = "paysplit", version, about, allow_negative_numbers = true)]
struct Cli {
    /// Total income in pounds, e.g. `40000`, `40,000.50` or `£40000`.
    income: String,

    /// Jurisdiction code: eng, sco, wal or ni. Defaults to eng.
    #[arg(short, long, value_parser = Jurisdiction::parse)]
    country: Option<Jurisdiction>,

    /// Output format. Defaults to text.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print the tax owed at every critical point.
    #[arg(long)]
    curve: bool,

    /// TOML file with default `country` and `format` values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber on stderr so stdout stays parseable.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let settings = Settings::resolve(cli.country, cli.format, &config);
    debug!(?settings, "resolved settings");

    let income = parse_amount(&cli.income).context("Failed to read income")?;
    let best = optimal_split(income, settings.jurisdiction)
        .with_context(|| format!("Failed to optimise income {income}"))?;
    info!(
        wage = %best.wage,
        dividend = %best.dividend,
        total_tax = %best.total_tax,
        "found optimal split"
    );

    let curve = if cli.curve {
        Some(tax_curve(income, settings.jurisdiction)?)
    } else {
        None
    };

    match settings.format {
        OutputFormat::Text => Ok(render_text(&best, curve.as_deref())),
        OutputFormat::Json => {
            render_json(&best, curve.as_deref()).context("Failed to render JSON report")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = run(&cli)?;
    println!("{output}");

    Ok(())
}
