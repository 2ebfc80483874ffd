//! Command-line interface for synth-csv
//!
//! # Usage Examples
//!
//! ```bash
//! # 1000 rows of every schema column, sorted by name, to stdout
//! synth-csv --schema schema.json
//!
//! # Explicit column order, reproducible output, Russian email addresses
//! synth-csv --schema customers.yaml \
//!   --columns id,email,tier,signup \
//!   --rows 50000 --seed 42 --lang ru \
//!   --output customers.csv
//!
//! # Diagnostics go to stderr; raise the level with RUST_LOG
//! RUST_LOG=debug synth-csv --schema schema.json > data.csv
//! ```
//!
//! ## Schema Format
//! ```json
//! {
//!   "id":    { "type": "uniq_int32_by_key" },
//!   "tier":  { "type": "enum", "values": ["gold", "silver"] },
//!   "bonus": { "type": "norm_multiplier_key", "key": "id", "mean": 1.0, "stddev": 0.2 }
//! }
//! ```

use anyhow::Context;
use clap::Parser;
use synth_populate_csv::{CsvPopulator, PopulateArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "synth-csv")]
#[command(about = "Generate synthetic CSV data from a declarative column schema")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: PopulateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for CSV
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let args = cli.args;

    let mut populator = CsvPopulator::from_args(&args)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;

    tracing::info!(
        "Generating {} rows (seed={:?}, lang={:?})",
        args.rows,
        args.seed,
        args.lang
    );

    let metrics = match &args.output {
        Some(path) => populator
            .populate_file(path, args.rows)
            .with_context(|| format!("Failed to write CSV to {path:?}"))?,
        None => populator
            .populate(std::io::stdout().lock(), args.rows)
            .context("Failed to write CSV to stdout")?,
    };

    tracing::info!(
        "Done: {} rows in {:?} (generation {:?}, write {:?})",
        metrics.rows_written,
        metrics.total_duration,
        metrics.generation_duration,
        metrics.write_duration
    );

    Ok(())
}
