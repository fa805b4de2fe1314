//! Settlement CLI
//!
//! Reads a shared-expense ledger CSV and prints each person's net balance.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- ledger.csv
//! cargo run -- ledger.csv -o expanded.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use clap::Parser;
use settlement::{Result, SettlementEngine};
use std::io;
use std::path::PathBuf;
use std::process;

/// Computes net balances among people who share expenses
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the ledger CSV file
    csv_path: PathBuf,

    /// Path where the intermediate (one row per debtor) CSV file will be saved
    #[arg(short = 'o', long)]
    intermediate_csv_path: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let engine = SettlementEngine::from_path(&args.csv_path)?;

    if let Some(path) = &args.intermediate_csv_path {
        engine.write_intermediate(path)?;
    }

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_report(handle)?;

    Ok(())
}
