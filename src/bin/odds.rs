use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use smarty_rs::{DataDir, OddsFile};

/// Parse SMARTY odds files and print them as JSON.
#[derive(Parser)]
#[command(name = "smarty-odds")]
struct Cli {
    /// odds files, either paths or names relative to a data root
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// extra data roots, searched before SMARTY_DATA_DIR and the bundled data
    #[arg(short, long = "data-dir")]
    data_dir: Vec<PathBuf>,

    /// report what was parsed
    #[arg(short, long)]
    verbose: bool,

    /// print normalised selection weights instead of JSON
    #[arg(short, long, conflicts_with = "locate")]
    probabilities: bool,

    /// only print where each file was found
    #[arg(short, long)]
    locate: bool,
}

fn print_probabilities(odds: &OddsFile) {
    for ((decorator, _), p) in odds.iter().zip(odds.probabilities()) {
        println!("{decorator}\t{p}");
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dir = DataDir::from_env().prepend_roots(&cli.data_dir);
    for file in &cli.files {
        if cli.locate {
            println!("{}", dir.resolve(file)?.display());
            continue;
        }
        let odds = dir.parse_odds_file(file, cli.verbose)?;
        if cli.probabilities {
            print_probabilities(&odds);
        } else {
            println!("{}", serde_json::to_string_pretty(&odds)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
