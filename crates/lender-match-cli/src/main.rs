mod commands;
mod config;
mod input;
mod output;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::criteria::CriteriaArgs;
use commands::evaluate::EvaluateArgs;
use commands::matching::MatchArgs;
use config::CliConfig;

/// Lender program eligibility matching
#[derive(Parser)]
#[command(
    name = "lender-match",
    version,
    about = "Lender program eligibility matching",
    long_about = "Evaluates financing applications against lender program criteria. \
                  Scores each program by weighted criteria fit and ranks eligible \
                  programs first."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to LENDER_MATCH_OUTPUT, then json)
    #[arg(long, global = true)]
    output: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one application against one program
    Evaluate(EvaluateArgs),
    /// Rank every active program for one application
    Match(MatchArgs),
    /// Print the criterion weight table
    Criteria(CriteriaArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(2);
        }
    };
    if let Err(e) = telemetry::init(&config.log_level) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    let format = cli.output.unwrap_or(config.default_output);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run_evaluate(args),
        Commands::Match(args) => commands::matching::run_match(args),
        Commands::Criteria(args) => commands::criteria::run_criteria(args),
        Commands::Version => {
            println!("lender-match {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&format, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
