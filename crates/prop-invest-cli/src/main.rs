mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::project::{PaymentArgs, ProjectArgs};

/// Rental property investment analysis
#[derive(Parser)]
#[command(
    name = "pia",
    version,
    about = "Rental property investment analysis",
    long_about = "A CLI for analysing rental property investments with decimal \
                  precision. Projects a month-by-month amortisation and cashflow \
                  schedule and derives total investment, gross and net yield, \
                  break-even month, and interest/principal totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project amortisation and cashflow for a property investment
    Project(ProjectArgs),
    /// Calculate the post-grace periodic loan installment
    Payment(PaymentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Project(args) => commands::project::run_project(args),
        Commands::Payment(args) => commands::project::run_payment(args),
        Commands::Version => {
            println!("pia {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
