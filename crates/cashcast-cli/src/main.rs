mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::forecast::{ForecastArgs, ProbabilityArgs, SummaryArgs};

/// Probabilistic cash flow forecasting over outstanding invoices
#[derive(Parser)]
#[command(
    name = "ccf",
    version,
    about = "Probabilistic cash flow forecasting over outstanding invoices",
    long_about = "Projects future cash inflows from a snapshot of outstanding invoices \
                  with decimal precision. Payment likelihood is modeled per invoice from \
                  its status and overdue depth, allocated to a predicted settlement date, \
                  and aggregated into daily, weekly, and monthly series with headline \
                  summary metrics."
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
    /// Run a full cash flow forecast over an invoice file
    Forecast(ForecastArgs),
    /// Run the forecast but print only the headline summary metrics
    Summary(SummaryArgs),
    /// Look up the payment-likelihood triple for a status and overdue depth
    Probability(ProbabilityArgs),
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
        Commands::Forecast(args) => commands::forecast::run_forecast(args),
        Commands::Summary(args) => commands::forecast::run_summary(args),
        Commands::Probability(args) => commands::forecast::run_probability(args),
        Commands::Version => {
            println!("ccf {}", env!("CARGO_PKG_VERSION"));
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
