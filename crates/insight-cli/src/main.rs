mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::charts::ChartsArgs;
use commands::context::ContextArgs;
use commands::dupont::DupontArgs;
use commands::flags::FlagsArgs;
use commands::periods::PeriodsArgs;
use commands::ratios::RatiosArgs;
use commands::signals::SignalsArgs;
use commands::store::StoreArgs;

/// Financial statement insight engine
#[derive(Parser)]
#[command(
    name = "insight",
    version,
    about = "Financial statement ratios, forensic flags and chart series",
    long_about = "A CLI over standardized financial statements. Computes the ratio board, \
                  risk signals and DuPont decomposition, runs forensic red/green flag rules, \
                  maps chart series and builds the context for narrative reports."
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
    /// Ratio board for one period with its comparison column
    Ratios(RatiosArgs),
    /// Risk and opportunity signals
    Signals(SignalsArgs),
    /// DuPont decomposition and its change on the prior year
    Dupont(DupontArgs),
    /// Forensic red/green flags on the latest two periods
    Flags(FlagsArgs),
    /// Chart series (structure, trends, cash flow)
    Charts(ChartsArgs),
    /// List report periods in chronological order
    Periods(PeriodsArgs),
    /// Analysis context for narrative report generation
    Context(ContextArgs),
    /// Save, show or clear the working session
    Store(StoreArgs),
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

/// Diagnostics go to stderr so stdout stays machine readable.
fn init_logging() {
    let filter = EnvFilter::try_from_env("INSIGHT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Ratios(args) => commands::ratios::run_ratios(args),
        Commands::Signals(args) => commands::signals::run_signals(args),
        Commands::Dupont(args) => commands::dupont::run_dupont(args),
        Commands::Flags(args) => commands::flags::run_flags(args),
        Commands::Charts(args) => commands::charts::run_charts(args),
        Commands::Periods(args) => commands::periods::run_periods(args),
        Commands::Context(args) => commands::context::run_context(args),
        Commands::Store(args) => commands::store::run_store(args),
        Commands::Version => {
            println!("insight {}", env!("CARGO_PKG_VERSION"));
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
