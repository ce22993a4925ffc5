//! Baggo CLI - Command-line interface for shipment assessment and customs lookups.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{assess, check, filter, rules};

#[derive(Parser)]
#[command(name = "baggo")]
#[command(about = "Baggo shipment compatibility, risk and customs assessment CLI")]
struct Cli {
    /// Log filter (e.g. warn, info, baggo_core=debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Path to an assessment config JSON file
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full assessment for a {trip, item, traveler} request
    Assess {
        /// Request JSON file (or stdin if not provided)
        input: Option<String>,
        /// Print a summary table instead of JSON
        #[arg(long)]
        table: bool,
        /// Assess as of this RFC 3339 time instead of now
        #[arg(long)]
        at: Option<String>,
    },
    /// Check whether an item may travel on a trip
    Check {
        /// Request JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Keep the trips of a {trips, item} batch that can take the item
    Filter {
        /// Batch JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as a table
        #[arg(long)]
        table: bool,
    },
    /// Run the cheap capacity and prohibition pre-check over a batch
    QuickCheck {
        /// Batch JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as a table
        #[arg(long)]
        table: bool,
    },
    /// Find compatible trips on a corridor
    Search {
        /// Batch JSON file (or stdin if not provided)
        input: Option<String>,
        /// Required origin country (overrides the batch)
        #[arg(long)]
        from: Option<String>,
        /// Required destination country (overrides the batch)
        #[arg(long)]
        to: Option<String>,
        /// Output as a table
        #[arg(long)]
        table: bool,
    },
    /// Show the customs rules for a destination
    Rules {
        /// Country name or code
        country: String,
    },
    /// List HS classifications
    HsCodes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a country name to its internal code
    CountryCode {
        /// Country name or code
        name: String,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let config = cli.config;

    let result = match cli.command {
        Commands::Assess { input, table, at } => assess::run(input, config, table, at),
        Commands::Check { input } => check::run(input),
        Commands::Filter { input, table } => filter::run_filter(input, table),
        Commands::QuickCheck { input, table } => filter::run_quick_check(input, table),
        Commands::Search {
            input,
            from,
            to,
            table,
        } => filter::run_search(input, from, to, table),
        Commands::Rules { country } => rules::run_rules(country),
        Commands::HsCodes { json } => rules::run_hs_codes(json),
        Commands::CountryCode { name } => rules::run_country_code(name),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
