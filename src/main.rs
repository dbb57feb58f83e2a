//! Circus ticket office.
//!
//! # Usage
//!
//! ```bash
//! # Start the menu with the default price and seeded shows
//! cargo run
//!
//! # Custom price, empty schedule, JSON listings
//! cargo run -- --price 35.50 --no-seed --output json
//! ```

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use rust_decimal::Decimal;

use circus_tickets::bootstrap::bootstrap;
use circus_tickets::cli::{OutputFormat, menu};
use circus_tickets::config::Config;
use circus_tickets::telemetry;

/// Ticket sales and occupancy reports for a two-shows-per-day circus.
#[derive(Parser)]
#[command(name = "circus-tickets")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Unit ticket price (overrides TICKET_PRICE)
    #[arg(long)]
    price: Option<Decimal>,

    /// Start with an empty schedule (overrides SEED_SHOWS)
    #[arg(long)]
    no_seed: bool,

    /// Log format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,

    /// Output format for listings and reports
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(price) = cli.price {
        config.ticket_price = price;
    }
    if cli.no_seed {
        config.seed_shows = false;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    telemetry::init(&config)?;
    config.print_summary();

    let service = bootstrap(&config, Local::now().date_naive());

    menu::run(&service, cli.output)
}
