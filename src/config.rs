//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, overridden by command-line flags,
//! and validated before the box office opens. A `.env` file is honoured when
//! present (loaded by `main.rs`).
//!
//! ## Variables
//!
//! - `TICKET_PRICE` - Unit ticket price, positive decimal (default: `50.00`)
//! - `SHOW_CAPACITY` - Capacity of newly scheduled shows (default: `200`)
//! - `SEED_SHOWS` - Pre-populate shows at startup (default: `true`)
//! - `SEED_DAYS` - Number of days, starting today, to seed (default: `2`)
//! - `SEED_SLOTS` - Comma-separated time slots seeded per day (default: `15:00,20:00`)
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;
use tracing_subscriber::EnvFilter;

use crate::application::services::{BoxOfficeSettings, MAX_SHOWS_PER_DATE};
use crate::domain::entities::DEFAULT_SHOW_CAPACITY;

/// Box office configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub ticket_price: Decimal,
    pub show_capacity: u32,
    /// When true, shows are scheduled for `seed_days` days at startup.
    pub seed_shows: bool,
    pub seed_days: u32,
    pub seed_slots: Vec<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticket_price: Decimal::new(5000, 2),
            show_capacity: DEFAULT_SHOW_CAPACITY,
            seed_shows: true,
            seed_days: 2,
            seed_slots: vec!["15:00".to_string(), "20:00".to_string()],
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TICKET_PRICE` is set but is not a decimal number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let ticket_price = match env::var("TICKET_PRICE") {
            Ok(v) => v
                .trim()
                .parse::<Decimal>()
                .with_context(|| format!("TICKET_PRICE must be a decimal number, got '{v}'"))?,
            Err(_) => defaults.ticket_price,
        };

        let show_capacity = env::var("SHOW_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.show_capacity);

        let seed_shows = env::var("SEED_SHOWS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.seed_shows);

        let seed_days = env::var("SEED_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.seed_days);

        let seed_slots = env::var("SEED_SLOTS")
            .map(|v| parse_slots(&v))
            .unwrap_or(defaults.seed_slots);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            ticket_price,
            show_capacity,
            seed_shows,
            seed_days,
            seed_slots,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `ticket_price` is not positive
    /// - `show_capacity` is zero
    /// - `seed_slots` holds more slots than a day allows, or repeats a slot
    /// - `log_level` is not a valid log filter
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.ticket_price <= Decimal::ZERO {
            anyhow::bail!(
                "TICKET_PRICE must be greater than 0, got {}",
                self.ticket_price
            );
        }

        if self.show_capacity == 0 {
            anyhow::bail!("SHOW_CAPACITY must be at least 1");
        }

        if self.seed_shows {
            if self.seed_slots.len() > MAX_SHOWS_PER_DATE {
                anyhow::bail!(
                    "SEED_SLOTS allows at most {} slots per day, got {}",
                    MAX_SHOWS_PER_DATE,
                    self.seed_slots.len()
                );
            }

            if let [first, second] = self.seed_slots.as_slice()
                && first == second
            {
                anyhow::bail!("SEED_SLOTS must not repeat a slot, got '{}' twice", first);
            }
        }

        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            anyhow::bail!("RUST_LOG is not a valid filter '{}': {}", self.log_level, e);
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Settings handed to the box office service.
    pub fn box_office_settings(&self) -> BoxOfficeSettings {
        BoxOfficeSettings {
            unit_price: self.ticket_price,
            show_capacity: self.show_capacity,
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Ticket price: {:.2}", self.ticket_price);
        tracing::info!("  Show capacity: {}", self.show_capacity);
        if self.seed_shows {
            tracing::info!(
                "  Seeding: {} day(s) at {}",
                self.seed_days,
                self.seed_slots.join(", ")
            );
        } else {
            tracing::info!("  Seeding: disabled");
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated slot list, dropping blanks.
fn parse_slots(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|slot| !slot.is_empty())
        .map(str::to_string)
        .collect()
}
