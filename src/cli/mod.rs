//! Text-menu presentation layer.
//!
//! - [`menu`] - Interactive loop built on `dialoguer` prompts
//! - [`input`] - Parsing of IDs, quantities, and `DD/MM/YYYY` dates
//! - [`render`] - Plain-text lines for shows, customers, and sales

pub mod input;
pub mod menu;
pub mod render;

use clap::ValueEnum;

/// How listings and reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
