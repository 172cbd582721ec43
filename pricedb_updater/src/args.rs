//! Command-line arguments for the price-database updater.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON configuration file.
    #[clap(long, default_value = "pricedb.json")]
    pub config: String,

    /// Update operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The two user-invocable update operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch current prices for the configured stock tickers and append them
    /// to the price-database file.
    UpdateStocks,

    /// Fetch current exchange rates for the configured currencies and append
    /// them to the price-database file.
    UpdateCurrencies,
}
