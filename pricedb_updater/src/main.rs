//! Price-database updater — fetches current prices for the configured stock
//! tickers and currency pairs from two web APIs and appends them to a ledger
//! price-database file as dated `P` entries.
//!
//! Usage example (CLI):
//! ```bash
//! pricedb_updater --config ./pricedb.json update-stocks
//! pricedb_updater --config ./pricedb.json update-currencies
//! ```
//!
//! The configuration file is JSON; see `pricedb_common::config` for the
//! recognized fields. Every run reads the configuration fresh, fetches the
//! symbols one after another, and appends the formatted entries behind the
//! configured separator.
#![warn(missing_docs)]
mod args;
mod fetch;
mod update;

use std::path::Path;

use clap::Parser;
use log::info;

use crate::args::{Args, Command};
use crate::fetch::QuoteFetcher;
use pricedb_common::{Config, UpdateError};

fn main() -> Result<(), UpdateError> {
    init_logger();
    let args = Args::parse();

    let config = Config::load(Path::new(&args.config))?;
    info!("Configuration loaded from {}", args.config);

    let fetcher = QuoteFetcher::new()?;
    match args.command {
        Command::UpdateStocks => update::update_stocks(&config, &fetcher)?,
        Command::UpdateCurrencies => update::update_currencies(&config, &fetcher)?,
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
