//! The two update operations wiring fetch, format, and append together.
//!
//! Each operation runs to completion or fails before returning: collect the
//! quotes for the configured symbol list, format them as price-database lines
//! dated today, and append them to the configured file behind the configured
//! separator.
use chrono::Utc;
use log::info;

use pricedb_common::config::Config;
use pricedb_common::entry::format_entries;
use pricedb_common::store::append_entries;
use pricedb_common::symbol::SymbolKind;
use pricedb_common::Result;

use crate::fetch::QuoteFetcher;

/// Fetches current prices for the configured stock tickers and appends them.
pub fn update_stocks(config: &Config, fetcher: &QuoteFetcher) -> Result<()> {
    update(config, fetcher, SymbolKind::Stock, &config.stock_symbols)
}

/// Fetches current exchange rates for the configured currencies and appends them.
pub fn update_currencies(config: &Config, fetcher: &QuoteFetcher) -> Result<()> {
    update(config, fetcher, SymbolKind::Currency, &config.currency_symbols)
}

fn update(
    config: &Config,
    fetcher: &QuoteFetcher,
    kind: SymbolKind,
    symbols: &[String],
) -> Result<()> {
    let quotes = fetcher.collect(symbols, kind, config)?;

    // One date per batch, shared by every line.
    let today = Utc::now().date_naive();
    let lines = format_entries(&quotes, today, &config.denomination);

    append_entries(&config.price_file, &config.separator, &lines)?;
    info!(
        "Appended {} {} entries to {}",
        quotes.len(),
        kind,
        config.price_file.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pricedb_common::UpdateError;
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    fn config(price_file: &Path) -> Config {
        Config {
            stock_api_key: "stock-key".to_string(),
            currency_api_key: "currency-key".to_string(),
            price_file: price_file.to_path_buf(),
            denomination: "USD".to_string(),
            separator: "\n".to_string(),
            stock_symbols: Vec::new(),
            currency_symbols: Vec::new(),
        }
    }

    fn fetcher(server: &MockServer) -> QuoteFetcher {
        QuoteFetcher::with_base_urls(server.base_url(), server.base_url()).unwrap()
    }

    fn today() -> String {
        Utc::now().date_naive().format("%Y-%m-%d").to_string()
    }

    #[test]
    fn stock_update_appends_a_dated_entry() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/quote").query_param("symbol", "AAPL");
            then.status(200).json_body(json!({"c": 172.5}));
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.db");
        let mut config = config(&path);
        config.stock_symbols = vec!["AAPL".to_string()];

        update_stocks(&config, &fetcher(&server)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("\nP {} AAPL 172.5 USD", today()));
    }

    #[test]
    fn currency_update_appends_the_denomination_rate() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest").query_param("base", "EUR");
            then.status(200).json_body(json!({"rates": {"USD": 1.09}}));
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.db");
        let mut config = config(&path);
        config.currency_symbols = vec!["EUR".to_string()];

        update_currencies(&config, &fetcher(&server)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("\nP {} EUR 1.09 USD", today()));
    }

    #[test]
    fn provider_error_aborts_before_anything_is_written() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/quote").query_param("symbol", "ZZZ");
            then.status(200).json_body(json!({"error": "no data"}));
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.db");
        let mut config = config(&path);
        config.stock_symbols = vec!["ZZZ".to_string()];

        let result = update_stocks(&config, &fetcher(&server));

        assert!(matches!(result, Err(UpdateError::Provider { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn symbols_without_data_are_silently_omitted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/quote").query_param("symbol", "AAPL");
            then.status(200).json_body(json!({"c": 100}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/quote").query_param("symbol", "BBB");
            then.status(200).json_body(json!({}));
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.db");
        let mut config = config(&path);
        config.stock_symbols = vec!["AAPL".to_string(), "BBB".to_string()];

        update_stocks(&config, &fetcher(&server)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("\nP {} AAPL 100 USD", today()));
    }

    #[test]
    fn repeated_updates_accumulate_behind_the_separator() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/quote").query_param("symbol", "AAPL");
            then.status(200).json_body(json!({"c": 172.5}));
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.db");
        let mut config = config(&path);
        config.stock_symbols = vec!["AAPL".to_string()];

        update_stocks(&config, &fetcher(&server)).unwrap();
        update_stocks(&config, &fetcher(&server)).unwrap();

        let line = format!("P {} AAPL 172.5 USD", today());
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("\n{line}\n{line}"));
    }
}
