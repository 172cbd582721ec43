//! Updater configuration loaded from a JSON file.
//!
//! All parameters of an update run come from one `Config` value: the provider
//! API keys, the target price-database file, the denomination currency, the
//! separator written before new entries, and the two symbol lists. The value
//! is loaded once per command and passed explicitly into each operation; there
//! is no global state.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::result::Result;

/// Configuration for the price-database updater.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// API key for the stock-quote provider, sent as the `token` query parameter.
    pub stock_api_key: String,

    /// API key for the exchange-rate provider, sent as the `access_key` query parameter.
    pub currency_api_key: String,

    /// Path of the price-database file that entries are appended to.
    pub price_file: PathBuf,

    /// Denomination currency for exchange rates and for the entry unit. Defaults to `USD`.
    #[serde(default = "default_denomination")]
    pub denomination: String,

    /// Text written before each freshly appended block of entries. Defaults to one newline.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Stock tickers to fetch, in order. Duplicates are fetched twice.
    #[serde(default)]
    pub stock_symbols: Vec<String>,

    /// Base currency codes to fetch, in order.
    #[serde(default)]
    pub currency_symbols: Vec<String>,
}

fn default_denomination() -> String {
    String::from("USD")
}

fn default_separator() -> String {
    String::from("\n")
}

impl Config {
    /// Loads the configuration from a JSON file at `path`.
    ///
    /// Returns an I/O error if the file cannot be opened and a JSON error if
    /// its contents do not deserialize into a `Config`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_config_gets_defaults() {
        let json = r#"{
            "stock_api_key": "sk",
            "currency_api_key": "ck",
            "price_file": "/tmp/prices.db"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.denomination, "USD");
        assert_eq!(config.separator, "\n");
        assert!(config.stock_symbols.is_empty());
        assert!(config.currency_symbols.is_empty());
    }

    #[test]
    fn full_config_round_trips_fields() {
        let json = r#"{
            "stock_api_key": "sk",
            "currency_api_key": "ck",
            "price_file": "prices.db",
            "denomination": "EUR",
            "separator": "\n\n",
            "stock_symbols": ["AAPL", "MSFT"],
            "currency_symbols": ["GBP"]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.denomination, "EUR");
        assert_eq!(config.separator, "\n\n");
        assert_eq!(config.stock_symbols, vec!["AAPL", "MSFT"]);
        assert_eq!(config.currency_symbols, vec!["GBP"]);
    }

    #[test]
    fn load_reads_a_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"stock_api_key": "sk", "currency_api_key": "ck", "price_file": "p.db"}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.stock_api_key, "sk");
        assert_eq!(config.price_file, PathBuf::from("p.db"));
    }

    #[test]
    fn load_fails_on_missing_file() {
        let result = Config::load(Path::new("/nonexistent/pricedb.json"));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{
            "stock_api_key": "sk",
            "currency_api_key": "ck",
            "price_file": "p.db",
            "api_key": "typo"
        }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }
}
