//! Fetching quotes from the two price providers.
//!
//! `QuoteFetcher` issues one blocking HTTP GET per symbol and extracts a single
//! numeric value from the JSON body: the latest close price for stocks, or the
//! rate for the configured denomination currency for currency pairs. Fetches
//! within a batch run strictly one after another; there is no timeout beyond
//! the HTTP client's defaults, no retry, and no caching.
use std::collections::HashMap;

use log::{info, warn};
use serde::Deserialize;

use pricedb_common::config::Config;
use pricedb_common::entry::Quote;
use pricedb_common::symbol::SymbolKind;
use pricedb_common::{Result, UpdateError};

/// Production base URL of the stock-quote provider.
const STOCK_BASE_URL: &str = "https://finnhub.io/api/v1";
/// Production base URL of the exchange-rate provider.
const CURRENCY_BASE_URL: &str = "https://api.exchangeratesapi.io/v1";

/// Response from the stock-quote provider.
///
/// The provider returns more fields (day high/low, open, previous close); only
/// the current price and the error field matter here, the rest is ignored.
#[derive(Debug, Deserialize)]
struct StockQuoteResponse {
    /// Current price.
    c: Option<f64>,
    /// Provider error message, when the request was rejected.
    error: Option<String>,
}

/// Response from the exchange-rate provider.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    /// Map from currency code to the rate against the requested base.
    rates: Option<HashMap<String, f64>>,
    /// Provider error message, when the request was rejected.
    error: Option<String>,
}

/// Blocking HTTP client for the two price providers.
pub struct QuoteFetcher {
    client: reqwest::blocking::Client,
    stock_base_url: String,
    currency_base_url: String,
}

impl QuoteFetcher {
    /// Creates a fetcher against the production provider endpoints.
    pub fn new() -> Result<Self> {
        Self::with_base_urls(STOCK_BASE_URL, CURRENCY_BASE_URL)
    }

    /// Creates a fetcher against explicit provider base URLs.
    pub fn with_base_urls(
        stock_base_url: impl Into<String>,
        currency_base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(QuoteFetcher {
            client,
            stock_base_url: stock_base_url.into(),
            currency_base_url: currency_base_url.into(),
        })
    }

    /// Fetches the value for one symbol from the provider selected by `kind`.
    ///
    /// Returns `Ok(None)` when the provider answered without an error but the
    /// expected field is absent — the symbol simply has no data right now.
    /// A non-empty `error` field in the response body becomes
    /// `UpdateError::Provider`.
    pub fn fetch(&self, symbol: &str, kind: SymbolKind, config: &Config) -> Result<Option<f64>> {
        match kind {
            SymbolKind::Stock => self.fetch_stock(symbol, &config.stock_api_key),
            SymbolKind::Currency => {
                self.fetch_currency(symbol, &config.currency_api_key, &config.denomination)
            }
        }
    }

    /// Fetches values for every symbol in order, skipping symbols without data.
    ///
    /// The first fetch error aborts the whole batch; symbols not yet attempted
    /// are not fetched. Input order is preserved, so duplicate symbols are
    /// fetched twice and both results appear.
    pub fn collect(
        &self,
        symbols: &[String],
        kind: SymbolKind,
        config: &Config,
    ) -> Result<Vec<Quote>> {
        let mut quotes = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            info!("Fetching {} value for {}", kind, symbol);
            match self.fetch(symbol, kind, config)? {
                Some(value) => quotes.push(Quote {
                    symbol: symbol.clone(),
                    value,
                }),
                None => warn!("[{}] provider returned no usable value; skipping", symbol),
            }
        }
        Ok(quotes)
    }

    fn fetch_stock(&self, symbol: &str, api_key: &str) -> Result<Option<f64>> {
        let url = format!("{}/quote", self.stock_base_url);
        let response: StockQuoteResponse = self
            .client
            .get(&url)
            .query(&[("symbol", symbol), ("token", api_key)])
            .send()?
            .json()?;

        check_provider_error(symbol, response.error)?;
        Ok(response.c)
    }

    fn fetch_currency(
        &self,
        symbol: &str,
        api_key: &str,
        denomination: &str,
    ) -> Result<Option<f64>> {
        let url = format!("{}/latest", self.currency_base_url);
        let response: RatesResponse = self
            .client
            .get(&url)
            .query(&[("base", symbol), ("access_key", api_key)])
            .send()?
            .json()?;

        check_provider_error(symbol, response.error)?;
        Ok(response
            .rates
            .and_then(|rates| rates.get(denomination).copied()))
    }
}

/// Turns a non-empty provider `error` field into `UpdateError::Provider`.
///
/// An absent or empty field is not an error.
fn check_provider_error(symbol: &str, error: Option<String>) -> Result<()> {
    match error {
        Some(message) if !message.is_empty() => Err(UpdateError::Provider {
            symbol: symbol.to_string(),
            message,
        }),
        _ => Ok(()),
    }
}
