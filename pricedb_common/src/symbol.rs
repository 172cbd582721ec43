//! Symbol kinds used to dispatch fetches to the right provider.
//!
//! Symbols themselves are opaque strings supplied by the user's configuration
//! (stock tickers like `AAPL`, currency codes like `EUR`); no structure is
//! imposed on them and duplicates are allowed. Only the *kind* of a symbol is
//! modeled, as a closed enum, so dispatch is an exhaustive `match`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Kind of a configured symbol, selecting the provider and parsing rule.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A stock ticker, priced by the stock-quote provider.
    Stock,
    /// A base currency code, priced by the exchange-rate provider.
    Currency,
}
