//! Price-database entry lines and their formatting.
//!
//! A price entry is one line in the ledger price-database syntax:
//!
//! ```text
//! P <YYYY-MM-DD> <symbol> <value> <denomination>
//! ```
//!
//! recognized by downstream accounting tooling. The formatter turns a batch of
//! fetched quotes into newline-joined entry lines, capturing the date once per
//! call.

use std::fmt;

use chrono::NaiveDate;

/// A symbol paired with its fetched price or exchange rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Symbol the value was fetched for.
    pub symbol: String,
    /// Latest price (stocks) or exchange rate (currencies).
    pub value: f64,
}

/// One dated price-database line.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    /// Date the value was fetched on.
    pub date: NaiveDate,
    /// Symbol the entry prices.
    pub symbol: String,
    /// Price or rate value.
    pub value: f64,
    /// Currency the value is expressed in.
    pub denomination: String,
}

impl fmt::Display for PriceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P {} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.symbol,
            self.value,
            self.denomination
        )
    }
}

/// Formats one entry line per quote, joined with a single newline.
///
/// `date` is captured once by the caller and shared by every line. No trailing
/// newline is appended; an empty batch yields an empty string.
pub fn format_entries(quotes: &[Quote], date: NaiveDate, denomination: &str) -> String {
    quotes
        .iter()
        .map(|quote| {
            PriceEntry {
                date,
                symbol: quote.symbol.clone(),
                value: quote.value,
                denomination: denomination.to_string(),
            }
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
