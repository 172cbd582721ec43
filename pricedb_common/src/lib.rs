//!
//! Common types and utilities shared by the price-database updater.
//!
//! This crate aggregates:
//! - `error` — unified error type `UpdateError` used across the workspace.
//! - `result` — handy `Result<T, UpdateError>` alias.
//! - `config` — the updater configuration loaded from a JSON file.
//! - `symbol` — the stock/currency symbol kind used for provider dispatch.
//! - `entry` — price-database entry lines and their formatting.
//! - `store` — appending formatted entries to the price-database file.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod config;
pub mod symbol;
pub mod entry;
pub mod store;

pub use config::Config;
pub use error::UpdateError;
pub use result::Result;
pub use symbol::SymbolKind;
