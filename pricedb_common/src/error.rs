//! Error types shared across the workspace.
//!
//! The `UpdateError` enum unifies common failure cases for I/O, HTTP,
//! serialization, and provider-reported errors, allowing crates to propagate a
//! single error type.
use std::io;

use thiserror::Error;

/// Unified error type used by the updater and the common crate.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// I/O error originating from the standard library (price-database file, config file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP transport or body-decoding failure while talking to a provider.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The provider answered with a non-empty `error` field for a symbol.
    #[error("Provider error for {symbol}: {message}")]
    Provider {
        /// Symbol whose fetch the provider rejected.
        symbol: String,
        /// The provider's own error message, verbatim.
        message: String,
    },
}
