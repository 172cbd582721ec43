//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `UpdateError`, so functions can simply return `Result<T>`.
use crate::error::UpdateError;

/// Workspace-wide `Result` alias with `UpdateError` as the default error.
pub type Result<T, E = UpdateError> = std::result::Result<T, E>;
