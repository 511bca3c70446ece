//! Error types for Tricol.
//!
//! The layout engine itself never fails; these errors come from the outer
//! layers (argument parsing, configuration and output).

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during application execution.
///
/// Serializes as `{ "kind": ..., "message": ... }` so it can be printed as
/// JSON alongside regular command output.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum TricolError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for TricolError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for TricolError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<ConfigError> for TricolError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<String> for TricolError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for TricolError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
