//! CLI module for Tricol.
//!
//! This module provides the command-line interface for computing layouts,
//! inspecting the configuration and generating shell completions.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::TricolError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), TricolError> {
    let cli = Cli::parse();
    cli.execute()
}
