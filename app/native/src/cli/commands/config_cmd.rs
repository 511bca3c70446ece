//! Config CLI commands.
//!
//! Commands for inspecting the Tricol configuration.

use clap::Subcommand;

use crate::cli::output;
use crate::config::{self, config_paths};
use crate::error::TricolError;

/// Config inspection commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Print the resolved configuration as JSON.
    ///
    /// Shows the configuration actually in use, after defaults have been
    /// filled in and inconsistent layout values repaired.
    Show,

    /// Show the path to the configuration file.
    ///
    /// Displays the paths where Tricol looks for configuration files,
    /// and indicates which one is currently in use (if any).
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn execute(cmd: &ConfigCommands) -> Result<(), TricolError> {
    match cmd {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

fn show_config() -> Result<(), TricolError> {
    let mut resolved = config::get_config().clone();
    resolved.layout = resolved.layout.sanitized();
    output::print_highlighted_json(&serde_json::to_value(&resolved)?);
    Ok(())
}

fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let active = config::get_config_path();
    for (i, path) in config_paths().iter().enumerate() {
        let marker = if active == Some(path) {
            " (active)"
        } else if path.exists() {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    match active {
        Some(path) if !config_paths().contains(path) => {
            println!("\nUsing configuration from: {}", path.display());
        }
        Some(_) => {}
        None => println!("\nNo configuration file found. Using defaults."),
    }
}
