//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration inspection commands
//! - `layout` - Layout computation command
//! - `types` - Argument types shared by the commands

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::TricolError;
use crate::{config, schema};

pub mod config_cmd;
pub mod layout;
pub mod types;

pub use config_cmd::ConfigCommands;
pub use layout::LayoutArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tricol CLI - master/stack tiling layouts from the command line.
#[derive(Parser, Debug)]
#[command(name = "tricol")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Compute a layout and print the tile geometry.
    ///
    /// Arranges a number of tiles inside a screen area, optionally replaying
    /// shortcuts and resize gestures, and prints where every tile ends up.
    Layout(LayoutArgs),

    /// Inspect the configuration.
    ///
    /// Without a subcommand, prints the resolved configuration as JSON.
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Output Tricol configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Tricol configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(tricol completions --shell zsh)"
    ///   tricol completions --shell fish > ~/.config/fish/completions/tricol.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        self.config.as_ref().map(std::path::PathBuf::from)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), TricolError> {
        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(TricolError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        match &self.command {
            Commands::Layout(args) => layout::execute(args),
            Commands::Config { command } => {
                config_cmd::execute(command.as_ref().unwrap_or(&ConfigCommands::Show))
            }

            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "tricol", &mut io::stdout());
    }
}
