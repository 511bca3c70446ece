//! Root configuration and file loading.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GapsConfig, LayoutConfig};

/// Root configuration structure.
///
/// Every section is optional; a missing key takes its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TricolConfig {
    /// JSON Schema reference for editor support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Master layout settings.
    pub layout: LayoutConfig,

    /// Outer gap settings.
    pub gaps: GapsConfig,
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/tricol/config.jsonc or ~/.tricol.jsonc"
    )]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Configuration file names looked up directly in the home directory.
const HOME_CONFIG_FILE_NAMES: &[&str] = &[".tricol.jsonc", ".tricol.json"];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/tricol/config.jsonc`, if the variable is set
/// 2. `~/.config/tricol/config.jsonc`
/// 3. The platform config directory, e.g. `~/Library/Application Support/tricol/`
/// 4. `~/.tricol.jsonc`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    fn push_dir(dir: &Path, paths: &mut Vec<PathBuf>) {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        push_dir(&PathBuf::from(xdg_config).join("tricol"), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(&home.join(".config").join("tricol"), &mut paths);
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(&config_dir.join("tricol"), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        for filename in HOME_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// Comments (`//` and `/* */`) are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected
/// locations.
/// Returns `ConfigError::IoError` if a configuration file exists but could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(TricolConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), load_config_from_path)
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, otherwise the
/// same errors as [`load_config`].
pub fn load_config_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<(TricolConfig, PathBuf), ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: TricolConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}
