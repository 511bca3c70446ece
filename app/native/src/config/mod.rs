//! Configuration module for Tricol.
//!
//! This module provides the configuration types and loads the configuration
//! file once per process.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use types::{
    ConfigError, GapValue, GapsConfig, LayoutConfig, LayoutKind, LayoutLimits, TricolConfig,
    config_paths, load_config as load_config_default, load_config_from_path,
};

/// Global configuration instance, loaded once at startup.
static CONFIG: OnceLock<TricolConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `get_config()` to take effect.
///
/// # Returns
///
/// `true` if the path was set successfully, `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Resolves a configuration, falling back to defaults on any failure.
///
/// A missing file is expected and silent; unreadable or invalid files are
/// reported with a warning.
#[must_use]
pub fn resolve(
    result: Result<(TricolConfig, PathBuf), ConfigError>,
) -> (TricolConfig, Option<PathBuf>) {
    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            (config, Some(path))
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            (TricolConfig::default(), None)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            (TricolConfig::default(), None)
        }
    }
}

fn load_or_default() -> TricolConfig {
    let result = CUSTOM_CONFIG_PATH.get().map_or_else(load_config_default, load_config_from_path);

    let (config, path) = resolve(result);
    if let Some(path) = path {
        let _ = CONFIG_PATH.set(path);
    }
    config
}

/// Returns the global configuration instance, initializing it if necessary.
///
/// If no configuration file is found, returns the default configuration.
pub fn get_config() -> &'static TricolConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }
