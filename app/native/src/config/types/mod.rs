//! Configuration types for Tricol.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod gaps;
pub mod layout;
pub mod root;

// Gap types
pub use gaps::{GapValue, GapsConfig};
// Layout types
pub use layout::{LayoutConfig, LayoutKind, LayoutLimits};
// Root config types
pub use root::{ConfigError, TricolConfig, config_paths, load_config, load_config_from_path};
