//! Layout configuration types.
//!
//! Defaults and limits for the master layouts: which layout a workspace starts
//! with, the gap between tiles and the range the master ratio and capacity may
//! move in.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Available layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Master column on the left, then up to two stack columns.
    #[default]
    LeftMasterColumns,
    /// Single master on the left, stack laid out in rows of two.
    LeftMasterRows,
}

impl LayoutKind {
    /// All layouts, in cycling order.
    pub const ALL: [Self; 2] = [Self::LeftMasterColumns, Self::LeftMasterRows];

    /// Returns the kebab-case name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftMasterColumns => "left-master-columns",
            Self::LeftMasterRows => "left-master-rows",
        }
    }

    /// Returns the human-readable name shown in notifications.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LeftMasterColumns => "Left Master Columns",
            Self::LeftMasterRows => "Left Master Rows",
        }
    }

    /// Returns the layout after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::LeftMasterColumns => Self::LeftMasterRows,
            Self::LeftMasterRows => Self::LeftMasterColumns,
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|kind| kind.as_str() == normalized).ok_or_else(|| {
            format!(
                "Invalid layout '{s}'. Expected one of: {}",
                Self::ALL.map(Self::as_str).join(", ")
            )
        })
    }
}

/// Limits a layout keeps its master ratio and capacity within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutLimits {
    /// Smallest master ratio.
    pub ratio_min: f64,
    /// Largest master ratio.
    pub ratio_max: f64,
    /// Amount a ratio shortcut moves the master ratio by.
    pub ratio_step: f64,
    /// Largest master capacity.
    pub capacity_max: usize,
}

impl LayoutLimits {
    /// Clamps a ratio into `[ratio_min, ratio_max]`.
    #[must_use]
    pub fn clamp_ratio(&self, ratio: f64) -> f64 {
        if ratio.is_finite() {
            ratio.clamp(self.ratio_min, self.ratio_max)
        } else {
            self.ratio_min
        }
    }

    /// Clamps a capacity into `[1, capacity_max]`.
    #[must_use]
    pub fn clamp_capacity(&self, capacity: usize) -> usize { capacity.clamp(1, self.capacity_max) }
}

impl Default for LayoutLimits {
    fn default() -> Self { LayoutConfig::default().limits() }
}

/// Master layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Layout new workspaces start with.
    /// Default: "left-master-columns"
    pub default: LayoutKind,

    /// Gap between neighbouring tiles, in pixels.
    /// Default: 10
    pub tile_layout_gap: u32,

    /// Initial share of the area given to the master group (0-1).
    /// Default: 0.6
    pub master_ratio: f64,

    /// Smallest master ratio reachable by resizing or shortcuts.
    /// Default: 0.2
    pub master_ratio_min: f64,

    /// Largest master ratio reachable by resizing or shortcuts.
    /// Default: 0.75
    pub master_ratio_max: f64,

    /// Amount the shift-master shortcuts move the ratio by.
    /// Default: 0.05
    pub master_ratio_step: f64,

    /// Initial number of tiles the master column holds.
    /// Default: 1
    pub master_capacity: u32,

    /// Largest master capacity reachable by shortcuts.
    /// Default: 10
    pub master_capacity_max: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default: LayoutKind::LeftMasterColumns,
            tile_layout_gap: 10,
            master_ratio: 0.6,
            master_ratio_min: 0.2,
            master_ratio_max: 0.75,
            master_ratio_step: 0.05,
            master_capacity: 1,
            master_capacity_max: 10,
        }
    }
}

impl LayoutConfig {
    /// Returns a copy with inconsistent values repaired.
    ///
    /// Bounds are ordered and kept inside `(0, 1)`, the initial ratio and
    /// capacity are clamped into them, and a non-positive step falls back to
    /// the default.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();

        let mut min = finite_or(self.master_ratio_min, defaults.master_ratio_min).clamp(0.01, 0.99);
        let mut max = finite_or(self.master_ratio_max, defaults.master_ratio_max).clamp(0.01, 0.99);
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }

        let step = finite_or(self.master_ratio_step, defaults.master_ratio_step);
        let step = if step > 0.0 { step } else { defaults.master_ratio_step };

        let capacity_max = self.master_capacity_max.max(1);

        Self {
            default: self.default,
            tile_layout_gap: self.tile_layout_gap,
            master_ratio: finite_or(self.master_ratio, defaults.master_ratio).clamp(min, max),
            master_ratio_min: min,
            master_ratio_max: max,
            master_ratio_step: step,
            master_capacity: self.master_capacity.clamp(1, capacity_max),
            master_capacity_max: capacity_max,
        }
    }

    /// Returns the limits layouts enforce.
    #[must_use]
    pub fn limits(&self) -> LayoutLimits {
        let sane = self.sanitized();
        LayoutLimits {
            ratio_min: sane.master_ratio_min,
            ratio_max: sane.master_ratio_max,
            ratio_step: sane.master_ratio_step,
            capacity_max: sane.master_capacity_max as usize,
        }
    }

    /// Returns the gap between tiles in pixels.
    #[must_use]
    pub fn gap(&self) -> f64 { f64::from(self.tile_layout_gap) }
}

const fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
