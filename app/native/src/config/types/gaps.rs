//! Gap configuration types.
//!
//! Only the outer gaps live here; the gap between tiles is the layout's
//! `tileLayoutGap`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A gap value that can be uniform, per-axis, or per-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum GapValue {
    /// Same value for all sides.
    Uniform(u32),
    /// Different values per axis.
    PerAxis {
        /// Left and right gap.
        horizontal: u32,
        /// Top and bottom gap.
        vertical: u32,
    },
    /// Different values per side.
    PerSide {
        /// Top gap.
        top: u32,
        /// Right gap.
        right: u32,
        /// Bottom gap.
        bottom: u32,
        /// Left gap.
        left: u32,
    },
}

impl Default for GapValue {
    fn default() -> Self { Self::Uniform(0) }
}

impl GapValue {
    /// Returns the gap values as (top, right, bottom, left).
    #[must_use]
    pub const fn as_sides(&self) -> (u32, u32, u32, u32) {
        match self {
            Self::Uniform(v) => (*v, *v, *v, *v),
            Self::PerAxis { horizontal, vertical } => {
                (*vertical, *horizontal, *vertical, *horizontal)
            }
            Self::PerSide { top, right, bottom, left } => (*top, *right, *bottom, *left),
        }
    }
}

/// Gaps between the tiled area and the screen edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GapsConfig {
    /// Outer gaps from screen edges.
    /// Default: 0
    pub outer: GapValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_value_as_sides() {
        assert_eq!(GapValue::Uniform(8).as_sides(), (8, 8, 8, 8));

        let per_axis = GapValue::PerAxis { horizontal: 20, vertical: 30 };
        assert_eq!(per_axis.as_sides(), (30, 20, 30, 20));

        let per_side = GapValue::PerSide { top: 1, right: 2, bottom: 3, left: 4 };
        assert_eq!(per_side.as_sides(), (1, 2, 3, 4));
    }

    #[test]
    fn test_gaps_config_deserialize_uniform() {
        let config: GapsConfig = serde_json::from_str(r#"{ "outer": 12 }"#).unwrap();
        assert_eq!(config.outer, GapValue::Uniform(12));
    }

    #[test]
    fn test_gaps_config_deserialize_per_side() {
        let json = r#"{ "outer": { "top": 40, "right": 8, "bottom": 8, "left": 8 } }"#;
        let config: GapsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.outer.as_sides(), (40, 8, 8, 8));
    }

    #[test]
    fn test_gaps_config_default() {
        assert_eq!(GapsConfig::default().outer.as_sides(), (0, 0, 0, 0));
    }
}
