//! Layout strategies for the tiling engine.
//!
//! A strategy turns an ordered tile list and an area into per-tile geometry
//! (`apply`) and turns a resize gesture on one tile into weight and ratio
//! updates (`adjust`). Strategies never own tiles: the host passes a mutable
//! slice on every call and re-applies after each adjustment.
//!
//! # Supported Layouts
//!
//! - **Left Master Columns**: master column on the left, then one or two
//!   stack columns once the master capacity is exceeded
//! - **Left Master Rows**: single master on the left, the stack laid out in
//!   rows of two
//!
//! # Building blocks
//!
//! - [`helpers`]: weighted splitting of a rectangle along one axis
//! - [`weights`]: conversion of pixel deltas back into weights
//! - [`grouping`]: which tiles are laid out together for a given tile count

mod columns;
mod gaps;
pub mod grouping;
pub mod helpers;
mod rows;
pub mod weights;

use std::fmt;
use std::str::FromStr;

pub use columns::LeftMasterColumns;
pub use gaps::Gaps;
pub use rows::LeftMasterRows;
use serde::{Deserialize, Serialize};

use self::helpers::{Weights, split_weighted};
use self::weights::{adjust_weights, scale_to_group};
use crate::config::{LayoutConfig, LayoutKind};
use crate::tiling::state::{Axis, Edge, Rect, ResizeDelta, Tile, TileId};

// ============================================================================
// Shortcut Commands
// ============================================================================

/// Discrete commands a layout may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutCommand {
    /// Let the master group hold one more tile.
    IncreaseMaster,
    /// Let the master group hold one fewer tile.
    DecreaseMaster,
    /// Shrink the master share by one step.
    ShiftMasterLeft,
    /// Grow the master share by one step.
    ShiftMasterRight,
}

impl ShortcutCommand {
    /// All commands.
    pub const ALL: [Self; 4] = [
        Self::IncreaseMaster,
        Self::DecreaseMaster,
        Self::ShiftMasterLeft,
        Self::ShiftMasterRight,
    ];

    /// Returns the kebab-case name of the command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncreaseMaster => "increase-master",
            Self::DecreaseMaster => "decrease-master",
            Self::ShiftMasterLeft => "shift-master-left",
            Self::ShiftMasterRight => "shift-master-right",
        }
    }
}

impl fmt::Display for ShortcutCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ShortcutCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|cmd| cmd.as_str() == normalized).ok_or_else(|| {
            format!(
                "Invalid shortcut '{s}'. Expected one of: {}",
                Self::ALL.map(Self::as_str).join(", ")
            )
        })
    }
}

// ============================================================================
// Strategy Contract
// ============================================================================

/// Scalar state of a strategy, for display and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyState {
    /// Which layout produced this state.
    pub layout: LayoutKind,
    /// Share of the area given to the master group.
    pub master_ratio: f64,
    /// Tiles the master group holds, if the layout has a capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_capacity: Option<usize>,
    /// Split between the two stack columns, if the layout has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_ratio: Option<f64>,
}

/// A layout algorithm with its own ratio and capacity state.
///
/// Calls for one instance are serialized by the host. `gap` is the seam gap
/// between neighbouring tiles; outer gaps are already removed from `area`.
pub trait LayoutStrategy: fmt::Debug + Send {
    /// The layout this strategy implements.
    fn kind(&self) -> LayoutKind;

    /// Writes geometry for every tile and marks it tiled.
    fn apply(&self, tiles: &mut [Tile], area: &Rect, gap: f64);

    /// Updates weights and ratios after the user dragged an edge of `basis`.
    ///
    /// Geometry is not touched; call [`apply`](Self::apply) afterwards. Unknown
    /// tiles and lists shorter than two tiles are ignored.
    fn adjust(
        &mut self,
        area: &Rect,
        tiles: &mut [Tile],
        basis: TileId,
        delta: ResizeDelta,
        gap: f64,
    );

    /// Handles a shortcut. Returns `false` if this layout does not support it.
    fn handle_shortcut(&mut self, command: ShortcutCommand) -> bool;

    /// Returns an independent copy of this strategy.
    fn clone_box(&self) -> Box<dyn LayoutStrategy>;

    /// Returns a human-readable summary of the current state.
    fn describe(&self) -> String;

    /// Returns the scalar state of the strategy.
    fn state(&self) -> StrategyState;
}

impl Clone for Box<dyn LayoutStrategy> {
    fn clone(&self) -> Self { self.clone_box() }
}

impl LayoutKind {
    /// Creates a strategy of this kind seeded from `config`.
    #[must_use]
    pub fn create(self, config: &LayoutConfig) -> Box<dyn LayoutStrategy> {
        match self {
            Self::LeftMasterColumns => Box::new(LeftMasterColumns::new(config)),
            Self::LeftMasterRows => Box::new(LeftMasterRows::new(config)),
        }
    }
}

// ============================================================================
// Group Helpers
// ============================================================================

/// Which tile weight a group is sized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeightField {
    /// `Tile::weight`: share along the group's stacking axis.
    Stacking,
    /// `Tile::row_width_weight`: share of a row's width.
    RowWidth,
}

impl WeightField {
    const fn get(self, tile: &Tile) -> f64 {
        match self {
            Self::Stacking => tile.weight,
            Self::RowWidth => tile.row_width_weight,
        }
    }

    const fn set(self, tile: &mut Tile, value: f64) {
        match self {
            Self::Stacking => tile.weight = value,
            Self::RowWidth => tile.row_width_weight = value,
        }
    }

    fn collect(self, tiles: &[Tile]) -> Weights { tiles.iter().map(|t| self.get(t)).collect() }
}

/// Lays `members` out along `axis` inside `area`, sized by `field`.
fn place_group(members: &mut [Tile], area: &Rect, gap: f64, axis: Axis, field: WeightField) {
    let parts = split_weighted(area, &field.collect(members), gap, axis);
    for (tile, rect) in members.iter_mut().zip(parts) {
        tile.geometry = rect;
    }
}

/// Applies the leading and trailing components of `delta` along `axis` to
/// the member at `position`.
fn adjust_group(
    members: &mut [Tile],
    area: &Rect,
    position: usize,
    delta: &ResizeDelta,
    gap: f64,
    axis: Axis,
    field: WeightField,
) {
    for edge in [Edge::Leading, Edge::Trailing] {
        let px = delta.along(axis, edge);
        let weights = field.collect(members);
        let Some(shares) = adjust_weights(area, &weights, gap, position, edge, px, axis) else {
            continue;
        };
        for (tile, weight) in members.iter_mut().zip(scale_to_group(&shares)) {
            field.set(tile, weight);
        }
    }
}

/// Formats a ratio as a whole percentage.
fn percent(ratio: f64) -> String { format!("{:.0}%", ratio * 100.0) }
