//! Left master rows layout.
//!
//! A single master sits on the left. Two and three tiles share one stack
//! column; from four tiles on, the stack is laid out as rows of two.
//!
//! ```text
//! ┌──────────┬─────┬─────┐
//! │          │  2  │  3  │
//! │    1     ├─────┼─────┤
//! │          │  4  │  5  │
//! │          ├─────┴─────┤
//! │          │     6     │
//! └──────────┴───────────┘
//! ```
//!
//! Row heights come from the members' `weight` (averaged over the row) and
//! the split inside a row from their `row_width_weight`.

use tracing::{debug, trace};

use super::grouping::{GroupRole, Grouping, Regime};
use super::helpers::{Weights, split_half_weighted, split_weighted};
use super::weights::{Side, adjust_half_weights, adjust_weights, scale_to_group};
use super::{
    LayoutStrategy, ShortcutCommand, StrategyState, WeightField, adjust_group, percent,
    place_group,
};
use crate::config::{LayoutConfig, LayoutKind, LayoutLimits};
use crate::tiling::state::{Axis, Edge, Rect, ResizeDelta, Tile, TileId, TileState};

/// Single master plus a stack of two-tile rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LeftMasterRows {
    master_ratio: f64,
    limits: LayoutLimits,
}

impl LeftMasterRows {
    /// Creates the layout with the initial ratio from `config`.
    #[must_use]
    pub fn new(config: &LayoutConfig) -> Self {
        let config = config.sanitized();
        Self {
            master_ratio: config.master_ratio,
            limits: config.limits(),
        }
    }

    /// Share of the width given to the master.
    #[must_use]
    pub const fn master_ratio(&self) -> f64 { self.master_ratio }

    fn shift_master_ratio(&mut self, area: &Rect, side: Side, delta: f64, gap: f64) {
        let ratio =
            adjust_half_weights(area, self.master_ratio, gap, side, delta, Axis::Horizontal);
        self.master_ratio = self.limits.clamp_ratio(ratio);
    }
}

impl Default for LeftMasterRows {
    fn default() -> Self { Self::new(&LayoutConfig::default()) }
}

/// Height weight of every row: the mean `weight` of its members.
#[allow(clippy::cast_precision_loss)]
fn row_heights(grouping: &Grouping, tiles: &[Tile]) -> Weights {
    grouping
        .rows_iter()
        .map(|row| {
            let members = &tiles[row.range.clone()];
            members.iter().map(|t| t.weight).sum::<f64>() / members.len().max(1) as f64
        })
        .collect()
}

/// Moves the top or bottom seam of row `row`, writing the new height weight
/// to every member of each row.
fn adjust_row_heights(
    grouping: &Grouping,
    tiles: &mut [Tile],
    stack: &Rect,
    row: usize,
    delta: &ResizeDelta,
    gap: f64,
) {
    for edge in [Edge::Leading, Edge::Trailing] {
        let px = delta.along(Axis::Vertical, edge);
        let heights = row_heights(grouping, tiles);
        let Some(shares) = adjust_weights(stack, &heights, gap, row, edge, px, Axis::Vertical)
        else {
            continue;
        };

        for (group, height) in grouping.rows_iter().zip(scale_to_group(&shares)) {
            for tile in &mut tiles[group.range.clone()] {
                tile.weight = height;
            }
        }
    }
}

impl LayoutStrategy for LeftMasterRows {
    fn kind(&self) -> LayoutKind { LayoutKind::LeftMasterRows }

    fn apply(&self, tiles: &mut [Tile], area: &Rect, gap: f64) {
        for tile in tiles.iter_mut() {
            tile.state = TileState::Tiled;
        }

        let grouping = Grouping::rows(tiles.len());
        trace!(regime = ?grouping.regime, tiles = tiles.len(), "applying left master rows");

        match grouping.regime {
            Regime::Empty => {}
            Regime::Single => tiles[0].geometry = *area,
            Regime::Rows => {
                let (master, stack) =
                    split_half_weighted(area, self.master_ratio, gap, Axis::Horizontal);
                tiles[0].geometry = master;

                let heights = row_heights(&grouping, tiles);
                let rows = split_weighted(&stack, &heights, gap, Axis::Vertical);
                for (group, row) in grouping.rows_iter().zip(rows) {
                    let members = &mut tiles[group.range.clone()];
                    place_group(members, &row, gap, Axis::Horizontal, WeightField::RowWidth);
                }
            }
            Regime::MasterStack | Regime::MasterOnly | Regime::ThreeColumn => {
                let (master, stack) =
                    split_half_weighted(area, self.master_ratio, gap, Axis::Horizontal);
                tiles[0].geometry = master;
                place_group(&mut tiles[1..], &stack, gap, Axis::Vertical, WeightField::Stacking);
            }
        }
    }

    fn adjust(
        &mut self,
        area: &Rect,
        tiles: &mut [Tile],
        basis: TileId,
        delta: ResizeDelta,
        gap: f64,
    ) {
        if tiles.len() < 2 {
            debug!(tiles = tiles.len(), "ignoring resize: nothing to resize against");
            return;
        }
        let Some(index) = tiles.iter().position(|tile| tile.id == basis) else {
            debug!(%basis, "ignoring resize: tile is not in this layout");
            return;
        };

        let grouping = Grouping::rows(tiles.len());
        let Some(slot) = grouping.locate(index) else {
            return;
        };
        let (_, stack) = split_half_weighted(area, self.master_ratio, gap, Axis::Horizontal);
        let east = delta.trailing(Axis::Horizontal);
        let west = delta.leading(Axis::Horizontal);

        match slot.role {
            GroupRole::Master => self.shift_master_ratio(area, Side::First, east, gap),
            GroupRole::Row(row) => {
                let rows =
                    split_weighted(&stack, &row_heights(&grouping, tiles), gap, Axis::Vertical);
                // Only the first tile of a row borders the master.
                if slot.position == 0 {
                    self.shift_master_ratio(area, Side::Second, west, gap);
                }

                let members = &mut tiles[grouping.groups[slot.group].range.clone()];
                adjust_group(
                    members,
                    &rows[row],
                    slot.position,
                    &delta,
                    gap,
                    Axis::Horizontal,
                    WeightField::RowWidth,
                );
                adjust_row_heights(&grouping, tiles, &stack, row, &delta, gap);
            }
            GroupRole::Stack | GroupRole::LeftStack | GroupRole::RightStack => {
                self.shift_master_ratio(area, Side::Second, west, gap);

                let members = &mut tiles[grouping.groups[slot.group].range.clone()];
                adjust_group(
                    members,
                    &stack,
                    slot.position,
                    &delta,
                    gap,
                    Axis::Vertical,
                    WeightField::Stacking,
                );
            }
        }
    }

    fn handle_shortcut(&mut self, command: ShortcutCommand) -> bool {
        match command {
            ShortcutCommand::IncreaseMaster | ShortcutCommand::DecreaseMaster => {
                debug!(%command, "left master rows has a fixed single master");
                return false;
            }
            ShortcutCommand::ShiftMasterLeft => {
                self.master_ratio =
                    self.limits.clamp_ratio(self.master_ratio - self.limits.ratio_step);
            }
            ShortcutCommand::ShiftMasterRight => {
                self.master_ratio =
                    self.limits.clamp_ratio(self.master_ratio + self.limits.ratio_step);
            }
        }
        true
    }

    fn clone_box(&self) -> Box<dyn LayoutStrategy> { Box::new(self.clone()) }

    fn describe(&self) -> String {
        format!("{} [ratio: {}]", self.kind().display_name(), percent(self.master_ratio))
    }

    fn state(&self) -> StrategyState {
        StrategyState {
            layout: self.kind(),
            master_ratio: self.master_ratio,
            master_capacity: None,
            stack_ratio: None,
        }
    }
}
