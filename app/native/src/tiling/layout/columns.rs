//! Left master columns layout.
//!
//! The master group fills the left column. Once it holds `master_capacity`
//! tiles, the rest go into a stack column; past one extra tile the stack
//! splits into a left and a right column.
//!
//! Dragging the left stack's west edge moves the master seam and leaves the
//! right stack where it is, so the left stack absorbs the whole drag.
//!
//! ```text
//! ┌──────────┬──────┬──────┐
//! │          │  2   │      │
//! │    1     ├──────┤  4   │
//! │          │  3   │      │
//! └──────────┴──────┴──────┘
//!   master     left   right
//!  |<ratio>|   |<stack ratio>|
//! ```

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::grouping::{GroupRole, Grouping, Regime};
use super::helpers::{seam_loss, split_half_weighted};
use super::weights::{Side, adjust_half_weights};
use super::{
    LayoutStrategy, ShortcutCommand, StrategyState, WeightField, adjust_group, percent,
    place_group,
};
use crate::config::{LayoutConfig, LayoutKind, LayoutLimits};
use crate::tiling::state::{Axis, Rect, ResizeDelta, Tile, TileId, TileState};

/// Default split between the left and right stack columns.
const DEFAULT_STACK_RATIO: f64 = 0.5;

/// Master column plus up to two stack columns.
#[derive(Debug, Clone, PartialEq)]
pub struct LeftMasterColumns {
    master_ratio: f64,
    master_capacity: usize,
    stack_ratio: f64,
    limits: LayoutLimits,
}

impl LeftMasterColumns {
    /// Creates the layout with the initial ratio and capacity from `config`.
    #[must_use]
    pub fn new(config: &LayoutConfig) -> Self {
        let config = config.sanitized();
        Self {
            master_ratio: config.master_ratio,
            master_capacity: config.master_capacity as usize,
            stack_ratio: DEFAULT_STACK_RATIO,
            limits: config.limits(),
        }
    }

    /// Share of the width given to the master column.
    #[must_use]
    pub const fn master_ratio(&self) -> f64 { self.master_ratio }

    /// Number of tiles the master column holds before stacks appear.
    #[must_use]
    pub const fn master_capacity(&self) -> usize { self.master_capacity }

    /// Share of the stack width given to the left stack column.
    #[must_use]
    pub const fn stack_ratio(&self) -> f64 { self.stack_ratio }

    /// Returns the column of every group, in group order.
    fn columns(&self, grouping: &Grouping, area: &Rect, gap: f64) -> SmallVec<[Rect; 4]> {
        let mut columns = SmallVec::new();
        match grouping.regime {
            Regime::Empty => {}
            Regime::Single | Regime::MasterOnly => columns.push(*area),
            Regime::MasterStack | Regime::Rows => {
                let (master, stack) =
                    split_half_weighted(area, self.master_ratio, gap, Axis::Horizontal);
                columns.push(master);
                columns.push(stack);
            }
            Regime::ThreeColumn => {
                let (master, stack) =
                    split_half_weighted(area, self.master_ratio, gap, Axis::Horizontal);
                let (left, right) =
                    split_half_weighted(&stack, self.stack_ratio, gap, Axis::Horizontal);
                columns.push(master);
                columns.push(left);
                columns.push(right);
            }
        }
        columns
    }

    fn shift_master_ratio(&mut self, area: &Rect, side: Side, delta: f64, gap: f64) {
        let ratio =
            adjust_half_weights(area, self.master_ratio, gap, side, delta, Axis::Horizontal);
        self.master_ratio = self.limits.clamp_ratio(ratio);
    }

    fn shift_stack_ratio(&mut self, stack: &Rect, side: Side, delta: f64, gap: f64) {
        let ratio =
            adjust_half_weights(stack, self.stack_ratio, gap, side, delta, Axis::Horizontal);
        self.stack_ratio = self.limits.clamp_ratio(ratio);
    }

    /// Re-derives the stack ratio so the right stack keeps `width` inside the
    /// stack area left by the current master ratio.
    fn pin_right_stack(&mut self, area: &Rect, width: f64, gap: f64) {
        let (_, stack) = split_half_weighted(area, self.master_ratio, gap, Axis::Horizontal);
        if stack.width <= 0.0 {
            return;
        }
        let right_share = (width + seam_loss(1, 2, gap)) / stack.width;
        self.stack_ratio = self.limits.clamp_ratio(1.0 - right_share);
    }
}

/// Area spanned by the left and right stack columns.
fn stack_area(columns: &[Rect]) -> Rect {
    let (left, right) = (columns[1], columns[2]);
    left.with_span(Axis::Horizontal, left.x, right.x + right.width - left.x)
}

impl Default for LeftMasterColumns {
    fn default() -> Self { Self::new(&LayoutConfig::default()) }
}

impl LayoutStrategy for LeftMasterColumns {
    fn kind(&self) -> LayoutKind { LayoutKind::LeftMasterColumns }

    fn apply(&self, tiles: &mut [Tile], area: &Rect, gap: f64) {
        for tile in tiles.iter_mut() {
            tile.state = TileState::Tiled;
        }

        let grouping = Grouping::columns(tiles.len(), self.master_capacity);
        trace!(regime = ?grouping.regime, tiles = tiles.len(), "applying left master columns");

        let columns = self.columns(&grouping, area, gap);
        for (group, column) in grouping.groups.iter().zip(columns) {
            let members = &mut tiles[group.range.clone()];
            place_group(members, &column, gap, Axis::Vertical, WeightField::Stacking);
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

        let grouping = Grouping::columns(tiles.len(), self.master_capacity);
        let Some(slot) = grouping.locate(index) else {
            return;
        };
        let columns = self.columns(&grouping, area, gap);

        // Column seams first, then the seams inside the basis's column.
        let east = delta.trailing(Axis::Horizontal);
        let west = delta.leading(Axis::Horizontal);
        match (grouping.regime, slot.role) {
            (Regime::MasterStack | Regime::ThreeColumn, GroupRole::Master) => {
                self.shift_master_ratio(area, Side::First, east, gap);
            }
            (Regime::MasterStack, GroupRole::Stack) => {
                self.shift_master_ratio(area, Side::Second, west, gap);
            }
            (Regime::ThreeColumn, GroupRole::LeftStack) => {
                if west != 0.0 {
                    self.shift_master_ratio(area, Side::Second, west, gap);
                    self.pin_right_stack(area, columns[2].width, gap);
                }
                let stack = stack_area(&self.columns(&grouping, area, gap));
                self.shift_stack_ratio(&stack, Side::First, east, gap);
            }
            (Regime::ThreeColumn, GroupRole::RightStack) => {
                let stack = stack_area(&columns);
                self.shift_stack_ratio(&stack, Side::Second, west, gap);
            }
            _ => {}
        }

        let group = &grouping.groups[slot.group];
        let members = &mut tiles[group.range.clone()];
        adjust_group(
            members,
            &columns[slot.group],
            slot.position,
            &delta,
            gap,
            Axis::Vertical,
            WeightField::Stacking,
        );
    }

    fn handle_shortcut(&mut self, command: ShortcutCommand) -> bool {
        match command {
            ShortcutCommand::IncreaseMaster => {
                self.master_capacity = self.limits.clamp_capacity(self.master_capacity + 1);
            }
            ShortcutCommand::DecreaseMaster => {
                self.master_capacity =
                    self.limits.clamp_capacity(self.master_capacity.saturating_sub(1));
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
        format!(
            "{} [master: {}, ratio: {}]",
            self.kind().display_name(),
            self.master_capacity,
            percent(self.master_ratio)
        )
    }

    fn state(&self) -> StrategyState {
        StrategyState {
            layout: self.kind(),
            master_ratio: self.master_ratio,
            master_capacity: Some(self.master_capacity),
            stack_ratio: Some(self.stack_ratio),
        }
    }
}
