//! A single tiled workspace.
//!
//! The workspace is the host side of the layout contract: it owns the ordered
//! tile list, the screen frame and the gaps, and drives the active strategy.
//! Every mutation that changes geometry re-arranges immediately, so `tiles()`
//! always reflects the current layout.
//!
//! # Layout switching
//!
//! Switching layouts replaces the strategy but keeps every tile's weights.
//! They only mean something to the layout that wrote them, so a freshly
//! selected layout may size tiles unevenly until the user resizes again.

use tracing::debug;

use super::layout::{Gaps, LayoutStrategy, ShortcutCommand, StrategyState};
use super::state::{Rect, ResizeDelta, Tile, TileId};
use crate::config::{LayoutConfig, LayoutKind, TricolConfig};

/// Ordered tiles laid out by one strategy inside one screen frame.
#[derive(Debug, Clone)]
pub struct TilingWorkspace {
    name: String,
    frame: Rect,
    gaps: Gaps,
    layout_config: LayoutConfig,
    strategy: Box<dyn LayoutStrategy>,
    tiles: Vec<Tile>,
}

impl TilingWorkspace {
    /// Creates an empty workspace using the configured default layout.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the workspace
    /// * `frame` - Screen frame the workspace tiles within, before outer gaps
    /// * `config` - Configuration supplying the layout, limits and gaps
    #[must_use]
    pub fn new(name: impl Into<String>, frame: Rect, config: &TricolConfig) -> Self {
        let layout_config = config.layout.sanitized();
        Self {
            name: name.into(),
            frame,
            gaps: Gaps::from_config(config),
            strategy: layout_config.default.create(&layout_config),
            layout_config,
            tiles: Vec::new(),
        }
    }

    /// Returns the workspace name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the screen frame, before outer gaps.
    #[must_use]
    pub const fn frame(&self) -> Rect { self.frame }

    /// Returns the gaps in use.
    #[must_use]
    pub const fn gaps(&self) -> Gaps { self.gaps }

    /// Returns the area handed to the strategy.
    #[must_use]
    pub fn usable_area(&self) -> Rect { self.gaps.apply_outer(&self.frame) }

    /// Returns the active layout.
    #[must_use]
    pub fn layout(&self) -> LayoutKind { self.strategy.kind() }

    /// Returns the active strategy.
    #[must_use]
    pub fn strategy(&self) -> &dyn LayoutStrategy { self.strategy.as_ref() }

    /// Returns the scalar state of the active strategy.
    #[must_use]
    pub fn state(&self) -> StrategyState { self.strategy.state() }

    /// Returns a human-readable summary of the active strategy.
    #[must_use]
    pub fn describe(&self) -> String { self.strategy.describe() }

    /// Returns the tiles in layout order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] { &self.tiles }

    /// Returns the tile with the given id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> { self.tiles.iter().find(|t| t.id == id) }

    /// Appends a tile and re-arranges.
    ///
    /// Returns `false` and leaves the workspace unchanged if a tile with the
    /// same id is already present.
    pub fn push_tile(&mut self, tile: Tile) -> bool {
        if self.tile(tile.id).is_some() {
            debug!(id = %tile.id, workspace = %self.name, "tile already in workspace");
            return false;
        }
        self.tiles.push(tile);
        self.arrange();
        true
    }

    /// Removes a tile and re-arranges the rest.
    pub fn remove_tile(&mut self, id: TileId) -> Option<Tile> {
        let index = self.tiles.iter().position(|t| t.id == id)?;
        let tile = self.tiles.remove(index);
        self.arrange();
        Some(tile)
    }

    /// Moves the screen frame and re-arranges.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.arrange();
    }

    /// Replaces the gaps and re-arranges.
    pub fn set_gaps(&mut self, gaps: Gaps) {
        self.gaps = gaps;
        self.arrange();
    }

    /// Writes geometry for every tile using the active strategy.
    pub fn arrange(&mut self) {
        let area = self.usable_area();
        self.strategy.apply(&mut self.tiles, &area, self.gaps.inner);
    }

    /// Applies a resize gesture on `id` and re-arranges.
    ///
    /// Returns `false` if the tile is not in this workspace.
    pub fn resize(&mut self, id: TileId, delta: ResizeDelta) -> bool {
        if self.tile(id).is_none() {
            debug!(%id, workspace = %self.name, "resize for unknown tile");
            return false;
        }
        let area = self.usable_area();
        self.strategy.adjust(&area, &mut self.tiles, id, delta, self.gaps.inner);
        self.arrange();
        true
    }

    /// Forwards a shortcut to the strategy, re-arranging if it was handled.
    pub fn shortcut(&mut self, command: ShortcutCommand) -> bool {
        let handled = self.strategy.handle_shortcut(command);
        if handled {
            self.arrange();
        } else {
            debug!(%command, layout = %self.layout(), "shortcut not handled");
        }
        handled
    }

    /// Switches to a fresh strategy of `kind` and re-arranges.
    ///
    /// Tile weights are kept.
    pub fn set_layout(&mut self, kind: LayoutKind) {
        debug!(from = %self.layout(), to = %kind, workspace = %self.name, "switching layout");
        self.strategy = kind.create(&self.layout_config);
        self.arrange();
    }

    /// Switches to the next layout in cycling order.
    pub fn cycle_layout(&mut self) { self.set_layout(self.layout().next()); }

    /// Returns an independent copy of the workspace, strategy state included.
    #[must_use]
    pub fn snapshot(&self) -> Self { self.clone() }
}
