//! Tiling geometry for Tricol.
//!
//! This module computes tile geometry for master layouts and turns resize
//! gestures back into weights. It does not talk to any window server: the
//! host hands in an ordered tile list and reads the geometry back.
//!
//! # Usage
//!
//! ```
//! use tricol_lib::config::TricolConfig;
//! use tricol_lib::tiling::{Rect, ResizeDelta, Tile, TileId, TilingWorkspace};
//!
//! let frame = Rect::new(0.0, 0.0, 1000.0, 600.0);
//! let mut workspace = TilingWorkspace::new("main", frame, &TricolConfig::default());
//! workspace.push_tile(Tile::new(TileId(1)));
//! workspace.push_tile(Tile::new(TileId(2)));
//! workspace.resize(TileId(2), ResizeDelta::west(20.0));
//!
//! let master = workspace.tile(TileId(1)).unwrap();
//! assert!((master.geometry.width - 575.0).abs() < 1e-9);
//! ```

pub mod layout;
pub mod state;
pub mod workspace;

pub use layout::{
    Gaps, LayoutStrategy, LeftMasterColumns, LeftMasterRows, ShortcutCommand, StrategyState,
};
pub use state::{Axis, Edge, Point, Rect, ResizeDelta, Tile, TileId, TileState};
pub use workspace::TilingWorkspace;
