//! State types for the tiling layouts.
//!
//! This module defines the geometric value types and the tile record that
//! layout strategies read and write.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometric Types
// ============================================================================

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// The axis a rectangle is divided along.
///
/// `Horizontal` lays partitions out left to right (the split changes `x` and
/// `width`), `Vertical` lays them out top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Partitions side by side.
    Horizontal,
    /// Partitions stacked.
    Vertical,
}

impl Axis {
    /// Returns the other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A rectangle defined by origin point and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin (top-left corner).
    pub x: f64,
    /// Y coordinate of the origin (top-left corner).
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the origin point of the rectangle.
    #[must_use]
    pub const fn origin(&self) -> Point { Point { x: self.x, y: self.y } }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Returns whether a point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Returns the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }

    /// Returns the coordinate where the rectangle starts along `axis`.
    #[must_use]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Returns the size of the rectangle along `axis`.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Returns a copy with the span along `axis` replaced.
    ///
    /// The cross-axis origin and size are kept.
    #[must_use]
    pub const fn with_span(&self, axis: Axis, start: f64, extent: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(start, self.y, extent, self.height),
            Axis::Vertical => Self::new(self.x, start, self.width, extent),
        }
    }
}

// ============================================================================
// Resize Gestures
// ============================================================================

/// Which end of a partition an edge sits on along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    /// The edge nearest the axis origin (west or north).
    Leading,
    /// The edge farthest from the axis origin (east or south).
    Trailing,
}

/// Edge displacement produced by a user dragging one tile's border.
///
/// Each value is the number of pixels the edge moved outward (positive) or
/// inward (negative).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeDelta {
    /// Top edge.
    pub north: f64,
    /// Bottom edge.
    pub south: f64,
    /// Right edge.
    pub east: f64,
    /// Left edge.
    pub west: f64,
}

impl ResizeDelta {
    /// Creates a delta from all four edges.
    #[must_use]
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self { north, south, east, west }
    }

    /// Delta that only moves the top edge.
    #[must_use]
    pub const fn north(px: f64) -> Self { Self::new(px, 0.0, 0.0, 0.0) }

    /// Delta that only moves the bottom edge.
    #[must_use]
    pub const fn south(px: f64) -> Self { Self::new(0.0, px, 0.0, 0.0) }

    /// Delta that only moves the right edge.
    #[must_use]
    pub const fn east(px: f64) -> Self { Self::new(0.0, 0.0, px, 0.0) }

    /// Delta that only moves the left edge.
    #[must_use]
    pub const fn west(px: f64) -> Self { Self::new(0.0, 0.0, 0.0, px) }

    /// Returns the displacement of the given edge along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis, edge: Edge) -> f64 {
        match (axis, edge) {
            (Axis::Horizontal, Edge::Leading) => self.west,
            (Axis::Horizontal, Edge::Trailing) => self.east,
            (Axis::Vertical, Edge::Leading) => self.north,
            (Axis::Vertical, Edge::Trailing) => self.south,
        }
    }

    /// Displacement of the west or north edge.
    #[must_use]
    pub const fn leading(&self, axis: Axis) -> f64 { self.along(axis, Edge::Leading) }

    /// Displacement of the east or south edge.
    #[must_use]
    pub const fn trailing(&self, axis: Axis) -> f64 { self.along(axis, Edge::Trailing) }

    /// Returns true if no edge moved.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.north == 0.0 && self.south == 0.0 && self.east == 0.0 && self.west == 0.0
    }

    /// Combines two deltas edge by edge.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            north: self.north + other.north,
            south: self.south + other.south,
            east: self.east + other.east,
            west: self.west + other.west,
        }
    }
}

// ============================================================================
// Tiles
// ============================================================================

/// Opaque identity of a tile, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Whether a tile currently participates in tiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileState {
    /// Positioned by the user; layouts have not touched it yet.
    #[default]
    Floating,
    /// Positioned by the active layout.
    Tiled,
}

/// A managed rectangle owned by the host.
///
/// Layouts only read and write `weight`, `row_width_weight`, `geometry` and
/// `state`; they never create or drop tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Host-assigned identity.
    pub id: TileId,
    /// Share of the group's extent along its stacking axis, relative to
    /// siblings. The row layout reads it as the row-height weight.
    pub weight: f64,
    /// Share of the row's width in the row layout.
    pub row_width_weight: f64,
    /// Last geometry written by a layout.
    pub geometry: Rect,
    /// Tiling state.
    pub state: TileState,
}

impl Tile {
    /// Creates a floating tile with neutral weights.
    #[must_use]
    pub const fn new(id: TileId) -> Self {
        Self {
            id,
            weight: 1.0,
            row_width_weight: 1.0,
            geometry: Rect::new(0.0, 0.0, 0.0, 0.0),
            state: TileState::Floating,
        }
    }

    /// Creates a tile with the given stacking weight.
    #[must_use]
    pub const fn with_weight(id: TileId, weight: f64) -> Self {
        let mut tile = Self::new(id);
        tile.weight = weight;
        tile
    }
}

/// Creates `count` tiles with ids `1..=count`.
#[must_use]
pub fn tiles_with_ids(count: u32) -> Vec<Tile> {
    (1..=count).map(|id| Tile::new(TileId(id))).collect()
}

// ============================================================================
// Tests
// ============================================================================
