//! Shared types for CLI commands.
//!
//! Compound values (`--area`, `--resize`) are taken as plain strings by clap
//! and parsed here, so a malformed value surfaces as an invalid-argument error
//! with a message naming the expected format.

use std::fmt;
use std::str::FromStr;

use crate::config::LayoutKind;
use crate::tiling::{Rect, ResizeDelta, TileId};

/// Layout type (CLI representation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLayoutType {
    /// Master column on the left, one or two stack columns on the right.
    LeftMasterColumns,
    /// Master column on the left, stack arranged in rows of two.
    LeftMasterRows,
}

impl From<CliLayoutType> for LayoutKind {
    fn from(value: CliLayoutType) -> Self {
        match value {
            CliLayoutType::LeftMasterColumns => Self::LeftMasterColumns,
            CliLayoutType::LeftMasterRows => Self::LeftMasterRows,
        }
    }
}

/// Screen area given as `WIDTHxHEIGHT` or `WIDTHxHEIGHT+X+Y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSpec(pub Rect);

impl FromStr for AreaSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid area '{s}'. Expected WIDTHxHEIGHT or WIDTHxHEIGHT+X+Y");

        let mut parts = s.trim().split('+');
        let size = parts.next().ok_or_else(invalid)?;
        let (width, height) = size.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = parse_length(width).ok_or_else(invalid)?;
        let height = parse_length(height).ok_or_else(invalid)?;

        let (x, y) = match (parts.next(), parts.next(), parts.next()) {
            (None, None, None) => (0.0, 0.0),
            (Some(x), Some(y), None) => (
                x.trim().parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(invalid)?,
                y.trim().parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        };

        Ok(Self(Rect::new(x, y, width, height)))
    }
}

fn parse_length(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

/// Screen direction a tile edge is dragged towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the kebab-case name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Builds a gesture that moves this edge by `px`.
    #[must_use]
    pub const fn delta(self, px: f64) -> ResizeDelta {
        match self {
            Self::North => ResizeDelta::north(px),
            Self::South => ResizeDelta::south(px),
            Self::East => ResizeDelta::east(px),
            Self::West => ResizeDelta::west(px),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|dir| dir.as_str() == normalized).ok_or_else(|| {
            format!(
                "Invalid edge '{s}'. Expected one of: {}",
                Self::ALL.map(Self::as_str).join(", ")
            )
        })
    }
}

/// A resize gesture given as `TILE:EDGE:PX`.
///
/// `TILE` is the 1-based position of the tile, which is also its id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSpec {
    pub tile: TileId,
    pub direction: Direction,
    pub px: f64,
}

impl ResizeSpec {
    /// Returns the resize gesture to replay.
    #[must_use]
    pub const fn delta(&self) -> ResizeDelta { self.direction.delta(self.px) }
}

impl FromStr for ResizeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid resize '{s}'. Expected TILE:EDGE:PX, e.g. 2:west:20");

        let mut parts = s.trim().splitn(3, ':');
        let (Some(tile), Some(edge), Some(px)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let tile = tile.trim().parse::<u32>().ok().filter(|id| *id > 0).ok_or_else(invalid)?;
        let direction = edge.parse::<Direction>()?;
        let px = px.trim().parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(invalid)?;

        Ok(Self { tile: TileId(tile), direction, px })
    }
}
