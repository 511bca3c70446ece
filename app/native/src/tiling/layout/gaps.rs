//! Resolved gap values for a workspace.

use crate::config::TricolConfig;
use crate::tiling::state::Rect;

/// Gap values in pixels.
///
/// `inner` is handed to the layout strategy as the seam gap; the outer gaps
/// shrink the screen frame before the strategy sees it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gaps {
    /// Gap between neighbouring tiles.
    pub inner: f64,
    /// Outer gap from screen top edge.
    pub outer_top: f64,
    /// Outer gap from screen right edge.
    pub outer_right: f64,
    /// Outer gap from screen bottom edge.
    pub outer_bottom: f64,
    /// Outer gap from screen left edge.
    pub outer_left: f64,
}

impl Gaps {
    /// Creates gaps with uniform inner and outer values.
    #[must_use]
    pub const fn uniform(inner: f64, outer: f64) -> Self {
        Self {
            inner,
            outer_top: outer,
            outer_right: outer,
            outer_bottom: outer,
            outer_left: outer,
        }
    }

    /// Resolves gaps from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &TricolConfig) -> Self {
        let (top, right, bottom, left) = config.gaps.outer.as_sides();
        Self {
            inner: config.layout.gap(),
            outer_top: f64::from(top),
            outer_right: f64::from(right),
            outer_bottom: f64::from(bottom),
            outer_left: f64::from(left),
        }
    }

    /// Returns true if all gaps are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.inner == 0.0
            && self.outer_top == 0.0
            && self.outer_right == 0.0
            && self.outer_bottom == 0.0
            && self.outer_left == 0.0
    }

    /// Applies outer gaps to a screen frame, returning the usable area.
    ///
    /// Gaps larger than the frame leave an empty area at the inset origin.
    #[must_use]
    pub fn apply_outer(&self, frame: &Rect) -> Rect {
        Rect::new(
            frame.x + self.outer_left,
            frame.y + self.outer_top,
            (frame.width - self.outer_left - self.outer_right).max(0.0),
            (frame.height - self.outer_top - self.outer_bottom).max(0.0),
        )
    }
}
