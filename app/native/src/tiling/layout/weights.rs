//! Pixel-delta to weight conversion.
//!
//! Tiles store unit-less weights, but users drag borders in pixels. The
//! adjusters below read the pixel extent a weight currently produces (the
//! same math as [`split_weighted`](super::helpers::split_weighted)), move the
//! dragged border by the delta and convert the result back into weights. Only
//! the two partitions sharing the dragged border change, and their combined
//! extent is conserved, so re-applying the layout puts the border exactly
//! where the user left it.

use super::helpers::{Weights, proportions, seam_loss};
use crate::tiling::state::{Axis, Edge, Rect};

/// Smallest proportion a partition may be resized down to.
pub const WEIGHT_EPSILON: f64 = 0.001;

/// One side of a two-way split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The part nearest the axis origin (the one `ratio` describes).
    First,
    /// The remaining part.
    Second,
}

/// Recomputes a weight vector after one partition's border moved.
///
/// `edge` names the border of `target` that moved and `delta` is how far it
/// moved outward in pixels (negative shrinks the partition). The neighbour on
/// that side absorbs the opposite change.
///
/// Returns proportions that sum to 1, or `None` when nothing changes: zero
/// delta, no neighbour on that side, an out-of-range target, or an area with
/// no extent along `axis`.
#[must_use]
pub fn adjust_weights(
    area: &Rect,
    weights: &[f64],
    gap: f64,
    target: usize,
    edge: Edge,
    delta: f64,
    axis: Axis,
) -> Option<Weights> {
    let count = weights.len();
    let extent = area.extent(axis);
    if delta == 0.0 || !delta.is_finite() || target >= count || extent <= 0.0 {
        return None;
    }

    let neighbour = match edge {
        Edge::Leading => target.checked_sub(1)?,
        Edge::Trailing => Some(target + 1).filter(|&i| i < count)?,
    };

    let mut shares = proportions(weights);

    // Pixel extent of the target as laid out, then the dragged extent.
    let loss = seam_loss(target, count, gap);
    let current_px = shares[target].mul_add(extent, -loss);
    let dragged_px = current_px + delta;

    let pair = shares[target] + shares[neighbour];
    if pair < 2.0 * WEIGHT_EPSILON {
        return None;
    }

    let target_share =
        ((dragged_px + loss) / extent).clamp(WEIGHT_EPSILON, pair - WEIGHT_EPSILON);
    shares[target] = target_share;
    shares[neighbour] = pair - target_share;

    Some(shares)
}

/// Recomputes a binary split ratio after its seam moved.
///
/// `side` names the part whose outer border is the seam; `delta` is how far
/// that part grew in pixels. The result stays within
/// `[WEIGHT_EPSILON, 1 - WEIGHT_EPSILON]`.
#[must_use]
pub fn adjust_half_weights(
    area: &Rect,
    ratio: f64,
    gap: f64,
    side: Side,
    delta: f64,
    axis: Axis,
) -> f64 {
    let extent = area.extent(axis);
    if delta == 0.0 || !delta.is_finite() || extent <= 0.0 {
        return ratio;
    }

    let loss = seam_loss(0, 2, gap);
    let share = match side {
        Side::First => ratio,
        Side::Second => 1.0 - ratio,
    };
    let current_px = share.mul_add(extent, -loss);
    let new_share =
        ((current_px + delta + loss) / extent).clamp(WEIGHT_EPSILON, 1.0 - WEIGHT_EPSILON);

    match side {
        Side::First => new_share,
        Side::Second => 1.0 - new_share,
    }
}

/// Scales proportions back up to per-tile weights.
///
/// Group members store weights averaging 1, so a group of `n` tiles keeps
/// weights that sum to `n`. No weight drops below [`WEIGHT_EPSILON`].
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn scale_to_group(shares: &[f64]) -> Weights {
    let scale = shares.len() as f64;
    shares.iter().map(|share| (share * scale).max(WEIGHT_EPSILON)).collect()
}
