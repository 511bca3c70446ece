//! Weighted area partitioning.
//!
//! Every layout is built from these two splits. A rectangle is divided along
//! one axis into consecutive parts whose extents follow a weight vector, with
//! a gap centered on every internal seam:
//!
//! ```text
//!   weights [2, 1, 1], gap g
//!   ┌──────────────┐ ┌──────┐ ┌──────┐
//!   │      0       │g│  1   │g│  2   │
//!   └──────────────┘ └──────┘ └──────┘
//!   ^ cut at 0     ^ cut at 1/2  ^ cut at 3/4
//! ```
//!
//! The cut points depend only on the weights; the gap eats `g / 2` on each
//! side of a cut. The edge parts therefore lose `g / 2` and the inner parts
//! lose `g`, so the extents always add up to the area's extent minus
//! `(n - 1) * g`.

use smallvec::SmallVec;

use crate::tiling::state::{Axis, Rect};

/// Inline capacity for partition results.
///
/// Layout groups rarely hold more than a handful of tiles.
pub const PARTITION_INLINE_CAP: usize = 8;

/// Rectangles produced by a split, in axis order.
pub type Partitions = SmallVec<[Rect; PARTITION_INLINE_CAP]>;

/// Weight vectors, in axis order.
pub type Weights = SmallVec<[f64; PARTITION_INLINE_CAP]>;

/// Returns the weight a partition actually receives.
///
/// Zero, negative and non-finite weights collapse to zero so that one bad
/// entry cannot poison the whole split.
#[must_use]
pub fn effective_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 { weight } else { 0.0 }
}

/// Normalizes weights into proportions that sum to 1.
///
/// Falls back to equal proportions when no weight is positive.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn proportions(weights: &[f64]) -> Weights {
    let total: f64 = weights.iter().copied().map(effective_weight).sum();
    if total <= 0.0 {
        let equal = 1.0 / weights.len().max(1) as f64;
        return weights.iter().map(|_| equal).collect();
    }
    weights.iter().map(|&w| effective_weight(w) / total).collect()
}

/// Pixels a partition loses to the seams it borders.
///
/// `count` is the number of partitions in the split.
#[must_use]
pub fn seam_loss(index: usize, count: usize, gap: f64) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    let half = gap.max(0.0) / 2.0;
    let leading = if index == 0 { 0.0 } else { half };
    let trailing = if index + 1 == count { 0.0 } else { half };
    leading + trailing
}

/// Splits `area` along `axis` into parts proportional to `weights`.
///
/// The cross-axis origin and size are copied from `area`. A single weight
/// returns the area unchanged; an empty weight list returns no parts.
///
/// # Arguments
///
/// * `area` - The rectangle to divide
/// * `weights` - Relative share of each part
/// * `gap` - Space between neighbouring parts
/// * `axis` - Axis the parts are laid out along
#[must_use]
pub fn split_weighted(area: &Rect, weights: &[f64], gap: f64, axis: Axis) -> Partitions {
    let count = weights.len();
    if count <= 1 {
        return weights.iter().map(|_| *area).collect();
    }

    let shares = proportions(weights);
    let origin = area.start(axis);
    let extent = area.extent(axis);
    let half_gap = gap.max(0.0) / 2.0;

    let mut parts = Partitions::with_capacity(count);
    let mut acc = 0.0;
    for (i, share) in shares.iter().enumerate() {
        let begin_cut = extent.mul_add(acc, origin);
        acc += share;
        let end_cut = if i + 1 == count {
            origin + extent
        } else {
            extent.mul_add(acc, origin)
        };

        let begin = if i == 0 { begin_cut } else { begin_cut + half_gap };
        let end = if i + 1 == count { end_cut } else { end_cut - half_gap };
        parts.push(area.with_span(axis, begin, (end - begin).max(0.0)));
    }

    parts
}

/// Splits `area` in two at `ratio`.
///
/// Equivalent to `split_weighted(area, &[ratio, 1.0 - ratio], gap, axis)`;
/// the ratio is clamped to `[0, 1]`.
#[must_use]
pub fn split_half_weighted(area: &Rect, ratio: f64, gap: f64, axis: Axis) -> (Rect, Rect) {
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.5 };
    let parts = split_weighted(area, &[ratio, 1.0 - ratio], gap, axis);
    (parts[0], parts[1])
}

/// Splits `area` into `count` equal parts along `axis`.
#[must_use]
pub fn split_even(area: &Rect, count: usize, gap: f64, axis: Axis) -> Partitions {
    let weights: Weights = (0..count).map(|_| 1.0).collect();
    split_weighted(area, &weights, gap, axis)
}
