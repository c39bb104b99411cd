//! Per-axis interquartile-range outlier classification.

use super::MIN_POINTS;
use crate::stats::quantile::quartiles;
use crate::types::{is_finite, Point};

struct AxisFence {
    lo: f64,
    hi: f64,
    active: bool,
}

impl AxisFence {
    fn flags(&self, value: f64) -> bool {
        self.active && (value < self.lo || value > self.hi)
    }
}

// A zero-width IQR means the central half of the axis is constant; that
// axis then contributes no outlier signal at all.
fn axis_fence(values: &[f64], factor: f64) -> AxisFence {
    match quartiles(values) {
        Some(q) if q.iqr() > 0.0 => AxisFence {
            lo: q.q1 - factor * q.iqr(),
            hi: q.q3 + factor * q.iqr(),
            active: true,
        },
        _ => AxisFence {
            lo: 0.0,
            hi: 0.0,
            active: false,
        },
    }
}

/// Flags shots falling outside the Tukey fences on either axis.
///
/// Quartiles use the nearest-rank method (see [`crate::stats::quantile`]).
/// Returns an empty set below [`MIN_POINTS`] finite shots. Non-finite shots
/// neither contribute to the fences nor get flagged.
pub fn detect_outliers_iqr(points: &[Point], factor: f64) -> Vec<usize> {
    let finite: Vec<Point> = points.iter().copied().filter(is_finite).collect();
    if finite.len() < MIN_POINTS {
        return Vec::new();
    }

    let sides: Vec<f64> = finite.iter().map(|p| p[0]).collect();
    let carries: Vec<f64> = finite.iter().map(|p| p[1]).collect();
    let side_fence = axis_fence(&sides, factor);
    let carry_fence = axis_fence(&carries, factor);

    points
        .iter()
        .enumerate()
        .filter(|(_, p)| is_finite(p))
        .filter(|(_, p)| side_fence.flags(p[0]) || carry_fence.flags(p[1]))
        .map(|(index, _)| index)
        .collect()
}
