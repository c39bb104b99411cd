//! Mahalanobis-distance outlier classification.

use log::warn;
use nalgebra::Vector2;

use super::MIN_POINTS;
use crate::stats::{centroid, covariance, Convention};
use crate::types::{is_finite, Point};

/// Determinants below this are treated as singular; collinear or
/// near-identical shots carry no basis for a distance judgement.
const SINGULAR_EPS: f64 = 1e-10;

/// Flags shots whose Mahalanobis distance from the group centroid exceeds
/// `threshold`.
///
/// Returns an empty set when fewer than [`MIN_POINTS`] finite shots are
/// available or when the covariance matrix is near-singular; both are
/// valid "cannot judge" results, not errors. Non-finite shots neither
/// contribute to the statistics nor get flagged.
pub fn detect_outliers_mahalanobis(points: &[Point], threshold: f64) -> Vec<usize> {
    let finite: Vec<Point> = points.iter().copied().filter(is_finite).collect();
    if finite.len() < MIN_POINTS {
        return Vec::new();
    }

    let mu = centroid(&finite);
    let cov = covariance(&finite, Convention::Population);
    let det = cov.determinant();
    if det.abs() < SINGULAR_EPS {
        warn!("near-singular covariance (det = {det:.3e}), skipping outlier classification");
        return Vec::new();
    }
    let Some(inv) = cov.matrix().try_inverse() else {
        return Vec::new();
    };

    let mut flagged = Vec::new();
    for (index, p) in points.iter().enumerate() {
        if !is_finite(p) {
            continue;
        }
        let d = Vector2::new(p[0] - mu[0], p[1] - mu[1]);
        let distance = d.dot(&(inv * d)).max(0.0).sqrt();
        if distance > threshold {
            flagged.push(index);
        }
    }
    flagged
}
