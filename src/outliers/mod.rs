//! Outlier classification for shot groups.
//!
//! Two interchangeable strategies over the same coordinate convention as the
//! ellipse fitter:
//! - [`detect_outliers_mahalanobis`] – distance against the inverse
//!   population covariance; sensitive to correlated spread but needs a
//!   well-conditioned matrix.
//! - [`detect_outliers_iqr`] – per-axis interquartile fences; needs no
//!   matrix inversion and degrades gracefully with near-duplicate points,
//!   which makes it the default for the 5–30 shot groups launch monitors
//!   produce.
//!
//! Both return ascending indices into the original input so callers can
//! correlate flags back to full shot records (timestamps, batch ids).

mod iqr;
mod mahalanobis;

pub use iqr::detect_outliers_iqr;
pub use mahalanobis::detect_outliers_mahalanobis;

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Minimum number of finite points before classification is attempted.
/// Below this, "not enough data to judge outliers" is a valid result and the
/// detectors return an empty set.
pub const MIN_POINTS: usize = 4;

/// Default Mahalanobis cut-off. A sensitivity knob, not a calibrated
/// p-value; callers wanting formal significance should derive the cut-off
/// from the chi-square table behind [`crate::ellipse::Confidence`].
pub const DEFAULT_MAHALANOBIS_THRESHOLD: f64 = 2.5;

/// Default IQR fence multiplier (Tukey's 1.5).
pub const DEFAULT_IQR_FACTOR: f64 = 1.5;

/// Strategy selecting how a shot group is screened for outliers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutlierStrategy {
    /// Mahalanobis distance above `threshold` flags a shot.
    Mahalanobis { threshold: f64 },
    /// A shot outside `[Q1 − factor·IQR, Q3 + factor·IQR]` on either axis is
    /// flagged.
    Iqr { factor: f64 },
}

impl Default for OutlierStrategy {
    fn default() -> Self {
        OutlierStrategy::Iqr {
            factor: DEFAULT_IQR_FACTOR,
        }
    }
}

/// Classifies outliers with the selected strategy, returning ascending
/// indices into `points`.
pub fn detect_outliers(points: &[Point], strategy: &OutlierStrategy) -> Vec<usize> {
    match *strategy {
        OutlierStrategy::Mahalanobis { threshold } => {
            detect_outliers_mahalanobis(points, threshold)
        }
        OutlierStrategy::Iqr { factor } => detect_outliers_iqr(points, factor),
    }
}
