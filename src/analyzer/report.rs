//! Serializable summary of one analysis unit.

use serde::{Deserialize, Serialize};

use crate::ellipse::Ellipse;
use crate::stats::{centroid, covariance, Convention};
use crate::types::{is_finite, Point};

/// Summary statistics along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (÷N), matching the covariance
    /// convention used by the fit.
    pub std_dev: f64,
}

/// Aggregate statistics of a shot group, as shown in chart tooltips.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotStats {
    /// Number of finite shots the statistics cover.
    pub count: usize,
    pub side: AxisStats,
    pub carry: AxisStats,
}

impl ShotStats {
    /// Computes the summary over the finite shots of the group. Returns
    /// `None` when no finite shot is present.
    pub fn compute(points: &[Point]) -> Option<Self> {
        let finite: Vec<Point> = points.iter().copied().filter(is_finite).collect();
        if finite.is_empty() {
            return None;
        }
        let mu = centroid(&finite);
        let cov = covariance(&finite, Convention::Population);

        let mut side_min = f64::INFINITY;
        let mut side_max = f64::NEG_INFINITY;
        let mut carry_min = f64::INFINITY;
        let mut carry_max = f64::NEG_INFINITY;
        for p in &finite {
            side_min = side_min.min(p[0]);
            side_max = side_max.max(p[0]);
            carry_min = carry_min.min(p[1]);
            carry_max = carry_max.max(p[1]);
        }

        Some(Self {
            count: finite.len(),
            side: AxisStats {
                mean: mu[0],
                min: side_min,
                max: side_max,
                std_dev: cov.xx.max(0.0).sqrt(),
            },
            carry: AxisStats {
                mean: mu[1],
                min: carry_min,
                max: carry_max,
                std_dev: cov.yy.max(0.0).sqrt(),
            },
        })
    }
}

/// Full dispersion report for one analysis unit: one club within a session,
/// or one aggregate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionReport {
    /// Indices of shots classified as outliers, ascending.
    pub outliers: Vec<usize>,
    /// Fitted dispersion ellipse; absent below three usable shots.
    pub ellipse: Option<Ellipse>,
    /// Summary statistics; absent for a group with no finite shots.
    pub stats: Option<ShotStats>,
}
