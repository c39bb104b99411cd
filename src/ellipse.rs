//! Dispersion-ellipse fitting.
//!
//! Turns a shot group into the best-fit ellipse of its spread: centroid,
//! population covariance, principal axes, then radii scaled either by a
//! chi-square confidence value or by a raw factor. The fit is a pure
//! function of its input; degenerate groups (collinear, duplicated shots)
//! produce zero radii instead of NaN, and fewer than three usable shots
//! produce no ellipse at all.

use serde::{Deserialize, Serialize};

use crate::stats::{centroid, covariance, eigen_decomposition, Convention};
use crate::types::{is_finite, Point};

/// Minimum number of finite points for an ellipse fit.
pub const MIN_POINTS: usize = 3;

/// Named confidence levels backed by chi-square critical values for two
/// degrees of freedom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Confidence {
    /// 50% region.
    P50,
    /// 75% region, the application's usual default.
    #[default]
    P75,
    /// 85% region.
    P85,
    /// 95% region.
    P95,
}

impl Confidence {
    /// The chi-square critical value this level maps to.
    pub fn chi_square(self) -> f64 {
        match self {
            Confidence::P50 => 1.386,
            Confidence::P75 => 2.773,
            Confidence::P85 => 3.841,
            Confidence::P95 => 5.991,
        }
    }
}

/// Scaling policy applied to the covariance eigenvalues.
///
/// Radii are `sqrt(λ·s)` in both modes. [`EllipseScale::Confidence`] gives a
/// statistically calibrated region; [`EllipseScale::Factor`] is the
/// "best fit, always show something" mode where the caller picks an
/// arbitrary scale (a legacy radius multiplier of `k` corresponds to
/// `Factor(k²)`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EllipseScale {
    Confidence(Confidence),
    Factor(f64),
}

impl Default for EllipseScale {
    fn default() -> Self {
        EllipseScale::Confidence(Confidence::default())
    }
}

impl EllipseScale {
    fn value(self) -> f64 {
        match self {
            EllipseScale::Confidence(level) => level.chi_square(),
            // A negative factor has no geometric meaning; treat it as zero.
            EllipseScale::Factor(scale) => scale.max(0.0),
        }
    }
}

/// Fitted dispersion ellipse.
///
/// `rx >= ry >= 0`; `angle_degrees` is measured from the positive x axis to
/// the major axis, in `(-180, 180]`. Computed fresh per request, never
/// cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    pub angle_degrees: f64,
}

impl Ellipse {
    /// Rotation reduced to `[0, 180)`. An ellipse axis has no direction, so
    /// orientations should be compared in this form.
    pub fn axis_angle_degrees(&self) -> f64 {
        self.angle_degrees.rem_euclid(180.0)
    }

    /// Clamps both radii up to `floor`.
    ///
    /// Renderers need non-degenerate shapes; the fit itself always reports
    /// the true radii and leaves this presentation floor to the caller.
    pub fn with_min_radius(self, floor: f64) -> Self {
        Self {
            rx: self.rx.max(floor),
            ry: self.ry.max(floor),
            ..self
        }
    }

    /// Samples `n` points along the boundary, for callers that draw the
    /// ellipse as a polyline.
    pub fn boundary_points(&self, n: usize) -> Vec<Point> {
        let angle = self.angle_degrees.to_radians();
        let (sin_a, cos_a) = angle.sin_cos();
        (0..n)
            .map(|i| {
                let t = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
                let px = self.rx * t.cos();
                let py = self.ry * t.sin();
                [
                    self.cx + cos_a * px - sin_a * py,
                    self.cy + sin_a * px + cos_a * py,
                ]
            })
            .collect()
    }
}

/// Fits a dispersion ellipse to the point set at the requested scale.
///
/// Non-finite points are excluded before any statistics are computed.
/// Returns `None` when fewer than [`MIN_POINTS`] usable points remain;
/// callers omit the ellipse rather than drawing a default shape. Collinear
/// or duplicated points yield a zero radius on the collapsed axis, never
/// NaN.
pub fn fit_ellipse(points: &[Point], scale: EllipseScale) -> Option<Ellipse> {
    let finite: Vec<Point> = points.iter().copied().filter(is_finite).collect();
    if finite.len() < MIN_POINTS {
        return None;
    }

    let center = centroid(&finite);
    let cov = covariance(&finite, Convention::Population);
    let eigen = eigen_decomposition(&cov);

    let s = scale.value();
    // Eigenvalues of a degenerate matrix may round a hair below zero.
    let rx = (eigen.values[0] * s).max(0.0).sqrt();
    let ry = (eigen.values[1] * s).max(0.0).sqrt();

    let major = eigen.vectors[0];
    let angle_degrees = major.y.atan2(major.x).to_degrees();

    Some(Ellipse {
        cx: center[0],
        cy: center[1],
        rx,
        ry,
        angle_degrees,
    })
}
