//! Centroid and 2×2 covariance of a shot point set.

use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Divisor convention for the covariance computation.
///
/// The two conventions differ by a factor of N/(N−1) on every entry, which
/// changes derived ellipse radii by √(N/(N−1)): negligible for large N but
/// visible at the 5-30 shot counts typical per club. Both shipped consumers
/// (ellipse fitter, Mahalanobis detector) use [`Convention::Population`];
/// the convention is an explicit argument so call sites can never mix the
/// two silently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Convention {
    /// Divide by N.
    #[default]
    Population,
    /// Divide by N − 1 (unbiased sample estimator).
    Sample,
}

/// Symmetric 2×2 covariance matrix of a point set around its centroid.
///
/// Invariant for any real point set: `xx >= 0`, `yy >= 0` and
/// `xx·yy − xy² >= -ε` (positive semi-definite up to floating-point error).
/// A matrix violating the determinant bound is treated as degenerate by its
/// consumers, never inverted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Covariance {
    pub xx: f64,
    pub yy: f64,
    pub xy: f64,
}

impl Covariance {
    pub const ZERO: Self = Self {
        xx: 0.0,
        yy: 0.0,
        xy: 0.0,
    };

    /// The matrix form, for linear-algebra consumers.
    pub fn matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.xx, self.xy, self.xy, self.yy)
    }

    pub fn determinant(&self) -> f64 {
        self.xx * self.yy - self.xy * self.xy
    }

    pub fn trace(&self) -> f64 {
        self.xx + self.yy
    }
}

/// Arithmetic mean of the point set.
///
/// Returns `[0.0, 0.0]` for an empty set. This is a documented zero default,
/// not an error; consumers must check the size before trusting the result.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return [0.0, 0.0];
    }
    let mut sum = [0.0f64; 2];
    for p in points {
        sum[0] += p[0];
        sum[1] += p[1];
    }
    let n = points.len() as f64;
    [sum[0] / n, sum[1] / n]
}

/// Covariance of the point set around its centroid.
///
/// Fewer than two points return [`Covariance::ZERO`] rather than dividing
/// by zero.
pub fn covariance(points: &[Point], convention: Convention) -> Covariance {
    if points.len() < 2 {
        return Covariance::ZERO;
    }
    let mu = centroid(points);
    let mut xx = 0.0f64;
    let mut yy = 0.0f64;
    let mut xy = 0.0f64;
    for p in points {
        let dx = p[0] - mu[0];
        let dy = p[1] - mu[1];
        xx += dx * dx;
        yy += dy * dy;
        xy += dx * dy;
    }
    let divisor = match convention {
        Convention::Population => points.len() as f64,
        Convention::Sample => (points.len() - 1) as f64,
    };
    Covariance {
        xx: xx / divisor,
        yy: yy / divisor,
        xy: xy / divisor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centroid_is_arithmetic_mean() {
        let points = [[-2.0, 148.0], [0.0, 150.0], [2.0, 152.0], [4.0, 154.0]];
        let c = centroid(&points);
        assert_relative_eq!(c[0], 1.0);
        assert_relative_eq!(c[1], 151.0);
    }

    #[test]
    fn centroid_of_repeated_point_is_that_point() {
        let points = [[3.5, 141.2]; 7];
        let c = centroid(&points);
        assert_relative_eq!(c[0], 3.5, epsilon = 1e-12);
        assert_relative_eq!(c[1], 141.2, epsilon = 1e-12);
    }

    #[test]
    fn centroid_of_empty_set_is_zero() {
        assert_eq!(centroid(&[]), [0.0, 0.0]);
    }

    #[test]
    fn covariance_below_two_points_is_zero() {
        assert_eq!(covariance(&[], Convention::Population), Covariance::ZERO);
        assert_eq!(
            covariance(&[[4.0, 150.0]], Convention::Population),
            Covariance::ZERO
        );
    }

    #[test]
    fn covariance_is_positive_semi_definite() {
        let points = [
            [-1.2, 149.0],
            [0.4, 151.0],
            [1.1, 150.0],
            [-0.6, 148.5],
            [0.9, 149.5],
        ];
        let cov = covariance(&points, Convention::Population);
        assert!(cov.xx >= 0.0);
        assert!(cov.yy >= 0.0);
        assert!(cov.determinant() >= -1e-12);
    }

    #[test]
    fn population_and_sample_differ_by_expected_ratio() {
        let points = [[0.0, 0.0], [1.0, 2.0], [2.0, 1.0], [3.0, 4.0], [4.0, 2.0]];
        let pop = covariance(&points, Convention::Population);
        let sample = covariance(&points, Convention::Sample);
        let ratio = points.len() as f64 / (points.len() - 1) as f64;
        assert_relative_eq!(sample.xx, pop.xx * ratio, epsilon = 1e-12);
        assert_relative_eq!(sample.yy, pop.yy * ratio, epsilon = 1e-12);
        assert_relative_eq!(sample.xy, pop.xy * ratio, epsilon = 1e-12);
    }

    #[test]
    fn known_axis_aligned_covariance() {
        // Variance 2 along side, 0.5 along carry, no correlation.
        let points = [[2.0, 0.0], [-2.0, 0.0], [0.0, 1.0], [0.0, -1.0]];
        let cov = covariance(&points, Convention::Population);
        assert_relative_eq!(cov.xx, 2.0);
        assert_relative_eq!(cov.yy, 0.5);
        assert_relative_eq!(cov.xy, 0.0);
    }

    #[test]
    fn matrix_form_is_symmetric() {
        let cov = Covariance {
            xx: 2.0,
            yy: 0.5,
            xy: 0.3,
        };
        let m = cov.matrix();
        assert_eq!(m[(0, 1)], m[(1, 0)]);
        assert_eq!(m[(0, 0)], 2.0);
        assert_eq!(m[(1, 1)], 0.5);
    }
}
