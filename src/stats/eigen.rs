//! Closed-form eigen-decomposition of a symmetric 2×2 covariance matrix.

use nalgebra::Vector2;

use super::covariance::Covariance;

const EPS: f64 = 1e-12;

/// Eigen-decomposition of a [`Covariance`] matrix.
///
/// Eigenvalues are ordered largest first; the matching unit eigenvectors are
/// orthogonal. For a degenerate matrix (zero variance, collinear points) the
/// result is still well-defined: eigenvalues collapse toward zero and the
/// eigenvectors fall back to a deterministic axis-aligned pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EigenDecomposition {
    /// `[λ1, λ2]` with `λ1 >= λ2`.
    pub values: [f64; 2],
    /// Unit eigenvectors matching `values`, major axis first.
    pub vectors: [Vector2<f64>; 2],
}

/// Decomposes the covariance matrix into principal axes.
///
/// The characteristic discriminant is clamped at zero before the square
/// root, so floating-point error on a near-degenerate matrix can never
/// produce NaN.
pub fn eigen_decomposition(cov: &Covariance) -> EigenDecomposition {
    let trace = cov.trace();
    let det = cov.determinant();
    let discriminant = (trace * trace - 4.0 * det).max(0.0).sqrt();
    let lambda1 = 0.5 * (trace + discriminant);
    let lambda2 = 0.5 * (trace - discriminant);

    // (xy, λ − xx) spans the eigenspace of λ unless the matrix is already
    // diagonal with xx on the matching axis; the fallback keeps the pair
    // orthogonal and axis-aligned.
    let v1 = eigenvector_for(cov, lambda1).unwrap_or_else(|| Vector2::new(1.0, 0.0));
    let v2 = eigenvector_for(cov, lambda2).unwrap_or_else(|| Vector2::new(-v1.y, v1.x));

    EigenDecomposition {
        values: [lambda1, lambda2],
        vectors: [v1, v2],
    }
}

fn eigenvector_for(cov: &Covariance, lambda: f64) -> Option<Vector2<f64>> {
    let v = Vector2::new(cov.xy, lambda - cov.xx);
    let norm = v.norm();
    if norm <= EPS {
        None
    } else {
        Some(v / norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn eigenvalues_are_ordered() {
        let cov = Covariance {
            xx: 0.5,
            yy: 4.5,
            xy: 0.2,
        };
        let eigen = eigen_decomposition(&cov);
        assert!(eigen.values[0] >= eigen.values[1]);
    }

    #[test]
    fn known_correlated_matrix() {
        // [[2, 1], [1, 2]] has eigenvalues 3 and 1 with axes at ±45°.
        let cov = Covariance {
            xx: 2.0,
            yy: 2.0,
            xy: 1.0,
        };
        let eigen = eigen_decomposition(&cov);
        assert_relative_eq!(eigen.values[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(eigen.values[1], 1.0, epsilon = 1e-12);
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(eigen.vectors[0].x.abs(), inv_sqrt2, epsilon = 1e-12);
        assert_relative_eq!(eigen.vectors[0].y.abs(), inv_sqrt2, epsilon = 1e-12);
    }

    #[test]
    fn diagonal_matrix_falls_back_to_axis_aligned_vectors() {
        let cov = Covariance {
            xx: 2.0,
            yy: 0.5,
            xy: 0.0,
        };
        let eigen = eigen_decomposition(&cov);
        assert_relative_eq!(eigen.values[0], 2.0);
        assert_relative_eq!(eigen.values[1], 0.5);
        assert_eq!(eigen.vectors[0], Vector2::new(1.0, 0.0));
        assert_relative_eq!(eigen.vectors[1].x.abs(), 0.0);
        assert_relative_eq!(eigen.vectors[1].y.abs(), 1.0);
    }

    #[test]
    fn isotropic_matrix_keeps_deterministic_axes() {
        let cov = Covariance {
            xx: 1.5,
            yy: 1.5,
            xy: 0.0,
        };
        let eigen = eigen_decomposition(&cov);
        assert_eq!(eigen.vectors[0], Vector2::new(1.0, 0.0));
        assert_eq!(eigen.vectors[1], Vector2::new(0.0, 1.0));
    }

    #[test]
    fn zero_matrix_produces_no_nan() {
        let eigen = eigen_decomposition(&Covariance::ZERO);
        assert_eq!(eigen.values, [0.0, 0.0]);
        assert!(eigen.vectors[0].norm().is_finite());
        assert!(eigen.vectors[1].norm().is_finite());
    }

    #[test]
    fn eigenvectors_are_orthogonal() {
        let cov = Covariance {
            xx: 3.2,
            yy: 1.1,
            xy: -0.8,
        };
        let eigen = eigen_decomposition(&cov);
        assert_relative_eq!(eigen.vectors[0].dot(&eigen.vectors[1]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn near_degenerate_discriminant_is_clamped() {
        // xx·yy ≈ xy², so the determinant rounds a hair negative.
        let cov = Covariance {
            xx: 1e-8,
            yy: 1e-8,
            xy: 1e-8 + 1e-22,
        };
        let eigen = eigen_decomposition(&cov);
        assert!(eigen.values[0].is_finite());
        assert!(eigen.values[1].is_finite());
    }
}
