//! Shared numeric primitives.
//!
//! The ellipse fitter and both outlier strategies are built on two small
//! leaf utilities:
//! - [`covariance`] – centroid and 2×2 covariance of a point set, with the
//!   divisor convention as an explicit parameter.
//! - [`quantile`] – nearest-rank order statistics for the IQR fences.
//!
//! The closed-form symmetric eigen-solution lives in [`eigen`] next to the
//! covariance type it decomposes.

pub mod covariance;
pub mod eigen;
pub mod quantile;

pub use covariance::{centroid, covariance, Convention, Covariance};
pub use eigen::{eigen_decomposition, EigenDecomposition};
pub use quantile::{quartiles, Quartiles};
