//! Parameter types configuring the dispersion analyzer.

use serde::{Deserialize, Serialize};

use crate::ellipse::EllipseScale;
use crate::outliers::OutlierStrategy;

/// Analyzer-wide parameters.
///
/// The defaults mirror the application's usual view: a 75% confidence
/// ellipse over every shot, IQR screening with Tukey's 1.5, no radius floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerParams {
    /// Scaling policy for the fitted ellipse.
    pub scale: EllipseScale,
    /// Outlier classification strategy.
    pub outlier_strategy: OutlierStrategy,
    /// Excludes flagged shots from the ellipse fit. Flags are always
    /// reported either way.
    pub exclude_outliers: bool,
    /// Optional minimum radius applied to the reported ellipse, for
    /// renderers that cannot draw a degenerate shape. The analytical radii
    /// are floored after the fit, never inside it.
    pub min_radius: Option<f64>,
}
