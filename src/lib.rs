#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod ellipse;
pub mod outliers;
pub mod types;

// Lower-level primitives, public for callers composing their own pipeline.
pub mod stats;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + report.
pub use crate::analyzer::{AnalyzerParams, DispersionAnalyzer, DispersionReport, ShotStats};

// The two core components, usable without the analyzer.
pub use crate::ellipse::{fit_ellipse, Confidence, Ellipse, EllipseScale};
pub use crate::outliers::{detect_outliers, OutlierStrategy};

pub use crate::types::Point;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use shot_dispersion::prelude::*;
///
/// let shots = [[-3.0, 148.0], [1.5, 152.0], [0.2, 150.0], [2.8, 154.5]];
/// let report = DispersionAnalyzer::new(AnalyzerParams::default()).analyze(&shots);
/// assert!(report.ellipse.is_some());
/// ```
pub mod prelude {
    pub use crate::analyzer::{AnalyzerParams, DispersionAnalyzer, DispersionReport};
    pub use crate::ellipse::{fit_ellipse, Confidence, Ellipse, EllipseScale};
    pub use crate::outliers::{detect_outliers, OutlierStrategy};
    pub use crate::types::Point;
}
