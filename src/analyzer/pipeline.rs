//! The analyzer itself: outlier screening, ellipse fit, summary statistics.

use rayon::prelude::*;

use super::params::AnalyzerParams;
use super::report::{DispersionReport, ShotStats};
use crate::ellipse::fit_ellipse;
use crate::outliers::detect_outliers;
use crate::types::Point;

/// Runs the dispersion analysis for already-grouped shot sets.
///
/// Holds only parameters; every call is a pure function of its input, so a
/// single analyzer can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct DispersionAnalyzer {
    params: AnalyzerParams,
}

impl DispersionAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Analyzes one shot group.
    ///
    /// Outliers are classified first; when `exclude_outliers` is set the
    /// flagged shots are dropped from the ellipse fit (the report still
    /// lists them). Summary statistics always cover the whole group.
    pub fn analyze(&self, points: &[Point]) -> DispersionReport {
        let outliers = detect_outliers(points, &self.params.outlier_strategy);

        let kept: Vec<Point>;
        let fit_input: &[Point] = if self.params.exclude_outliers && !outliers.is_empty() {
            kept = points
                .iter()
                .enumerate()
                .filter(|(index, _)| outliers.binary_search(index).is_err())
                .map(|(_, p)| *p)
                .collect();
            &kept
        } else {
            points
        };

        let mut ellipse = fit_ellipse(fit_input, self.params.scale);
        if let (Some(e), Some(floor)) = (ellipse, self.params.min_radius) {
            ellipse = Some(e.with_min_radius(floor));
        }

        DispersionReport {
            outliers,
            ellipse,
            stats: ShotStats::compute(points),
        }
    }

    /// Analyzes many independent groups, in input order.
    ///
    /// Each group is a separate analysis unit with zero shared state, so the
    /// batch parallelizes over a rayon pool.
    pub fn analyze_many<G>(&self, groups: &[G]) -> Vec<DispersionReport>
    where
        G: AsRef<[Point]> + Sync,
    {
        groups
            .par_iter()
            .map(|group| self.analyze(group.as_ref()))
            .collect()
    }
}
