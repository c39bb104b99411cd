//! Per-group dispersion analysis.
//!
//! Overview
//! - [`AnalyzerParams`] holds the policy knobs: ellipse scale, outlier
//!   strategy, whether flagged shots are excluded from the fit, and an
//!   optional presentation radius floor.
//! - [`DispersionAnalyzer`] runs outlier classification, the ellipse fit and
//!   summary statistics over one already-grouped shot set, producing a
//!   serializable [`DispersionReport`]. Grouping by club/session happens
//!   upstream.
//! - [`DispersionAnalyzer::analyze_many`] fans the same analysis out over
//!   independent groups in parallel.

mod params;
mod pipeline;
mod report;

pub use params::AnalyzerParams;
pub use pipeline::DispersionAnalyzer;
pub use report::{AxisStats, DispersionReport, ShotStats};
