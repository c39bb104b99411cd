//! Nearest-rank order statistics.

use std::cmp::Ordering;

/// First and third quartile of a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range. Zero when the central half of the sample is
    /// constant.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes quartiles with the nearest-rank method: `Q1` is the sorted value
/// at index `⌊0.25·N⌋`, `Q3` at `⌊0.75·N⌋`, no interpolation. Returns `None`
/// for an empty sample.
pub fn quartiles(values: &[f64]) -> Option<Quartiles> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();
    let i1 = ((n as f64 * 0.25).floor() as usize).min(n - 1);
    let i3 = ((n as f64 * 0.75).floor() as usize).min(n - 1);
    Some(Quartiles {
        q1: sorted[i1],
        q3: sorted[i3],
    })
}
