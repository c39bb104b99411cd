//! Shared primitive types and the coordinate convention used across the crate.

/// One shot in the normalized analysis frame: `[side, carry]`.
///
/// - `side` is the signed lateral offset from the target line; negative is
///   left of target, positive is right.
/// - `carry` is the downrange distance (non-negative in practice, though the
///   crate does not enforce it).
///
/// Unit conversion (yards vs. metres) and the left-negative sign convention
/// are the responsibility of the ingestion layer; every function in this
/// crate assumes both have already been applied.
pub type Point = [f64; 2];

/// Returns `true` when both coordinates are finite.
///
/// Upstream parsing bugs occasionally produce NaN or infinite coordinates;
/// the statistics in this crate exclude such points rather than letting one
/// bad record corrupt a whole group.
#[inline]
pub fn is_finite(point: &Point) -> bool {
    point[0].is_finite() && point[1].is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_check_rejects_nan_and_infinity() {
        assert!(is_finite(&[0.0, 150.0]));
        assert!(!is_finite(&[f64::NAN, 150.0]));
        assert!(!is_finite(&[0.0, f64::INFINITY]));
        assert!(!is_finite(&[f64::NEG_INFINITY, f64::NAN]));
    }
}
