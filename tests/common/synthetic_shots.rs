use rand::prelude::*;

/// Generates a shot group scattered uniformly around `center` with the given
/// half-spreads, then rotated by `angle_degrees` about the center.
pub fn scattered_group(
    rng: &mut StdRng,
    n: usize,
    center: [f64; 2],
    spread_side: f64,
    spread_carry: f64,
    angle_degrees: f64,
) -> Vec<[f64; 2]> {
    assert!(n > 0, "group must contain at least one shot");
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();
    (0..n)
        .map(|_| {
            let dx = (rng.gen::<f64>() - 0.5) * 2.0 * spread_side;
            let dy = (rng.gen::<f64>() - 0.5) * 2.0 * spread_carry;
            [
                center[0] + cos_a * dx - sin_a * dy,
                center[1] + sin_a * dx + cos_a * dy,
            ]
        })
        .collect()
}
