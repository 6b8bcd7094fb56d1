//! Twist angle primitives shared by the rotor and wing placements

/// Twist of the chord line from leading edge to trailing edge, in radians
///
/// Measured in the plane of the first two coordinates.
pub fn twist_angle(leading_edge: [f64; 3], trailing_edge: [f64; 3]) -> f64 {
    let dx = trailing_edge[0] - leading_edge[0];
    let dy = trailing_edge[1] - leading_edge[1];
    dy.atan2(dx)
}

/// Rotate `(x, y)` counter-clockwise by `angle` radians about the origin
pub fn rotate(x: f64, y: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}
