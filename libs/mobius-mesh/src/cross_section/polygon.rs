//! Regular polygon cross-section.

use glam::DVec3;
use std::f64::consts::TAU;

/// Returns `sides` points evenly spaced on a circle of `radius`.
///
/// Point `i` sits at angle `2π·i/sides`, so the first point is always on
/// the positive X axis.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::cross_section::polygon_points;
///
/// let square = polygon_points(4, 2.0);
/// assert_eq!(square.len(), 4);
/// assert!((square[0].x - 2.0).abs() < 1e-12);
/// ```
pub fn polygon_points(sides: u32, radius: f64) -> Vec<DVec3> {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            DVec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}
