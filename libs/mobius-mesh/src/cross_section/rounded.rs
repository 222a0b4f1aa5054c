//! # Rounded Polygon Cross-Section
//!
//! Replaces each corner of a regular polygon with a circular arc tangent to
//! both adjacent edges.
//!
//! ## Algorithm
//!
//! For every vertex:
//! 1. Unit vectors toward the previous and next vertex
//! 2. Half interior angle `h` from the angle between them
//! 3. Arc center on the bisector at `r / sin(h)` from the vertex
//! 4. Tangent points at `r / tan(h)` along each edge
//! 5. Arc sampled counter-clockwise from the incoming to the outgoing
//!    tangent point, both endpoints included
//!
//! No clamping is done on `r`: a radius too large for the polygon yields
//! overlapping, self-intersecting arcs.

use super::polygon::polygon_points;
use config::constants::{approx_equal, approx_zero};
use glam::{DVec2, DVec3};
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::warn;

/// Returns `sides * (segments_per_corner + 1)` points of the rounded polygon.
///
/// # Arguments
///
/// * `sides` - Number of polygon corners
/// * `radius` - Circumradius of the raw polygon
/// * `corner_radius` - Radius of each corner arc
/// * `segments_per_corner` - Angular steps per arc
///
/// # Example
///
/// ```rust
/// use mobius_mesh::cross_section::rounded_points;
///
/// let points = rounded_points(4, 1.0, 0.1, 8);
/// assert_eq!(points.len(), 4 * 9);
/// ```
pub fn rounded_points(
    sides: u32,
    radius: f64,
    corner_radius: f64,
    segments_per_corner: u32,
) -> Vec<DVec3> {
    let corners: Vec<DVec2> = polygon_points(sides, radius)
        .into_iter()
        .map(|p| p.truncate())
        .collect();
    let n = corners.len();
    let mut points = Vec::with_capacity(n * (segments_per_corner as usize + 1));

    for i in 0..n {
        let prev = corners[(i + n - 1) % n];
        let curr = corners[i];
        let next = corners[(i + 1) % n];

        let to_prev = (prev - curr).normalize_or_zero();
        let to_next = (next - curr).normalize_or_zero();
        let bisector = (to_prev + to_next).normalize_or_zero();

        let half_angle = to_prev.dot(to_next).clamp(-1.0, 1.0).acos() / 2.0;

        // Every corner of a regular polygon is congruent; one check suffices.
        if i == 0 {
            check_corner(half_angle, corner_radius, curr.distance(next));
        }

        let center = curr + bisector * (corner_radius / half_angle.sin());
        let tangent_length = corner_radius / half_angle.tan();
        let start = curr + to_prev * tangent_length;
        let end = curr + to_next * tangent_length;

        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        let end_angle = (end.y - center.y).atan2(end.x - center.x);
        let mut sweep = end_angle - start_angle;
        if sweep < 0.0 {
            sweep += TAU;
        }

        for j in 0..=segments_per_corner {
            let t = j as f64 / segments_per_corner as f64;
            let theta = start_angle + t * sweep;
            points.push(DVec3::new(
                center.x + corner_radius * theta.cos(),
                center.y + corner_radius * theta.sin(),
                0.0,
            ));
        }
    }

    points
}

/// Why a corner cannot be rounded cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CornerIssue {
    /// Half interior angle outside (0, π/2)
    Degenerate,
    /// Tangent points of neighbouring arcs cross on the shared edge
    Overlap,
}

fn check_corner(half_angle: f64, corner_radius: f64, edge_length: f64) -> Option<CornerIssue> {
    if !(half_angle > 0.0 && half_angle < FRAC_PI_2) || approx_zero(half_angle) {
        warn!(half_angle, "degenerate polygon corner, rounded arcs will be inverted");
        return Some(CornerIssue::Degenerate);
    }
    let tangent_length = corner_radius / half_angle.tan();
    // Arcs that exactly meet at the edge midpoint are fine
    if 2.0 * tangent_length > edge_length && !approx_equal(2.0 * tangent_length, edge_length) {
        warn!(
            corner_radius,
            tangent_length,
            edge_length,
            "corner radius too large, adjacent arcs overlap"
        );
        return Some(CornerIssue::Overlap);
    }
    None
}
