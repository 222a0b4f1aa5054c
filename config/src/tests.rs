//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

// =============================================================================
// SHAPE TESTS
// =============================================================================

#[test]
fn test_min_sides_forms_polygon() {
    // A cross-section needs at least 3 points to enclose area
    assert_eq!(MIN_SIDES, 3);
}

#[test]
fn test_min_segments_is_positive() {
    assert!(MIN_SEGMENTS >= 1);
}

#[test]
fn test_default_segments_per_corner_valid() {
    assert!(DEFAULT_SEGMENTS_PER_CORNER >= MIN_SEGMENTS_PER_CORNER);
}

// =============================================================================
// DEFAULT PARAMETER TESTS
// =============================================================================

#[test]
fn test_default_sides_valid() {
    assert!(DEFAULT_SIDES >= MIN_SIDES);
}

#[test]
fn test_default_radii_positive() {
    assert!(DEFAULT_POLYGON_RADIUS > 0.0);
    assert!(DEFAULT_RING_RADIUS > DEFAULT_POLYGON_RADIUS);
    assert!(DEFAULT_CORNER_SMOOTHING >= 0.0);
}

#[test]
fn test_default_corner_smoothing_fits_default_polygon() {
    // Tangent distance r / tan(half interior angle) must stay below half an
    // edge, otherwise adjacent corner arcs overlap.
    let n = DEFAULT_SIDES as f64;
    let half_interior = (std::f64::consts::PI - std::f64::consts::TAU / n) / 2.0;
    let edge = 2.0 * DEFAULT_POLYGON_RADIUS * (std::f64::consts::PI / n).sin();
    let tangent = DEFAULT_CORNER_SMOOTHING / half_interior.tan();
    assert!(tangent < edge / 2.0);
}

#[test]
fn test_default_segments_valid() {
    assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
}

#[test]
fn test_default_twist_is_whole() {
    assert_eq!(DEFAULT_TWIST.fract(), 0.0);
}

#[test]
fn test_default_colour_is_hex() {
    assert!(DEFAULT_COLOUR.starts_with('#'));
    assert_eq!(DEFAULT_COLOUR.len(), 7);
    assert!(DEFAULT_COLOUR[1..].chars().all(|c| c.is_ascii_hexdigit()));
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 1.0 - large_diff));
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON / 2.0;
    assert!(approx_zero(0.0));
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_non_zero_values() {
    assert!(!approx_zero(1.0));
    assert!(!approx_zero(-1.0));
    assert!(!approx_zero(EPSILON * 2.0));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_triangles_reasonable() {
    // Should allow dense rings but prevent memory exhaustion
    assert!(MAX_TRIANGLES >= 1_000_000);
}

#[test]
fn test_default_mesh_within_limits() {
    let triangles = 2 * DEFAULT_SIDES as usize * DEFAULT_SEGMENTS as usize;
    assert!(triangles < MAX_TRIANGLES);
}
