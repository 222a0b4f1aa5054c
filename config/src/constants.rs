//! # Configuration Constants
//!
//! Centralized constants for the Mobius ring pipeline. Tolerances, the
//! default parameter record and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Shape**: Structural minimums for cross-sections and sweeps
//! - **Defaults**: Initial values of the parameter record
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Area below which a triangle counts as degenerate.
///
/// Used by mesh validation. Seams of twisted rings and collapsed corner arcs
/// can produce slivers smaller than this.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// SHAPE CONSTANTS
// =============================================================================

/// Minimum number of polygon sides for any cross-section.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SIDES;
///
/// let sides = 2;
/// assert!(sides < MIN_SIDES);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Minimum number of cross-sections placed around the ring.
///
/// A single section is accepted and stitched to itself; zero sections
/// cannot form a mesh.
pub const MIN_SEGMENTS: u32 = 1;

/// Minimum number of arc steps per rounded corner.
pub const MIN_SEGMENTS_PER_CORNER: u32 = 1;

/// Arc steps used for each corner of the rounded cross-section when the
/// parameter record does not carry its own value.
///
/// Each corner contributes `DEFAULT_SEGMENTS_PER_CORNER + 1` points.
pub const DEFAULT_SEGMENTS_PER_CORNER: u32 = 20;

// =============================================================================
// PARAMETER DEFAULTS
// =============================================================================

/// Default number of sides of the cross-section polygon.
pub const DEFAULT_SIDES: u32 = 4;

/// Default circumradius of the cross-section polygon.
pub const DEFAULT_POLYGON_RADIUS: f64 = 1.0;

/// Default radius of the circular sweep path.
pub const DEFAULT_RING_RADIUS: f64 = 5.0;

/// Default number of cross-sections around the ring.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS};
///
/// assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 100;

/// Default twist, in point-index steps over the whole ring.
pub const DEFAULT_TWIST: f64 = 1.0;

/// Default corner radius for the rounded cross-section.
pub const DEFAULT_CORNER_SMOOTHING: f64 = 0.2;

/// Default auxiliary shape ratio.
pub const DEFAULT_RATIO: i32 = 1;

/// Default display colour handed through to the renderer.
pub const DEFAULT_COLOUR: &str = "#3388ff";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from huge segment counts.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TRIANGLES;
///
/// let triangles = 2 * 4 * 100;
/// assert!(triangles < MAX_TRIANGLES);
/// ```
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
