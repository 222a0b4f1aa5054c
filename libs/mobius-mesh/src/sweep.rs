//! # Sweep
//!
//! Places transformed copies of a cross-section around a circular ring.
//!
//! ## Algorithm
//!
//! For segment `i` of `n`, with `t = i / n` and ring angle `a = 2π·t`:
//! 1. Twist the section about its local Z axis by
//!    `t · (360° / points) · twist_count`, so a full ring shifts the point
//!    correspondence by `twist_count` indices
//! 2. Rotate 90° about X, then by `a` about Z, so the section faces away
//!    from the ring center
//! 3. Translate onto the ring at `(cos a, sin a, 0) · ring_radius`
//!
//! Every segment gets its own freshly built cross-section.

use crate::cross_section::{check_length, CrossSection};
use crate::error::{MobiusError, Result};
use config::constants::{
    DEFAULT_RING_RADIUS, DEFAULT_SEGMENTS, DEFAULT_TWIST, MIN_SEGMENTS,
};
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::{debug, instrument};

/// Parameters of the circular sweep path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepConfig {
    /// Radius of the circular path
    pub ring_radius: f64,
    /// Number of cross-sections placed around the ring
    pub segment_count: u32,
    /// Point-index steps of twist accumulated over the full ring
    pub twist_count: i32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            ring_radius: DEFAULT_RING_RADIUS,
            segment_count: DEFAULT_SEGMENTS,
            twist_count: DEFAULT_TWIST as i32,
        }
    }
}

impl SweepConfig {
    /// Creates a sweep configuration.
    pub fn new(ring_radius: f64, segment_count: u32, twist_count: i32) -> Self {
        Self {
            ring_radius,
            segment_count,
            twist_count,
        }
    }

    /// Rejects sweeps that cannot produce a ring.
    pub fn validate(&self) -> Result<()> {
        if self.segment_count < MIN_SEGMENTS {
            return Err(MobiusError::invalid_shape(format!(
                "segment count must be >= {MIN_SEGMENTS}, got {}",
                self.segment_count
            )));
        }
        check_length("ring radius", self.ring_radius)
    }

    /// Ring angle of the given segment, in radians.
    #[inline]
    pub fn segment_angle(&self, index: u32) -> f64 {
        index as f64 / self.segment_count as f64 * TAU
    }

    /// Twist applied to the given segment, in radians, for a section of
    /// `point_count` points.
    #[inline]
    pub fn segment_twist(&self, index: u32, point_count: usize) -> f64 {
        let t = index as f64 / self.segment_count as f64;
        t * (360.0 / point_count as f64 * self.twist_count as f64).to_radians()
    }
}

/// Twists, orients and translates one cross-section into its ring slot.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::cross_section::ShapeDescriptor;
/// use mobius_mesh::sweep::{place_section, SweepConfig};
///
/// let config = SweepConfig::new(5.0, 8, 0);
/// let section = ShapeDescriptor::Polygon { sides: 4, radius: 1.0 }.build();
/// let placed = place_section(section, 0, &config);
/// // First point lies radially outward, in the XZ plane
/// assert!((placed.point(0).x - 6.0).abs() < 1e-12);
/// ```
pub fn place_section(mut section: CrossSection, index: u32, config: &SweepConfig) -> CrossSection {
    if section.is_empty() {
        return section;
    }
    let angle = config.segment_angle(index);

    section.rotate_z(config.segment_twist(index, section.len()));

    let face_outward = DMat3::from_rotation_z(angle) * DMat3::from_rotation_x(FRAC_PI_2);
    section.apply(&face_outward);

    section.translate(DVec3::new(
        angle.cos() * config.ring_radius,
        angle.sin() * config.ring_radius,
        0.0,
    ));
    section
}

/// Builds and places `segment_count` cross-sections, in segment order.
///
/// # Arguments
///
/// * `factory` - Produces a fresh, untransformed cross-section per call
/// * `config` - Ring radius, segment count and twist
#[instrument(level = "debug", skip(factory))]
pub fn sweep<F>(factory: F, config: &SweepConfig) -> Vec<CrossSection>
where
    F: Fn() -> CrossSection,
{
    let sections: Vec<CrossSection> = (0..config.segment_count)
        .map(|i| place_section(factory(), i, config))
        .collect();
    debug!(sections = sections.len(), "swept cross-sections");
    sections
}

/// Parallel variant of [`sweep`]; output order matches segment order.
#[cfg(feature = "parallel")]
#[instrument(level = "debug", skip(factory))]
pub fn sweep_parallel<F>(factory: F, config: &SweepConfig) -> Vec<CrossSection>
where
    F: Fn() -> CrossSection + Sync,
{
    use rayon::prelude::*;

    let sections: Vec<CrossSection> = (0..config.segment_count)
        .into_par_iter()
        .map(|i| place_section(factory(), i, config))
        .collect();
    debug!(sections = sections.len(), "swept cross-sections in parallel");
    sections
}

/// Without the `parallel` feature this is the sequential [`sweep`].
#[cfg(not(feature = "parallel"))]
pub fn sweep_parallel<F>(factory: F, config: &SweepConfig) -> Vec<CrossSection>
where
    F: Fn() -> CrossSection + Sync,
{
    sweep(factory, config)
}
