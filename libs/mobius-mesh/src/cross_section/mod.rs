//! # Cross-Sections
//!
//! Builders for the closed point ring that is swept around the Mobius path:
//! - **Polygon**: regular polygon on a circumcircle
//! - **Rectangular**: flattened 3 or 4 point subset of the polygon
//! - **Rounded**: polygon with arc-tessellated corners
//!
//! All builders produce counter-clockwise points in the XY plane (z = 0).
//! Stitching relies on that ordering for vertex correspondence.

mod polygon;
mod rectangular;
mod rounded;


pub use polygon::polygon_points;
pub use rectangular::rectangular_points;
pub use rounded::rounded_points;

use crate::error::{MobiusError, Result};
use config::constants::{MIN_SEGMENTS_PER_CORNER, MIN_SIDES};
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// An ordered ring of points in its own local frame.
///
/// Each sweep step owns a fresh `CrossSection` and transforms it in place.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::cross_section::CrossSection;
/// use glam::DVec3;
///
/// let mut section = CrossSection::new(vec![DVec3::X, DVec3::Y, -DVec3::X]);
/// section.translate(DVec3::Z);
/// assert_eq!(section.point(0), DVec3::new(1.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossSection {
    points: Vec<DVec3>,
}

impl CrossSection {
    /// Creates a cross-section from points in counter-clockwise order.
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cross-section has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in ring order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the point at the given index.
    #[inline]
    pub fn point(&self, index: usize) -> DVec3 {
        self.points[index]
    }

    /// Consumes the cross-section and returns its points.
    pub fn into_points(self) -> Vec<DVec3> {
        self.points
    }

    /// Rotates every point about the local Z axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation in radians, counter-clockwise
    pub fn rotate_z(&mut self, angle: f64) {
        self.apply(&DMat3::from_rotation_z(angle));
    }

    /// Applies a linear transform to every point.
    pub fn apply(&mut self, matrix: &DMat3) {
        for p in &mut self.points {
            *p = *matrix * *p;
        }
    }

    /// Translates every point by the given offset.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.points {
            *p += offset;
        }
    }

    /// Returns the average of all points, or the origin when empty.
    pub fn centroid(&self) -> DVec3 {
        if self.points.is_empty() {
            return DVec3::ZERO;
        }
        self.points.iter().copied().sum::<DVec3>() / self.points.len() as f64
    }
}

/// Selects which cross-section builder to use, with its parameters.
///
/// The set of shapes is closed: every variant maps to exactly one builder.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::cross_section::ShapeDescriptor;
///
/// let shape = ShapeDescriptor::Rectangular { sides: 6, radius: 1.0 };
/// assert_eq!(shape.build().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeDescriptor {
    /// Regular polygon with `sides` vertices on a circle of `radius`.
    Polygon { sides: u32, radius: f64 },
    /// First, middle and last points of the regular polygon.
    Rectangular { sides: u32, radius: f64 },
    /// Regular polygon whose corners are replaced by tangent arcs.
    #[serde(rename_all = "camelCase")]
    Rounded {
        sides: u32,
        radius: f64,
        corner_radius: f64,
        segments_per_corner: u32,
    },
}

impl ShapeDescriptor {
    /// Returns the number of sides of the underlying polygon.
    pub fn sides(&self) -> u32 {
        match *self {
            Self::Polygon { sides, .. }
            | Self::Rectangular { sides, .. }
            | Self::Rounded { sides, .. } => sides,
        }
    }

    /// Returns the circumradius of the underlying polygon.
    pub fn radius(&self) -> f64 {
        match *self {
            Self::Polygon { radius, .. }
            | Self::Rectangular { radius, .. }
            | Self::Rounded { radius, .. } => radius,
        }
    }

    /// Returns how many points [`build`](Self::build) produces.
    ///
    /// Saturates at `usize::MAX` for rounded shapes too large to address.
    pub fn point_count(&self) -> usize {
        match *self {
            Self::Polygon { sides, .. } => sides as usize,
            Self::Rectangular { sides, .. } => {
                if sides % 2 == 0 {
                    4
                } else {
                    3
                }
            }
            Self::Rounded {
                sides,
                segments_per_corner,
                ..
            } => (sides as usize)
                .checked_mul((segments_per_corner as usize).saturating_add(1))
                .unwrap_or(usize::MAX),
        }
    }

    /// Rejects parameters that cannot describe a cross-section.
    ///
    /// Corner radii that are merely too large for the polygon pass; they
    /// produce self-intersecting arcs rather than an error.
    pub fn validate(&self) -> Result<()> {
        let sides = self.sides();
        if sides < MIN_SIDES {
            return Err(MobiusError::invalid_shape(format!(
                "sides must be >= {MIN_SIDES}, got {sides}"
            )));
        }
        check_length("radius", self.radius())?;

        if let Self::Rounded {
            corner_radius,
            segments_per_corner,
            ..
        } = *self
        {
            check_length("corner radius", corner_radius)?;
            if segments_per_corner < MIN_SEGMENTS_PER_CORNER {
                return Err(MobiusError::invalid_shape(format!(
                    "segments per corner must be >= {MIN_SEGMENTS_PER_CORNER}, got {segments_per_corner}"
                )));
            }
        }
        Ok(())
    }

    /// Builds a fresh cross-section for this shape.
    pub fn build(&self) -> CrossSection {
        let points = match *self {
            Self::Polygon { sides, radius } => polygon_points(sides, radius),
            Self::Rectangular { sides, radius } => rectangular_points(sides, radius),
            Self::Rounded {
                sides,
                radius,
                corner_radius,
                segments_per_corner,
            } => rounded_points(sides, radius, corner_radius, segments_per_corner),
        };
        CrossSection::new(points)
    }
}

/// Lengths must be finite and non-negative.
pub(crate) fn check_length(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MobiusError::invalid_shape(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}
