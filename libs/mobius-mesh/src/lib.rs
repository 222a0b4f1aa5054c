//! # Mobius Mesh
//!
//! Triangle mesh generation for twisted rings: a polygonal cross-section
//! swept around a circle while rotating about its own center, closed with a
//! seam that reconnects the last section to the first shifted by the twist.
//!
//! ## Architecture
//!
//! ```text
//! ShapeDescriptor → CrossSection → sweep → [CrossSection] → stitch → Mesh
//! ```
//!
//! - **cross_section**: regular polygon, reduced "rectangular" and
//!   rounded-corner outlines in the XY plane
//! - **sweep**: twist, face outward and translate each section onto the ring
//! - **stitch**: quad strips between neighbours, twisted seam, optional caps
//! - **mesh**: flat triangle buffer with position-keyed smooth normals
//! - **params**: the UI parameter record and its query-string form
//!
//! ## Usage
//!
//! ```rust
//! use mobius_mesh::{generate, ShapeDescriptor, SweepConfig};
//!
//! let shape = ShapeDescriptor::Polygon { sides: 3, radius: 1.0 };
//! let mesh = generate(&shape, &SweepConfig::new(5.0, 8, 0)).unwrap();
//! assert_eq!(mesh.triangle_count(), 48);
//! ```

pub mod cross_section;
pub mod error;
pub mod mesh;
pub mod params;
pub mod stitch;
pub mod sweep;

pub use cross_section::{CrossSection, ShapeDescriptor};
pub use error::{MobiusError, Result};
pub use mesh::Mesh;
pub use params::{GeometryType, MobiusParams};
pub use sweep::SweepConfig;

use tracing::{debug, instrument};

/// Surfaces to emit and how to sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshOptions {
    /// Emit the side bands between consecutive sections
    pub fill_sides: bool,
    /// Fan-fill every cross-section
    pub fill_caps: bool,
    /// Build sections on the rayon pool when the `parallel` feature is on
    pub parallel: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            fill_sides: true,
            fill_caps: false,
            parallel: true,
        }
    }
}

/// Generates a ring mesh with smooth normals using default options.
///
/// # Errors
///
/// Fails if the shape or sweep parameters are invalid, or the mesh would be
/// too large.
pub fn generate(shape: &ShapeDescriptor, config: &SweepConfig) -> Result<Mesh> {
    generate_with_options(shape, config, &MeshOptions::default())
}

/// Generates a ring mesh with smooth normals.
///
/// # Arguments
///
/// * `shape` - Cross-section outline, rebuilt fresh for every segment
/// * `config` - Ring radius, segment count and twist
/// * `options` - Which surfaces to emit and whether to sweep in parallel
#[instrument(
    skip_all,
    fields(
        sides = shape.sides(),
        segments = config.segment_count,
        twist = config.twist_count
    )
)]
pub fn generate_with_options(
    shape: &ShapeDescriptor,
    config: &SweepConfig,
    options: &MeshOptions,
) -> Result<Mesh> {
    shape.validate()?;
    config.validate()?;
    stitch::check_triangle_limit(config.segment_count as usize, shape.point_count(), options)?;

    let sections = if options.parallel {
        sweep::sweep_parallel(|| shape.build(), config)
    } else {
        sweep::sweep(|| shape.build(), config)
    };

    let mut mesh = stitch::stitch(&sections, config.twist_count, options)?;
    mesh.compute_normals();

    debug!(
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        "generated ring mesh"
    );
    Ok(mesh)
}

/// Generates a ring mesh from a UI parameter record.
pub fn generate_from_params(params: &MobiusParams) -> Result<Mesh> {
    generate(&params.shape_descriptor(), &params.sweep_config())
}
