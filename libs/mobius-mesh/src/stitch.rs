//! # Stitching
//!
//! Connects consecutive swept cross-sections into a closed tube.
//!
//! ## Algorithm
//!
//! For section `i` and the next section `(i + 1) mod n`, every point index
//! `j` forms a quad `a1 = A[j]`, `a2 = A[j+1]`, `b1 = B[j+k]`, `b2 = B[j+k+1]`
//! (indices mod point count), emitted as triangles `(a1, a2, b2)` and
//! `(a1, b2, b1)`.
//!
//! `k` is zero except on the seam (last section back to the first) where it
//! equals the twist count. This integer shift is only exact when the
//! accumulated twist lands on whole point-index steps; the rounded shape,
//! whose symmetry is coarser than its point spacing, shows a slight seam.
//!
//! Optional end caps fan-triangulate each section from its centroid.

use crate::cross_section::CrossSection;
use crate::error::{MobiusError, Result};
use crate::mesh::Mesh;
use crate::MeshOptions;
use config::constants::MAX_TRIANGLES;
use tracing::debug;

/// Stitches swept cross-sections into a triangle mesh.
///
/// Normals are not computed here; see [`Mesh::compute_normals`].
///
/// # Arguments
///
/// * `sections` - Swept cross-sections in ring order, equal point counts
/// * `twist_count` - Seam offset, in point-index steps
/// * `options` - Which surfaces to emit
///
/// # Errors
///
/// Fails if the sections differ in point count or the mesh would exceed
/// [`MAX_TRIANGLES`].
///
/// # Example
///
/// ```rust
/// use mobius_mesh::cross_section::ShapeDescriptor;
/// use mobius_mesh::stitch::stitch;
/// use mobius_mesh::sweep::{sweep, SweepConfig};
/// use mobius_mesh::MeshOptions;
///
/// let config = SweepConfig::new(5.0, 8, 0);
/// let shape = ShapeDescriptor::Polygon { sides: 3, radius: 1.0 };
/// let sections = sweep(|| shape.build(), &config);
/// let mesh = stitch(&sections, 0, &MeshOptions::default()).unwrap();
/// assert_eq!(mesh.triangle_count(), 48);
/// ```
pub fn stitch(sections: &[CrossSection], twist_count: i32, options: &MeshOptions) -> Result<Mesh> {
    let Some(first) = sections.first() else {
        return Ok(Mesh::new());
    };
    let point_count = first.len();

    if let Some((index, section)) = sections
        .iter()
        .enumerate()
        .find(|(_, s)| s.len() != point_count)
    {
        return Err(MobiusError::MismatchedCrossSections {
            index,
            expected: point_count,
            found: section.len(),
        });
    }

    let count = check_triangle_limit(sections.len(), point_count, options)?;
    let mut mesh = Mesh::with_capacity(count);

    if options.fill_caps {
        for section in sections {
            add_cap(&mut mesh, section);
        }
    }

    if options.fill_sides {
        let n = sections.len();
        for i in 0..n {
            let offset = seam_offset(i, n, twist_count);
            add_band(&mut mesh, &sections[i], &sections[(i + 1) % n], offset);
        }
    }

    debug!(
        sections = sections.len(),
        point_count,
        triangles = mesh.triangle_count(),
        "stitched ring"
    );
    Ok(mesh)
}

/// Index shift between section `index` and its successor.
///
/// Zero everywhere except the final pair, which wraps back to section 0.
#[inline]
pub fn seam_offset(index: usize, section_count: usize, twist_count: i32) -> i64 {
    if index + 1 == section_count {
        twist_count as i64
    } else {
        0
    }
}

/// Number of triangles [`stitch`] emits for the given layout, or `None` if
/// it does not fit in a `usize`.
pub fn triangle_count(
    section_count: usize,
    point_count: usize,
    options: &MeshOptions,
) -> Option<usize> {
    let mut per_point = 0;
    if options.fill_caps {
        per_point += 1;
    }
    if options.fill_sides {
        per_point += 2;
    }
    section_count.checked_mul(point_count)?.checked_mul(per_point)
}

/// Rejects layouts whose triangle count exceeds [`MAX_TRIANGLES`].
///
/// Only counts are involved, so callers can run this before sweeping.
pub fn check_triangle_limit(
    section_count: usize,
    point_count: usize,
    options: &MeshOptions,
) -> Result<usize> {
    match triangle_count(section_count, point_count, options) {
        Some(count) if count <= MAX_TRIANGLES => Ok(count),
        count => Err(MobiusError::TooManyTriangles {
            count: count.unwrap_or(usize::MAX),
            max: MAX_TRIANGLES,
        }),
    }
}

fn add_band(mesh: &mut Mesh, a: &CrossSection, b: &CrossSection, offset: i64) {
    let p = a.len() as i64;
    let wrap = |i: i64| i.rem_euclid(p) as usize;

    for j in 0..p {
        let a1 = a.point(wrap(j));
        let a2 = a.point(wrap(j + 1));
        let b1 = b.point(wrap(j + offset));
        let b2 = b.point(wrap(j + offset + 1));

        mesh.add_triangle(a1, a2, b2);
        mesh.add_triangle(a1, b2, b1);
    }
}

fn add_cap(mesh: &mut Mesh, section: &CrossSection) {
    let center = section.centroid();
    let n = section.len();
    for i in 0..n {
        mesh.add_triangle(center, section.point(i), section.point((i + 1) % n));
    }
}

#[cfg(test)]
mod tests;
