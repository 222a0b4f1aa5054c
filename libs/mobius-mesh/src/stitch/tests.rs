//! # Stitching Tests
//!
//! Triangle counts, quad correspondence and the twisted seam.

use super::*;
use crate::cross_section::ShapeDescriptor;
use crate::sweep::{place_section, sweep, SweepConfig};
use glam::DVec3;

fn swept(sides: u32, segments: u32, twist: i32) -> Vec<CrossSection> {
    let shape = ShapeDescriptor::Polygon { sides, radius: 1.0 };
    sweep(|| shape.build(), &SweepConfig::new(5.0, segments, twist))
}

/// Triangles expected for quad `j` between `a` and `b` at the given shift.
fn expected_quad(a: &CrossSection, b: &CrossSection, j: usize, offset: usize) -> [[DVec3; 3]; 2] {
    let p = a.len();
    let a1 = a.point(j);
    let a2 = a.point((j + 1) % p);
    let b1 = b.point((j + offset) % p);
    let b2 = b.point((j + offset + 1) % p);
    [[a1, a2, b2], [a1, b2, b1]]
}

#[test]
fn test_triangle_count_is_two_p_s() {
    for (sides, segments) in [(3, 2), (4, 10), (6, 7), (5, 1)] {
        let sections = swept(sides, segments, 0);
        let mesh = stitch(&sections, 0, &MeshOptions::default()).unwrap();
        assert_eq!(mesh.triangle_count(), 2 * sides as usize * segments as usize);
    }
}

#[test]
fn test_non_seam_pairs_have_no_offset() {
    let sections = swept(4, 10, 1);
    let mesh = stitch(&sections, 1, &MeshOptions::default()).unwrap();
    let p = 4;

    for i in 0..9 {
        for j in 0..p {
            let [t0, t1] = expected_quad(&sections[i], &sections[i + 1], j, 0);
            let base = (i * p + j) * 2;
            assert_eq!(mesh.triangle(base), t0);
            assert_eq!(mesh.triangle(base + 1), t1);
        }
    }
}

#[test]
fn test_seam_uses_twist_offset() {
    let sections = swept(4, 10, 1);
    let mesh = stitch(&sections, 1, &MeshOptions::default()).unwrap();
    let p = 4;
    let last = &sections[9];
    let first = &sections[0];

    for j in 0..p {
        let base = (9 * p + j) * 2;
        let [t0, t1] = expected_quad(last, first, j, 1);
        assert_eq!(mesh.triangle(base), t0);
        assert_eq!(mesh.triangle(base + 1), t1);

        // b1 is first[(j + 1) mod 4], not first[j]
        assert_eq!(mesh.triangle(base + 1)[2], first.point((j + 1) % 4));
        assert_ne!(mesh.triangle(base + 1)[2], first.point(j));
    }
}

#[test]
fn test_seam_closes_twisted_ring() {
    // A section placed one step past the end lands on section 0 shifted by
    // the twist, which is exactly what the seam quads connect to.
    let shape = ShapeDescriptor::Polygon { sides: 4, radius: 1.0 };
    let config = SweepConfig::new(5.0, 16, 1);
    let sections = sweep(|| shape.build(), &config);
    let wrapped = place_section(shape.build(), 16, &config);
    let mesh = stitch(&sections, 1, &MeshOptions::default()).unwrap();

    for j in 0..4 {
        let [_, _, b1] = mesh.triangle((15 * 4 + j) * 2 + 1);
        assert!(wrapped.point(j).distance(b1) < 1e-9);
    }
}

#[test]
fn test_negative_twist_wraps() {
    let sections = swept(4, 6, -1);
    let mesh = stitch(&sections, -1, &MeshOptions::default()).unwrap();
    let p = 4;

    for j in 0..p {
        let base = (5 * p + j) * 2;
        let [_, _, b1] = mesh.triangle(base + 1);
        assert_eq!(b1, sections[0].point((j + p - 1) % p));
    }
}

#[test]
fn test_twist_larger_than_point_count() {
    let sections = swept(3, 5, 7);
    let mesh = stitch(&sections, 7, &MeshOptions::default()).unwrap();
    let [t0, _] = expected_quad(&sections[4], &sections[0], 0, 7 % 3);
    assert_eq!(mesh.triangle(4 * 3 * 2), t0);
}

#[test]
fn test_seam_offset() {
    assert_eq!(seam_offset(0, 10, 3), 0);
    assert_eq!(seam_offset(8, 10, 3), 0);
    assert_eq!(seam_offset(9, 10, 3), 3);
    assert_eq!(seam_offset(0, 1, -2), -2);
}

#[test]
fn test_caps_emitted_first() {
    let sections = swept(5, 4, 0);
    let options = MeshOptions {
        fill_caps: true,
        ..MeshOptions::default()
    };
    let mesh = stitch(&sections, 0, &options).unwrap();
    assert_eq!(mesh.triangle_count(), 4 * 5 + 2 * 5 * 4);

    let center = sections[0].centroid();
    let [c, a, b] = mesh.triangle(0);
    assert_eq!(c, center);
    assert_eq!(a, sections[0].point(0));
    assert_eq!(b, sections[0].point(1));
}

#[test]
fn test_caps_only() {
    let sections = swept(3, 4, 0);
    let options = MeshOptions {
        fill_sides: false,
        fill_caps: true,
        ..MeshOptions::default()
    };
    let mesh = stitch(&sections, 0, &options).unwrap();
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(triangle_count(4, 3, &options), Some(12));
}

#[test]
fn test_empty_input() {
    let mesh = stitch(&[], 1, &MeshOptions::default()).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn test_mismatched_sections_rejected() {
    let mut sections = swept(4, 3, 0);
    sections.push(ShapeDescriptor::Polygon { sides: 5, radius: 1.0 }.build());

    let err = stitch(&sections, 0, &MeshOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        MobiusError::MismatchedCrossSections {
            index: 3,
            expected: 4,
            found: 5
        }
    ));
}

#[test]
fn test_triangle_limit() {
    let options = MeshOptions::default();
    assert_eq!(check_triangle_limit(100, 4, &options).unwrap(), 800);

    let err = check_triangle_limit(6000, 1000, &options).unwrap_err();
    assert!(matches!(
        err,
        MobiusError::TooManyTriangles {
            count: 12_000_000,
            ..
        }
    ));

    assert_eq!(triangle_count(usize::MAX, 2, &options), None);
    assert!(matches!(
        check_triangle_limit(usize::MAX, 2, &options),
        Err(MobiusError::TooManyTriangles {
            count: usize::MAX,
            ..
        })
    ));
}
