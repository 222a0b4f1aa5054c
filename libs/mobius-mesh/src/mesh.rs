//! # Mesh Data Structure
//!
//! Flat triangle buffer with smoothed per-vertex normals.

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;
use std::collections::HashMap;

/// A non-indexed triangle mesh.
///
/// Every triangle stores its own three positions, in winding order. Normals
/// are smoothed across all entries that share a position, so the mesh
/// shades as a continuous surface even though positions are repeated.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// mesh.compute_normals();
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.normals().unwrap()[0], DVec3::Z);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, three per triangle
    positions: Vec<DVec3>,
    /// Optional vertex normals, one per position entry
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with room for `triangle_count` triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangle_count * 3),
            normals: None,
        }
    }

    /// Returns the number of vertex entries (three per triangle).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends a triangle. Any previously computed normals are dropped.
    pub fn add_triangle(&mut self, a: DVec3, b: DVec3, c: DVec3) {
        self.positions.extend_from_slice(&[a, b, c]);
        self.normals = None;
    }

    /// Returns all vertex positions, three per triangle.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [DVec3; 3] {
        let base = index * 3;
        [
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ]
    }

    /// Iterates over triangles in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.positions.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes smooth vertex normals.
    ///
    /// Each triangle's unnormalized face normal (area weighted) is added to
    /// a running sum keyed by vertex position; every entry at that position
    /// then receives the normalized sum.
    pub fn compute_normals(&mut self) {
        let mut sums: HashMap<[u64; 3], DVec3> = HashMap::with_capacity(self.positions.len() / 2);

        for tri in self.positions.chunks_exact(3) {
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            for p in tri {
                *sums.entry(position_key(*p)).or_insert(DVec3::ZERO) += normal;
            }
        }

        let normals = self
            .positions
            .iter()
            .map(|p| {
                sums.get(&position_key(*p))
                    .map_or(DVec3::ZERO, |n| n.normalize_or_zero())
            })
            .collect();

        self.normals = Some(normals);
    }

    /// Returns the number of distinct vertex positions.
    pub fn unique_vertex_count(&self) -> usize {
        let mut seen = std::collections::HashSet::with_capacity(self.positions.len() / 2);
        for p in &self.positions {
            seen.insert(position_key(*p));
        }
        seen.len()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for v in &self.positions[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Returns true if every position (and normal, if present) is finite.
    pub fn is_finite(&self) -> bool {
        self.positions.iter().all(|p| p.is_finite())
            && self
                .normals
                .as_ref()
                .map_or(true, |n| n.iter().all(|v| v.is_finite()))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Position count is a multiple of three
    /// - All positions are finite
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.positions.len() % 3 != 0 || !self.is_finite() {
            return false;
        }

        self.triangles().all(|[a, b, c]| {
            (b - a).cross(c - a).length() >= VERTEX_MERGE_EPSILON
        })
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

/// Hash key for exact position equality; `-0.0` and `0.0` share a key.
fn position_key(p: DVec3) -> [u64; 3] {
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
