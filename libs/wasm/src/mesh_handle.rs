//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use mobius_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to ring mesh data that can be accessed from JavaScript.
///
/// The mesh is non-indexed: every three entries of `vertices()` form one
/// triangle, and `normals()` holds one normal per entry.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_from_query(window.location.search);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// const material = new THREE.MeshStandardMaterial({ color: mesh.colour });
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Display colour carried from the parameter record
    colour: String,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertex entries.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the display colour, e.g. `#3388ff`.
    #[wasm_bindgen(getter)]
    pub fn colour(&self) -> String {
        self.colour.clone()
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a Mesh, computing normals if missing.
    pub fn from_mesh(mut mesh: Mesh, colour: impl Into<String>) -> Self {
        if mesh.normals().is_none() {
            mesh.compute_normals();
        }

        Self {
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
            vertices: mesh.positions_f32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            colour: colour.into(),
        }
    }

    /// Borrows the position buffer without copying.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Borrows the normal buffer without copying.
    pub fn normal_buffer(&self) -> &[f32] {
        &self.normals
    }
}
