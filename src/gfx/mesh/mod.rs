//! # Indexed Meshes
//!
//! A [`Mesh`] is the output of every generator: a vertex buffer plus a list of
//! triangles indexing into it. Meshes are immutable once built; regenerate to
//! change anything.
//!
//! - [`Vertex`] - the shared 44-byte vertex record
//! - [`GpuMesh`] - the same buffers uploaded to wgpu, drawn through [`DrawMesh`]

pub mod gpu;
pub mod vertex;

pub use gpu::{DrawMesh, GpuMesh};
pub use vertex::Vertex;

use cgmath::Vector3;

/// Axis-aligned bounding box of a mesh's positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Bounds {
    /// Smallest box containing every vertex position, `None` if there are none
    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        let start = Vector3::from(first.position);

        let (min, max) = rest.iter().fold((start, start), |(min, max), vertex| {
            let p = Vector3::from(vertex.position);
            (
                Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        });

        Some(Self { min, max })
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }
}

/// Generated geometry ready for GPU upload
///
/// Triangles are wound counter-clockwise when seen from outside the solid and
/// every index is smaller than [`Mesh::vertex_count`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub(crate) fn from_parts(vertices: Vec<Vertex>, triangles: Vec<[u32; 3]>) -> Self {
        debug_assert!(
            triangles
                .iter()
                .flatten()
                .all(|&index| (index as usize) < vertices.len()),
            "triangle index out of bounds"
        );
        Self {
            vertices,
            triangles,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Flat index buffer, three entries per triangle
    pub fn indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Raw vertex bytes in the [`Vertex::desc`] layout
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_vertices(&self.vertices)
    }

    /// Hands over ownership of the vertex and triangle buffers
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<[u32; 3]>) {
        (self.vertices, self.triangles)
    }
}
