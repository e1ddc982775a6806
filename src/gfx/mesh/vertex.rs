//! # Vertex Data Structures
//!
//! The single vertex format shared by every generated shape. It is uploaded
//! to the GPU as-is, so the field order is part of the shader interface.

use std::mem;

/// A vertex carrying position, normal, flat color and texture coordinates.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute keeps the fields in declaration order with no
/// padding, 44 bytes per vertex:
///
/// | Field        | Location | Offset | Format      |
/// |--------------|----------|--------|-------------|
/// | `position`   | 0        | 0      | `Float32x3` |
/// | `normal`     | 1        | 12     | `Float32x3` |
/// | `color`      | 2        | 24     | `Float32x3` |
/// | `tex_coords` | 3        | 36     | `Float32x2` |
///
/// # Examples
///
/// ```
/// use solidgen::gfx::mesh::Vertex;
///
/// let vertex = Vertex {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     color: [0.0, 0.0, 1.0],
///     tex_coords: [0.0, 0.0],
/// };
/// assert_eq!(bytemuck::bytes_of(&vertex).len(), 44);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position [x, y, z]
    pub position: [f32; 3],
    /// Unit normal [nx, ny, nz], pointing out of the solid
    pub normal: [f32; 3],
    /// RGB color, each channel in [0, 1]
    pub color: [f32; 3],
    /// Texture coordinates [u, v]; zero for shapes without a UV mapping
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = [
        wgpu::VertexAttribute {
            offset: mem::offset_of!(Vertex, position) as wgpu::BufferAddress,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: mem::offset_of!(Vertex, normal) as wgpu::BufferAddress,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: mem::offset_of!(Vertex, color) as wgpu::BufferAddress,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: mem::offset_of!(Vertex, tex_coords) as wgpu::BufferAddress,
            shader_location: 3,
            format: wgpu::VertexFormat::Float32x2,
        },
    ];

    /// Vertex with no texture mapping
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            position,
            normal,
            color,
            tex_coords: [0.0, 0.0],
        }
    }

    /// Vertex with texture coordinates
    pub fn with_uv(position: [f32; 3], normal: [f32; 3], color: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            color,
            tex_coords: uv,
        }
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// Attributes map to shader locations 0 (position), 1 (normal),
    /// 2 (color) and 3 (texture coordinates).
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
