//! GPU upload of generated meshes.
//!
//! The generators never touch the graphics API. This is the hand-off point:
//! a [`Mesh`] goes in, immutable vertex and index buffers come out.

use std::ops::Range;

use wgpu::util::DeviceExt;
use wgpu::Device;

use super::{Mesh, Vertex};

/// Vertex and index buffers of one uploaded [`Mesh`]
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    /// Copies the mesh into fresh `VERTEX` and `INDEX` buffers.
    ///
    /// Buffers use the [`Vertex::desc`] layout and `Uint32` indices.
    pub fn upload(device: &Device, mesh: &Mesh, label: &str) -> Self {
        log::trace!(
            "uploading '{}': {} vertices ({} bytes), {} indices",
            label,
            mesh.vertex_count(),
            mesh.vertex_count() * std::mem::size_of::<Vertex>(),
            mesh.indices().len()
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices().len() as u32,
        }
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Indexed draw calls for uploaded meshes
pub trait DrawMesh<'a> {
    fn draw_mesh(&mut self, mesh: &'a GpuMesh);
    fn draw_mesh_instanced(&mut self, mesh: &'a GpuMesh, instances: Range<u32>);
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b GpuMesh) {
        self.draw_mesh_instanced(mesh, 0..1);
    }

    fn draw_mesh_instanced(&mut self, mesh: &'b GpuMesh, instances: Range<u32>) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }
}
