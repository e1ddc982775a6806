//! # Graphics Module
//!
//! Mesh generation and the data it produces.
//!
//! - **Geometry** ([`geometry`]) - parametric solid generators
//! - **Meshes** ([`mesh`]) - vertex format, indexed meshes and their GPU upload
//! - **Colors** ([`color`]) - flat RGB colors applied to generated vertices
//!
//! ## Usage
//!
//! ```no_run
//! use solidgen::gfx::geometry::{generate_cylinder, CylinderConfig};
//! use solidgen::gfx::mesh::GpuMesh;
//!
//! # fn upload(device: &wgpu::Device) -> solidgen::Result<()> {
//! let mesh = generate_cylinder(&CylinderConfig::default())?;
//! let gpu_mesh = GpuMesh::upload(device, &mesh, "Cylinder");
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod geometry;
pub mod mesh;

pub use color::Color;
pub use geometry::{Shape, Tessellate};
pub use mesh::{GpuMesh, Mesh, Vertex};
