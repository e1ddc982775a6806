//! Property checks shared by the generator tests.

use cgmath::{InnerSpace, Vector3};

use crate::gfx::mesh::Mesh;

/// Triangles whose cross product is smaller than this fraction of the squared
/// mesh diagonal are collapsed pole or seam triangles and carry no orientation.
const MIN_RELATIVE_FACE_AREA: f32 = 1e-6;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_close(actual: [f32; 3], expected: [f32; 3]) {
    let delta = Vector3::from(actual) - Vector3::from(expected);
    assert!(
        delta.magnitude() < 1e-5,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

pub fn assert_indices_in_bounds(mesh: &Mesh) {
    let count = mesh.vertex_count();
    for (t, triangle) in mesh.triangles().iter().enumerate() {
        for &index in triangle {
            assert!(
                (index as usize) < count,
                "triangle {} references vertex {} of {}",
                t,
                index,
                count
            );
        }
    }
}

pub fn assert_unit_normals(mesh: &Mesh) {
    for (i, vertex) in mesh.vertices().iter().enumerate() {
        let length = Vector3::from(vertex.normal).magnitude();
        assert!(
            (length - 1.0).abs() < 1e-5,
            "vertex {} normal {:?} has length {}",
            i,
            vertex.normal,
            length
        );
    }
}

/// Face normal by the right-hand rule must agree with every stored normal
pub fn assert_outward_winding(mesh: &Mesh) {
    let vertices = mesh.vertices();
    let diagonal = mesh.bounds().map_or(0.0, |bounds| bounds.size().magnitude2());
    let min_face = MIN_RELATIVE_FACE_AREA * diagonal;

    for (t, &[a, b, c]) in mesh.triangles().iter().enumerate() {
        let pa = Vector3::from(vertices[a as usize].position);
        let pb = Vector3::from(vertices[b as usize].position);
        let pc = Vector3::from(vertices[c as usize].position);

        let face = (pb - pa).cross(pc - pa);
        if face.magnitude() <= min_face {
            continue;
        }

        for index in [a, b, c] {
            let normal = Vector3::from(vertices[index as usize].normal);
            assert!(
                face.dot(normal) > 0.0,
                "triangle {} {:?} winds against the normal of vertex {}",
                t,
                [a, b, c],
                index
            );
        }
    }
}
