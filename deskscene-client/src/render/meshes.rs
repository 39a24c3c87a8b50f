//! GPU copies of the basic meshes.

use std::{collections::HashMap, sync::Arc};

use deskscene_core::{BasicMesh, shapes::ShapeVertex};
use glam::Vec3;
use glow::HasContext;

use crate::abs::{Mesh, Vertex};

impl Vertex for ShapeVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<ShapeVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Normal attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);

            // Texture coordinate attribute
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(
                2,
                2,
                glow::FLOAT,
                false,
                stride,
                (2 * size_of::<Vec3>()) as i32,
            );
        }
    }
}

/// Every basic mesh, uploaded once no matter how often it is drawn.
pub struct BasicMeshes {
    meshes: HashMap<BasicMesh, Mesh>,
}

impl BasicMeshes {
    /// Generates and uploads all basic meshes.
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let start = std::time::Instant::now();

        let mut meshes = HashMap::with_capacity(BasicMesh::ALL.len());
        for kind in BasicMesh::ALL {
            let data = kind.build();
            let mesh = Mesh::new(gl, &data.vertices, &data.indices)?;
            log::debug!("Uploaded {kind:?} mesh with {} indices", mesh.index_count());
            meshes.insert(kind, mesh);
        }

        log::info!("Generated basic meshes in {:?}", start.elapsed());

        Ok(Self { meshes })
    }

    pub fn draw(&self, kind: BasicMesh) {
        if let Some(mesh) = self.meshes.get(&kind) {
            mesh.draw();
        }
    }
}
