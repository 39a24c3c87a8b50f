//! The OpenGL implementation of [`SceneBackend`].

use deskscene_core::{BasicMesh, SceneBackend, UniformValue};

use super::meshes::BasicMeshes;
use crate::abs::ShaderProgram;

/// Forwards uniform writes to a shader program and draws with the uploaded basic meshes.
///
/// The program has to be in use while the backend is.
pub struct GlBackend<'a> {
    program: &'a ShaderProgram,
    meshes: &'a BasicMeshes,
}

impl<'a> GlBackend<'a> {
    pub fn new(program: &'a ShaderProgram, meshes: &'a BasicMeshes) -> Self {
        Self { program, meshes }
    }
}

impl SceneBackend for GlBackend<'_> {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.program.set_uniform(name, value);
    }

    fn draw_mesh(&mut self, mesh: BasicMesh) {
        self.meshes.draw(mesh);
    }
}
