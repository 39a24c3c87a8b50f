//! Module for anything related to rendering.
//!
//! This module contains the GPU side of the basic meshes, the scene textures, the OpenGL
//! implementation of the scene backend and the embedded shaders.

pub mod backend;
pub mod meshes;
pub mod textures;

use std::sync::Arc;

use include_dir::{Dir, include_dir};

use crate::abs::{Shader, ShaderProgram};

static SHADERS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/render/shaders");

/// Compiles and links the program stored under `shaders/<name>/`.
pub fn shader_program(gl: &Arc<glow::Context>, name: &str) -> Result<ShaderProgram, String> {
    let source = |stage: &str| {
        let path = format!("{name}/{stage}.glsl");
        SHADERS
            .get_file(&path)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| format!("Missing shader source {path}"))
    };

    let vert = Shader::new(gl, glow::VERTEX_SHADER, source("vert")?)
        .map_err(|e| format!("{name} vertex shader: {e}"))?;
    let frag = Shader::new(gl, glow::FRAGMENT_SHADER, source("frag")?)
        .map_err(|e| format!("{name} fragment shader: {e}"))?;
    ShaderProgram::new(gl, &[&vert, &frag]).map_err(|e| format!("{name} program: {e}"))
}
