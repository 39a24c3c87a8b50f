//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! This module also provides the [`Uniform`] trait for setting uniform variables in shader
//! programs.

use std::{cell::RefCell, collections::HashMap, sync::Arc};

use deskscene_core::UniformValue;
use glam::{Mat4, Vec2, Vec3, Vec4};
use glow::HasContext;

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl.create_shader(shader_type)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(log);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be written to a uniform location.
pub trait Uniform {
    /// Writes the value to `location` of the program currently in use.
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for bool {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self as i32) }
    }
}

impl Uniform for i32 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self) }
    }
}

impl Uniform for f32 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_f32(Some(location), *self) }
    }
}

impl Uniform for Vec2 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_2_f32(Some(location), self.x, self.y) }
    }
}

impl Uniform for Vec3 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_3_f32(Some(location), self.x, self.y, self.z) }
    }
}

impl Uniform for Vec4 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_4_f32(Some(location), self.x, self.y, self.z, self.w) }
    }
}

impl Uniform for Mat4 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref()) }
    }
}

impl Uniform for UniformValue {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        match self {
            UniformValue::Bool(v) => v.upload(gl, location),
            UniformValue::Int(v) => v.upload(gl, location),
            UniformValue::Float(v) => v.upload(gl, location),
            UniformValue::Vec2(v) => v.upload(gl, location),
            UniformValue::Vec3(v) => v.upload(gl, location),
            UniformValue::Vec4(v) => v.upload(gl, location),
            UniformValue::Mat4(v) => v.upload(gl, location),
        }
    }
}

impl<T: Uniform> Uniform for &T {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).upload(gl, location);
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
///
/// Uniform locations are looked up once per name and cached, since the scene writes a few
/// hundred uniforms every frame. Names the driver does not know about (unused or optimised
/// out) are cached as missing and silently skipped.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
    locations: RefCell<HashMap<String, Option<glow::UniformLocation>>>,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let program = gl.create_program()?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(log);
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
                locations: RefCell::new(HashMap::new()),
            })
        }
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform variable in the shader program. The program must be in use.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        let mut locations = self.locations.borrow_mut();
        let location = locations.entry(name.to_string()).or_insert_with(|| {
            let location = unsafe { self.gl.get_uniform_location(self.id, name) };
            if location.is_none() {
                log::debug!("Uniform '{name}' is not active in the program");
            }
            location
        });
        if let Some(location) = location {
            value.upload(&self.gl, location);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
