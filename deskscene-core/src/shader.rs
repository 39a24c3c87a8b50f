//! The fixed shader interface the scene writes to.
//!
//! The scene never talks to a graphics API directly. It sets named uniforms and asks for basic
//! meshes to be drawn through a [`SceneBackend`], which the client implements on top of OpenGL.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::shapes::BasicMesh;

pub const MODEL: &str = "model";
pub const VIEW: &str = "view";
pub const PROJECTION: &str = "projection";
pub const VIEW_POSITION: &str = "viewPosition";
pub const OBJECT_COLOR: &str = "objectColor";
pub const OBJECT_TEXTURE: &str = "objectTexture";
pub const USE_TEXTURE: &str = "bUseTexture";
pub const USE_LIGHTING: &str = "bUseLighting";
pub const UV_SCALE: &str = "UVscale";
pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
pub const MATERIAL_SPECULAR: &str = "material.specularColor";
pub const MATERIAL_SHININESS: &str = "material.shininess";

/// A value written to a uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec2> for UniformValue {
    fn from(value: Vec2) -> Self {
        UniformValue::Vec2(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}

/// Receives everything the scene issues during a frame.
pub trait SceneBackend {
    /// Writes a uniform of the active shader program.
    fn set_uniform(&mut self, name: &str, value: UniformValue);

    /// Draws a basic mesh with the uniforms currently set.
    fn draw_mesh(&mut self, mesh: BasicMesh);

    /// Convenience wrapper over [`SceneBackend::set_uniform`].
    fn set<T: Into<UniformValue>>(&mut self, name: &str, value: T)
    where
        Self: Sized,
    {
        self.set_uniform(name, value.into());
    }
}

/// A backend that records every call, used to inspect what a frame issues.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub calls: Vec<BackendCall>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Uniform(String, UniformValue),
    Draw(BasicMesh),
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// All draws in issue order.
    pub fn draws(&self) -> Vec<BasicMesh> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::Draw(mesh) => Some(*mesh),
                BackendCall::Uniform(..) => None,
            })
            .collect()
    }

    /// Every value written to `name`, in order.
    pub fn writes(&self, name: &str) -> Vec<UniformValue> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::Uniform(n, value) if n == name => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// The value of every uniform at the moment of each draw.
    pub fn draw_states(&self) -> Vec<(BasicMesh, std::collections::HashMap<String, UniformValue>)> {
        let mut state = std::collections::HashMap::new();
        let mut states = Vec::new();
        for call in &self.calls {
            match call {
                BackendCall::Uniform(name, value) => {
                    state.insert(name.clone(), *value);
                }
                BackendCall::Draw(mesh) => states.push((*mesh, state.clone())),
            }
        }
        states
    }
}

impl SceneBackend for RecordingBackend {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.calls.push(BackendCall::Uniform(name.to_string(), value));
    }

    fn draw_mesh(&mut self, mesh: BasicMesh) {
        self.calls.push(BackendCall::Draw(mesh));
    }
}
