//! The core of the desk scene renderer. This crate contains everything that does not need an
//! OpenGL context: texture and material tables, transform composition, the light rig, the
//! free-fly camera, procedural mesh data and the scene itself, issued against the
//! [`shader::SceneBackend`] trait.

pub mod camera;
pub mod clock;
pub mod lights;
pub mod registry;
pub mod scene;
pub mod shader;
pub mod shapes;
pub mod transform;

pub use clock::ClockTime;
pub use registry::{Material, MaterialRegistry, RegistryError, TextureRegistry};
pub use scene::SceneManager;
pub use shader::{SceneBackend, UniformValue};
pub use shapes::BasicMesh;
pub use transform::Transform;
