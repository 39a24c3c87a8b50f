//! The desk scene.
//!
//! [`SceneManager`] owns the texture and material tables and the light rig, and knows how to
//! turn them into uniform writes. Every frame it walks the same fixed list of objects, setting
//! a transform, a texture or colour and a material before each draw.

mod objects;
mod setup;

use glam::{Vec2, Vec3, Vec4};

pub use setup::{SCENE_TEXTURES, scene_materials};

use crate::{
    camera::Camera,
    clock::ClockTime,
    lights::SceneLights,
    registry::{MaterialRegistry, RegistryError, TextureRegistry},
    shader::{self, SceneBackend},
    shapes::BasicMesh,
    transform::Transform,
};

pub struct SceneManager<H> {
    pub textures: TextureRegistry<H>,
    pub materials: MaterialRegistry,
    pub lights: SceneLights,
}

impl<H> Default for SceneManager<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SceneManager<H> {
    /// Creates a scene manager with empty tables and the default light rig.
    pub fn new() -> Self {
        Self {
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
            lights: SceneLights::default(),
        }
    }

    /// Registers every material the scene uses.
    pub fn define_materials(&mut self) -> Result<(), RegistryError> {
        for material in scene_materials() {
            self.materials.define(material)?;
        }
        log::debug!("Defined {} materials", self.materials.len());
        Ok(())
    }

    /// Uploads the model matrix for the next draw.
    pub fn set_transformations<B: SceneBackend>(&self, backend: &mut B, transform: &Transform) {
        backend.set(shader::MODEL, transform.model_matrix());
    }

    /// Switches the next draw to a flat colour.
    pub fn set_shader_color<B: SceneBackend>(&self, backend: &mut B, color: Vec4) {
        backend.set(shader::USE_TEXTURE, false);
        backend.set(shader::OBJECT_COLOR, color);
    }

    /// Switches the next draw to the texture registered under `tag`.
    ///
    /// An unknown tag disables texturing instead of pointing the sampler at an unbound unit.
    pub fn set_shader_texture<B: SceneBackend>(&self, backend: &mut B, tag: &str) {
        match self.textures.find_slot(tag) {
            Some(slot) => {
                backend.set(shader::USE_TEXTURE, true);
                backend.set(shader::OBJECT_TEXTURE, slot as i32);
            }
            None => {
                log::trace!("No texture registered under '{tag}'");
                backend.set(shader::USE_TEXTURE, false);
            }
        }
    }

    /// Sets how many times textures repeat across a face.
    pub fn set_texture_uv_scale<B: SceneBackend>(&self, backend: &mut B, u: f32, v: f32) {
        backend.set(shader::UV_SCALE, Vec2::new(u, v));
    }

    /// Writes the material registered under `tag`. Unknown tags leave the material untouched.
    pub fn set_shader_material<B: SceneBackend>(&self, backend: &mut B, tag: &str) {
        match self.materials.find(tag) {
            Some(material) => {
                backend.set(shader::MATERIAL_DIFFUSE, material.diffuse_color);
                backend.set(shader::MATERIAL_SPECULAR, material.specular_color);
                backend.set(shader::MATERIAL_SHININESS, material.shininess);
            }
            None => log::trace!("No material registered under '{tag}'"),
        }
    }

    /// Writes the light rig.
    pub fn setup_scene_lights<B: SceneBackend>(&self, backend: &mut B) {
        self.lights.apply(backend);
    }

    /// Writes the view, projection and eye position of `camera`.
    pub fn set_camera<B: SceneBackend>(&self, backend: &mut B, camera: &Camera, aspect_ratio: f32) {
        backend.set(shader::VIEW, camera.view());
        backend.set(shader::PROJECTION, camera.projection(aspect_ratio));
        backend.set(shader::VIEW_POSITION, camera.position);
    }

    /// Issues every object of the scene.
    pub fn render_scene<B: SceneBackend>(&self, backend: &mut B, time: ClockTime) {
        self.render_desk(backend);
        self.render_lamp(backend);
        self.render_book(backend);
        self.render_room(backend);
        self.render_clock(backend, time);
    }

    fn draw_placed<B: SceneBackend>(
        &self,
        backend: &mut B,
        mesh: BasicMesh,
        scale: Vec3,
        rotation: Vec3,
        position: Vec3,
    ) {
        self.set_transformations(backend, &Transform::new(scale, rotation, position));
        backend.draw_mesh(mesh);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use glam::{Mat4, Vec4};

    use super::*;
    use crate::shader::{RecordingBackend, UniformValue};

    fn loaded_scene() -> SceneManager<u32> {
        let mut scene = SceneManager::new();
        scene.define_materials().unwrap();
        for (i, (_, tag)) in SCENE_TEXTURES.iter().enumerate() {
            scene.textures.register(*tag, i as u32 + 100).unwrap();
        }
        scene
    }

    fn render(scene: &SceneManager<u32>, time: ClockTime) -> RecordingBackend {
        let mut backend = RecordingBackend::new();
        scene.render_scene(&mut backend, time);
        backend
    }

    fn count(draws: &[BasicMesh], mesh: BasicMesh) -> usize {
        draws.iter().filter(|&&d| d == mesh).count()
    }

    fn model(state: &HashMap<String, UniformValue>) -> Mat4 {
        match state.get(shader::MODEL) {
            Some(UniformValue::Mat4(m)) => *m,
            other => panic!("model is {other:?}"),
        }
    }

    #[test]
    fn test_color_disables_texture() {
        let scene = loaded_scene();
        let mut backend = RecordingBackend::new();
        scene.set_shader_color(&mut backend, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(backend.writes(shader::USE_TEXTURE), vec![UniformValue::Bool(false)]);
        assert_eq!(
            backend.writes(shader::OBJECT_COLOR),
            vec![UniformValue::Vec4(Vec4::new(1.0, 0.0, 0.0, 1.0))]
        );
    }

    #[test]
    fn test_texture_binds_slot() {
        let scene = loaded_scene();
        let mut backend = RecordingBackend::new();
        scene.set_shader_texture(&mut backend, "crome");
        assert_eq!(backend.writes(shader::USE_TEXTURE), vec![UniformValue::Bool(true)]);
        assert_eq!(backend.writes(shader::OBJECT_TEXTURE), vec![UniformValue::Int(2)]);
    }

    #[test]
    fn test_unknown_texture_disables_texturing() {
        let scene = loaded_scene();
        let mut backend = RecordingBackend::new();
        scene.set_shader_texture(&mut backend, "");
        assert_eq!(backend.writes(shader::USE_TEXTURE), vec![UniformValue::Bool(false)]);
        assert!(backend.writes(shader::OBJECT_TEXTURE).is_empty());
    }

    #[test]
    fn test_material_writes_all_fields() {
        let scene = loaded_scene();
        let mut backend = RecordingBackend::new();
        scene.set_shader_material(&mut backend, "lamp_base");
        assert_eq!(
            backend.writes(shader::MATERIAL_DIFFUSE),
            vec![UniformValue::Vec3(Vec3::splat(0.7))]
        );
        assert_eq!(
            backend.writes(shader::MATERIAL_SPECULAR),
            vec![UniformValue::Vec3(Vec3::splat(0.4))]
        );
        assert_eq!(
            backend.writes(shader::MATERIAL_SHININESS),
            vec![UniformValue::Float(16.0)]
        );
    }

    #[test]
    fn test_unknown_material_writes_nothing() {
        let scene = loaded_scene();
        let mut backend = RecordingBackend::new();
        scene.set_shader_material(&mut backend, "velvet");
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn test_materials_cannot_be_defined_twice() {
        let mut scene = loaded_scene();
        assert!(matches!(
            scene.define_materials(),
            Err(RegistryError::DuplicateTag(_))
        ));
    }

    #[test]
    fn test_scene_draw_list() {
        let scene = loaded_scene();
        let draws = render(&scene, ClockTime::new(10, 10, 30)).draws();

        // desk 2 + legs 4 + book 2 covers + 8 pages + spine + room 6 + clock base + 3 hands
        assert_eq!(count(&draws, BasicMesh::Box), 27);
        // lamp base and two poles, clock face
        assert_eq!(count(&draws, BasicMesh::Cylinder), 4);
        // lamp hinges, clock stand
        assert_eq!(count(&draws, BasicMesh::Sphere), 3);
        assert_eq!(count(&draws, BasicMesh::Cone), 1);
        assert_eq!(count(&draws, BasicMesh::Plane), 1);
        assert_eq!(draws.len(), 36);
    }

    #[test]
    fn test_every_draw_has_a_model_matrix() {
        let scene = loaded_scene();
        let backend = render(&scene, ClockTime::new(0, 0, 0));
        assert_eq!(
            backend.writes(shader::MODEL).len(),
            backend.draws().len(),
            "one transform per draw"
        );
        for (mesh, state) in backend.draw_states() {
            assert!(state.contains_key(shader::MODEL), "{mesh:?}");
            assert!(state.contains_key(shader::USE_TEXTURE), "{mesh:?}");
        }
    }

    #[test]
    fn test_desk_top_is_textured_and_tiled() {
        let scene = loaded_scene();
        let states = render(&scene, ClockTime::new(0, 0, 0)).draw_states();
        let (mesh, desk) = &states[0];
        assert_eq!(*mesh, BasicMesh::Box);
        assert_eq!(desk[shader::USE_TEXTURE], UniformValue::Bool(true));
        assert_eq!(desk[shader::OBJECT_TEXTURE], UniformValue::Int(0));
        assert_eq!(desk[shader::UV_SCALE], UniformValue::Vec2(Vec2::new(4.0, 4.0)));
        assert_eq!(desk[shader::MATERIAL_SHININESS], UniformValue::Float(32.0));
    }

    #[test]
    fn test_book_pages_are_cream_and_stacked() {
        let scene = loaded_scene();
        let states = render(&scene, ClockTime::new(0, 0, 0)).draw_states();
        let cream = UniformValue::Vec4(Vec4::new(1.0, 1.0, 0.9, 1.0));
        let pages: Vec<_> = states
            .iter()
            .filter(|(_, state)| {
                state.get(shader::OBJECT_COLOR) == Some(&cream)
                    && state[shader::USE_TEXTURE] == UniformValue::Bool(false)
            })
            .collect();
        assert_eq!(pages.len(), 8);
        let heights: Vec<f32> = pages.iter().map(|(_, s)| model(s).w_axis.y).collect();
        assert!(heights.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_missing_textures_fall_back_to_color() {
        let mut scene = SceneManager::<u32>::new();
        scene.define_materials().unwrap();
        let backend = render(&scene, ClockTime::new(0, 0, 0));
        assert!(backend.writes(shader::OBJECT_TEXTURE).is_empty());
        assert!(
            backend
                .writes(shader::USE_TEXTURE)
                .iter()
                .all(|v| *v == UniformValue::Bool(false))
        );
        assert_eq!(backend.draws().len(), 36);
    }

    #[test]
    fn test_clock_hands_follow_time() {
        let scene = loaded_scene();
        let time = ClockTime::new(3, 0, 15);
        let states = render(&scene, time).draw_states();
        let hands = &states[states.len() - 3..];

        let direction = |state: &HashMap<String, UniformValue>| {
            let m = model(state);
            (m.transform_point3(Vec3::new(0.5, 0.0, 0.0))
                - m.transform_point3(Vec3::new(-0.5, 0.0, 0.0)))
            .normalize()
        };
        let angles = [time.hour_angle(), time.minute_angle(), time.second_angle()];
        for ((_, state), angle) in hands.iter().zip(angles) {
            assert!((direction(state) - rotate(angle)).length() < 1e-4);
        }
        assert!((direction(&hands[0].1) - Vec3::NEG_Y).length() < 1e-4);
        assert!((direction(&hands[1].1) - Vec3::X).length() < 1e-4);

        let second_hand = &hands[2].1;
        assert_eq!(
            second_hand[shader::OBJECT_COLOR],
            UniformValue::Vec4(Vec4::new(1.0, 0.0, 0.0, 1.0))
        );
    }

    fn rotate(degrees: f32) -> Vec3 {
        let r = degrees.to_radians();
        Vec3::new(r.cos(), r.sin(), 0.0)
    }
}
