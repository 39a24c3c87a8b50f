//! The light rig of the room.
//!
//! The fragment shader supports one directional light, a fixed array of point lights and one
//! spot light. Only the first point light is used by the scene.

use glam::Vec3;

use crate::shader::{SceneBackend, USE_LIGHTING, VIEW_POSITION};

/// Size of the `pointLights` array in the fragment shader.
pub const MAX_POINT_LIGHTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    /// Inner cone half angle in degrees.
    pub inner_angle: f32,
    /// Outer cone half angle in degrees.
    pub outer_angle: f32,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

/// All lights of the scene. Lights set to `None` are written as inactive.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLights {
    pub view_position: Vec3,
    pub directional: Option<DirectionalLight>,
    pub point_lights: [Option<PointLight>; MAX_POINT_LIGHTS],
    pub spot: Option<SpotLight>,
}

impl Default for SceneLights {
    fn default() -> Self {
        Self {
            view_position: Vec3::new(0.0, -10.0, 10.0),
            directional: Some(DirectionalLight {
                direction: Vec3::new(-0.3, -1.0, -0.3),
                ambient: Vec3::splat(0.2),
                diffuse: Vec3::splat(0.6),
                specular: Vec3::splat(1.0),
            }),
            point_lights: [
                Some(PointLight {
                    position: Vec3::new(-5.0, 6.5, -5.0),
                    ambient: Vec3::new(0.05, 0.05, 0.5),
                    diffuse: Vec3::splat(0.2),
                    specular: Vec3::new(0.4, 0.3, 0.3),
                }),
                None,
                None,
                None,
                None,
            ],
            // sits in the lamp head, aimed where the head points
            spot: Some(SpotLight {
                position: Vec3::new(-2.2, 6.5, 2.5),
                direction: Vec3::new(-0.7, -1.5, 1.0),
                inner_angle: 12.5,
                outer_angle: 35.5,
                ambient: Vec3::splat(0.001),
                diffuse: Vec3::new(4.0, 4.4, 4.0),
                specular: Vec3::splat(3.0),
                constant: 1.0,
                linear: 0.09,
                quadratic: 0.032,
            }),
        }
    }
}

impl SceneLights {
    /// Writes the whole rig and enables lighting.
    pub fn apply<B: SceneBackend>(&self, backend: &mut B) {
        backend.set(USE_LIGHTING, true);
        backend.set(VIEW_POSITION, self.view_position);

        match &self.directional {
            Some(light) => {
                backend.set("directionalLight.bActive", true);
                backend.set("directionalLight.direction", light.direction);
                backend.set("directionalLight.ambient", light.ambient);
                backend.set("directionalLight.diffuse", light.diffuse);
                backend.set("directionalLight.specular", light.specular);
            }
            None => backend.set("directionalLight.bActive", false),
        }

        for (i, light) in self.point_lights.iter().enumerate() {
            let field = |name: &str| format!("pointLights[{i}].{name}");
            match light {
                Some(light) => {
                    backend.set(&field("bActive"), true);
                    backend.set(&field("position"), light.position);
                    backend.set(&field("ambient"), light.ambient);
                    backend.set(&field("diffuse"), light.diffuse);
                    backend.set(&field("specular"), light.specular);
                }
                None => backend.set(&field("bActive"), false),
            }
        }

        match &self.spot {
            Some(light) => {
                backend.set("spotLight.bActive", true);
                backend.set("spotLight.position", light.position);
                backend.set("spotLight.direction", light.direction);
                backend.set("spotLight.cutOff", light.inner_angle.to_radians().cos());
                backend.set("spotLight.outerCutOff", light.outer_angle.to_radians().cos());
                backend.set("spotLight.ambient", light.ambient);
                backend.set("spotLight.diffuse", light.diffuse);
                backend.set("spotLight.specular", light.specular);
                backend.set("spotLight.constant", light.constant);
                backend.set("spotLight.linear", light.linear);
                backend.set("spotLight.quadratic", light.quadratic);
            }
            None => backend.set("spotLight.bActive", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{RecordingBackend, UniformValue};

    #[test]
    fn test_default_rig() {
        let mut backend = RecordingBackend::new();
        SceneLights::default().apply(&mut backend);

        assert_eq!(backend.writes(USE_LIGHTING), vec![UniformValue::Bool(true)]);
        assert_eq!(
            backend.writes("pointLights[0].bActive"),
            vec![UniformValue::Bool(true)]
        );
        assert_eq!(
            backend.writes("pointLights[4].bActive"),
            vec![UniformValue::Bool(false)]
        );
        assert!(backend.writes("pointLights[1].position").is_empty());
        assert!(backend.draws().is_empty());
    }

    #[test]
    fn test_spot_cutoffs_are_cosines() {
        let mut backend = RecordingBackend::new();
        SceneLights::default().apply(&mut backend);

        let UniformValue::Float(inner) = backend.writes("spotLight.cutOff")[0] else {
            panic!("cutOff is not a float");
        };
        let UniformValue::Float(outer) = backend.writes("spotLight.outerCutOff")[0] else {
            panic!("outerCutOff is not a float");
        };
        assert!((inner - 12.5f32.to_radians().cos()).abs() < 1e-6);
        assert!(inner > outer);
    }

    #[test]
    fn test_disabled_lights() {
        let lights = SceneLights {
            directional: None,
            spot: None,
            ..SceneLights::default()
        };
        let mut backend = RecordingBackend::new();
        lights.apply(&mut backend);

        assert_eq!(
            backend.writes("directionalLight.bActive"),
            vec![UniformValue::Bool(false)]
        );
        assert!(backend.writes("spotLight.position").is_empty());
    }
}
