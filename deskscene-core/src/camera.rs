//! Free-fly camera used to look around the room.

use glam::{Mat4, Vec2, Vec3};

const MIN_SPEED: f32 = 0.5;
const MAX_SPEED: f32 = 30.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;
/// Half the height of the view volume in orthographic mode.
const ORTHO_HALF_HEIGHT: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// Movement requested for one frame. Axis values are -1, 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    pub forward: i8,
    pub strafe: i8,
    pub vertical: i8,
    pub look_delta: Vec2,
    pub scroll: f32,
    pub projection: Option<Projection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Degrees, 0 looks down -Z, positive turns right.
    pub yaw: f32,
    /// Degrees, positive looks up.
    pub pitch: f32,
    pub fov: f32,
    /// Units per second.
    pub speed: f32,
    pub sensitivity: f32,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 7.0, 20.0),
            yaw: 0.0,
            pitch: -15.0,
            fov: 45.0,
            speed: 5.0,
            sensitivity: 0.1,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    /// Applies one frame of input.
    pub fn update(&mut self, input: &CameraInput, delta_time: f32) {
        self.yaw = (self.yaw + input.look_delta.x * self.sensitivity).rem_euclid(360.0);
        self.pitch = (self.pitch - input.look_delta.y * self.sensitivity).clamp(-89.0, 89.0);
        self.speed = (self.speed + input.scroll * 0.5).clamp(MIN_SPEED, MAX_SPEED);

        if let Some(projection) = input.projection {
            self.projection = projection;
        }

        let mut movement = self.front() * input.forward as f32
            + self.right() * input.strafe as f32
            + Vec3::Y * input.vertical as f32;
        if movement != Vec3::ZERO {
            movement = movement.normalize();
        }
        self.position += movement * self.speed * delta_time;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), Vec3::Y)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective => {
                Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, NEAR, FAR)
            }
            Projection::Orthographic => {
                let half_width = ORTHO_HALF_HEIGHT * aspect_ratio;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -ORTHO_HALF_HEIGHT,
                    ORTHO_HALF_HEIGHT,
                    NEAR,
                    FAR,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::default();
        let input = CameraInput {
            look_delta: Vec2::new(0.0, -10_000.0),
            ..Default::default()
        };
        camera.update(&input, 0.016);
        assert_eq!(camera.pitch, 89.0);
    }

    #[test]
    fn test_forward_moves_along_front() {
        let mut camera = Camera {
            pitch: 0.0,
            ..Default::default()
        };
        let start = camera.position;
        let input = CameraInput {
            forward: 1,
            ..Default::default()
        };
        camera.update(&input, 2.0);
        let moved = camera.position - start;
        assert!((moved - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn test_diagonal_is_not_faster() {
        let mut camera = Camera::default();
        let start = camera.position;
        let input = CameraInput {
            forward: 1,
            strafe: 1,
            vertical: 1,
            ..Default::default()
        };
        camera.update(&input, 1.0);
        assert!(((camera.position - start).length() - camera.speed).abs() < 1e-4);
    }

    #[test]
    fn test_scroll_changes_speed_within_bounds() {
        let mut camera = Camera::default();
        let input = CameraInput {
            scroll: 1000.0,
            ..Default::default()
        };
        camera.update(&input, 0.0);
        assert_eq!(camera.speed, MAX_SPEED);
    }

    #[test]
    fn test_projection_switch() {
        let mut camera = Camera::default();
        let perspective = camera.projection(16.0 / 9.0);
        camera.update(
            &CameraInput {
                projection: Some(Projection::Orthographic),
                ..Default::default()
            },
            0.0,
        );
        assert_eq!(camera.projection, Projection::Orthographic);
        let orthographic = camera.projection(16.0 / 9.0);
        assert_ne!(perspective, orthographic);
        // orthographic projections keep w = 1
        assert_eq!(orthographic.row(3), glam::Vec4::new(0.0, 0.0, 0.0, 1.0));
    }
}
