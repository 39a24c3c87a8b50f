//! The objects of the room, one method per piece of furniture.

use glam::{Vec3, Vec4};

use super::SceneManager;
use crate::{
    clock::ClockTime,
    shader::{self, SceneBackend},
    shapes::BasicMesh,
    transform::hand_matrix,
};

const DESK_HEIGHT: f32 = -0.3;
const LEG_SCALE: Vec3 = Vec3::new(0.5, 5.0, 0.5);
const LEG_OFFSET_X: f32 = 9.0;
const LEG_OFFSET_Z: f32 = 3.5;

const BOOK_PAGES: usize = 8;
const PAGE_SPACING: f32 = 0.045;

/// Centre of the clock face, hands sit slightly in front of it.
const CLOCK_CENTER: Vec3 = Vec3::new(6.0, 1.05, 2.0);

const NO_ROTATION: Vec3 = Vec3::ZERO;

impl<H> SceneManager<H> {
    pub(super) fn render_desk<B: SceneBackend>(&self, backend: &mut B) {
        self.set_shader_texture(backend, "desk");
        self.set_shader_material(backend, "desk");
        self.set_texture_uv_scale(backend, 4.0, 4.0);

        // top slab and the thinner frame under it
        let top = Vec3::new(0.0, DESK_HEIGHT, 2.0);
        self.draw_placed(backend, BasicMesh::Box, Vec3::new(25.0, 0.5, 12.0), NO_ROTATION, top);
        self.draw_placed(backend, BasicMesh::Box, Vec3::new(20.0, 0.3, 11.0), NO_ROTATION, top);

        let leg_y = DESK_HEIGHT - LEG_SCALE.y / 2.1;
        self.set_shader_color(backend, Vec4::new(0.2, 0.2, 0.2, 1.0));
        for (x, z) in [
            (-LEG_OFFSET_X, LEG_OFFSET_Z),
            (LEG_OFFSET_X, LEG_OFFSET_Z),
            (-LEG_OFFSET_X, -LEG_OFFSET_Z),
            (LEG_OFFSET_X, -LEG_OFFSET_Z),
        ] {
            self.draw_placed(backend, BasicMesh::Box, LEG_SCALE, NO_ROTATION, Vec3::new(x, leg_y, z));
        }
    }

    pub(super) fn render_lamp<B: SceneBackend>(&self, backend: &mut B) {
        // base
        self.set_shader_texture(backend, "bronze");
        self.set_shader_material(backend, "lamp_base");
        self.draw_placed(
            backend,
            BasicMesh::Cylinder,
            Vec3::new(2.5, 0.8, 2.5),
            NO_ROTATION,
            Vec3::new(0.0, 0.05, 0.0),
        );

        // lower and upper pole
        self.set_shader_material(backend, "lamp");
        self.draw_placed(
            backend,
            BasicMesh::Cylinder,
            Vec3::new(0.3, 6.6, 0.3),
            NO_ROTATION,
            Vec3::new(0.0, 0.7, 0.0),
        );
        self.draw_placed(
            backend,
            BasicMesh::Cylinder,
            Vec3::new(0.3, 2.0, 0.3),
            Vec3::new(75.0, -45.0, 0.0),
            Vec3::new(0.0, 7.5, 0.0),
        );

        // hinges
        self.set_shader_texture(backend, "rubber");
        self.set_shader_material(backend, "rubber");
        for position in [Vec3::new(0.0, 7.5, 0.0), Vec3::new(-1.5, 8.1, 1.5)] {
            self.draw_placed(
                backend,
                BasicMesh::Sphere,
                Vec3::splat(0.5),
                Vec3::new(0.0, 45.0, 0.0),
                position,
            );
        }

        // head, tilted down and out towards the book
        self.set_shader_texture(backend, "crome");
        self.set_shader_material(backend, "lamp_head");
        self.draw_placed(
            backend,
            BasicMesh::Cone,
            Vec3::new(1.5, 2.0, 1.5),
            Vec3::new(35.0, 145.0, 0.0),
            Vec3::new(-2.2, 6.5, 2.5),
        );
    }

    pub(super) fn render_book<B: SceneBackend>(&self, backend: &mut B) {
        let cover_scale = Vec3::new(4.7, 0.2, 3.8);

        self.book_binding(backend);
        self.draw_placed(backend, BasicMesh::Box, cover_scale, NO_ROTATION, Vec3::new(-3.0, 0.1, 6.0));

        self.set_shader_color(backend, Vec4::new(1.0, 1.0, 0.9, 1.0));
        for i in 0..BOOK_PAGES {
            let y = 0.21 + i as f32 * PAGE_SPACING;
            self.draw_placed(
                backend,
                BasicMesh::Box,
                Vec3::new(4.65, 0.04, 3.7),
                NO_ROTATION,
                Vec3::new(-3.03, y, 6.0),
            );
        }

        self.book_binding(backend);
        self.draw_placed(backend, BasicMesh::Box, cover_scale, NO_ROTATION, Vec3::new(-3.0, 0.64, 6.0));

        // spine
        self.book_binding(backend);
        self.draw_placed(
            backend,
            BasicMesh::Box,
            Vec3::new(0.2, 0.74, 3.8),
            NO_ROTATION,
            Vec3::new(-5.45, 0.37, 6.0),
        );

        // photo on the top cover
        self.set_shader_texture(backend, "cover");
        self.set_texture_uv_scale(backend, 1.0, 1.0);
        self.draw_placed(
            backend,
            BasicMesh::Plane,
            Vec3::new(1.9, 0.01, 2.35),
            Vec3::new(0.0, 90.0, 0.0),
            Vec3::new(-3.0, 0.742, 6.0),
        );
    }

    /// The black cloth of the covers and spine.
    fn book_binding<B: SceneBackend>(&self, backend: &mut B) {
        self.set_shader_texture(backend, "fabricB");
        self.set_shader_material(backend, "fabricB");
        self.set_shader_color(backend, Vec4::new(0.1, 0.1, 0.1, 1.0));
    }

    pub(super) fn render_room<B: SceneBackend>(&self, backend: &mut B) {
        let wall_height = 20.0;
        let walls = [
            (Vec3::new(40.0, wall_height, 0.5), Vec3::new(0.0, 5.0, -20.0)),
            (Vec3::new(0.5, wall_height, 40.0), Vec3::new(-20.0, 5.0, 0.0)),
            (Vec3::new(0.5, wall_height, 40.0), Vec3::new(20.0, 5.0, 0.0)),
        ];
        for (scale, position) in walls {
            self.set_shader_texture(backend, "planksW");
            self.set_shader_material(backend, "planksW");
            self.draw_placed(backend, BasicMesh::Box, scale, NO_ROTATION, position);
        }

        self.set_shader_texture(backend, "marble_floor");
        self.set_shader_material(backend, "marbleF");
        self.draw_placed(
            backend,
            BasicMesh::Box,
            Vec3::new(40.0, 0.3, 40.0),
            NO_ROTATION,
            Vec3::new(0.0, -5.0, 0.0),
        );

        // dark wood door in the back wall
        self.set_shader_color(backend, Vec4::new(0.3, 0.2, 0.1, 1.0));
        self.draw_placed(
            backend,
            BasicMesh::Box,
            Vec3::new(9.0, 16.0, 0.2),
            NO_ROTATION,
            Vec3::new(7.0, 2.5, -19.75),
        );

        self.set_shader_texture(backend, "ceilingT");
        self.set_shader_material(backend, "ceilingT");
        self.draw_placed(
            backend,
            BasicMesh::Box,
            Vec3::new(40.0, 0.3, 40.0),
            NO_ROTATION,
            Vec3::new(0.0, 15.0, 0.0),
        );
    }

    pub(super) fn render_clock<B: SceneBackend>(&self, backend: &mut B, time: ClockTime) {
        // face, a flat cylinder stood up towards the camera
        self.set_shader_texture(backend, "clockF");
        self.set_shader_material(backend, "clockF");
        self.draw_placed(
            backend,
            BasicMesh::Cylinder,
            Vec3::new(1.0, 0.1, 1.0),
            Vec3::new(90.0, 180.0, 180.0),
            Vec3::new(6.0, 1.0, 2.0),
        );

        let body = Vec4::new(0.3, 0.3, 0.3, 1.0);
        self.set_shader_color(backend, body);
        self.draw_placed(
            backend,
            BasicMesh::Box,
            Vec3::new(0.4, 1.0, 0.4),
            NO_ROTATION,
            Vec3::new(6.0, 0.3, 1.7),
        );
        self.draw_placed(
            backend,
            BasicMesh::Sphere,
            Vec3::splat(0.4),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(6.0, 1.0, 1.65),
        );

        // hands, each a bit further out so they do not z-fight
        let hands = [
            (time.hour_angle(), Vec3::new(0.4, 0.03, 0.01), 0.008, Vec4::new(0.2, 0.2, 0.2, 1.0)),
            (time.minute_angle(), Vec3::new(0.7, 0.03, 0.01), 0.01, Vec4::new(0.1, 0.1, 0.1, 1.0)),
            (time.second_angle(), Vec3::new(0.8, 0.02, 0.01), 0.015, Vec4::new(1.0, 0.0, 0.0, 1.0)),
        ];
        for (angle, scale, depth, color) in hands {
            let pivot = CLOCK_CENTER + Vec3::new(0.0, 0.0, depth);
            backend.set(shader::MODEL, hand_matrix(pivot, angle, scale));
            self.set_shader_color(backend, color);
            backend.draw_mesh(BasicMesh::Box);
        }
    }
}
