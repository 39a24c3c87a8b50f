use std::collections::HashSet;

use deskscene_core::camera::{CameraInput, Projection};
use glam::Vec2;
use sdl2::{event::Event, keyboard::Keycode};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    pub delta: Vec2,
    pub scroll_delta: Vec2,
}

/// Input gathered over one frame.
#[derive(Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl InputState {
    /// Clears the per-frame parts of the state. Held keys are kept.
    pub fn begin_frame(&mut self) {
        self.keyboard.pressed.clear();
        self.mouse.delta = Vec2::ZERO;
        self.mouse.scroll_delta = Vec2::ZERO;
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::MouseMotion { xrel, yrel, .. } => {
                self.mouse.delta += Vec2::new(*xrel as f32, *yrel as f32);
            }
            Event::MouseWheel { x, y, .. } => {
                self.mouse.scroll_delta += Vec2::new(*x as f32, *y as f32);
            }
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => self.key_down(*keycode),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => self.key_up(*keycode),
            _ => {}
        }
    }

    pub fn key_down(&mut self, keycode: Keycode) {
        self.keyboard.down.insert(keycode);
        self.keyboard.pressed.insert(keycode);
    }

    pub fn key_up(&mut self, keycode: Keycode) {
        self.keyboard.down.remove(&keycode);
    }

    fn axis(&self, positive: Keycode, negative: Keycode) -> i8 {
        self.keyboard.down.contains(&positive) as i8 - self.keyboard.down.contains(&negative) as i8
    }

    /// Maps the frame's input to camera controls.
    ///
    /// WASD moves, Q and E go down and up, the mouse looks around, the wheel changes speed,
    /// P and O switch to perspective and orthographic projection.
    pub fn camera_input(&self) -> CameraInput {
        let projection = if self.keyboard.pressed.contains(&Keycode::P) {
            Some(Projection::Perspective)
        } else if self.keyboard.pressed.contains(&Keycode::O) {
            Some(Projection::Orthographic)
        } else {
            None
        };

        CameraInput {
            forward: self.axis(Keycode::W, Keycode::S),
            strafe: self.axis(Keycode::D, Keycode::A),
            vertical: self.axis(Keycode::E, Keycode::Q),
            look_delta: self.mouse.delta,
            scroll: self.mouse.scroll_delta.y,
            projection,
        }
    }
}
