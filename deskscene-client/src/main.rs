use std::path::PathBuf;

use deskscene_core::{SceneManager, camera::Camera, clock::ClockTime};
use glow::HasContext;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
};

use crate::{
    abs::{App, TextureHandle},
    config::Config,
    input::InputState,
    render::{backend::GlBackend, meshes::BasicMeshes, textures::SceneTextures},
};

mod abs;
mod config;
mod input;
mod logging;
mod render;

fn main() {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let (config, config_problem) = Config::load(config_path.as_deref());

    if let Err(e) = logging::init_logging(config.log_level()) {
        eprintln!("Could not set up logging: {e}");
    }
    if let Some(problem) = config_problem {
        log::warn!("{problem}");
    }

    if let Err(e) = run(&config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), String> {
    let mut app = App::new(config)?;

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.enable(glow::CULL_FACE);
        app.gl.cull_face(glow::BACK);
        app.gl.front_face(glow::CCW);
        app.gl.clear_color(0.0, 0.0, 0.0, 1.0);
    }

    let program = render::shader_program(&app.gl, "scene")?;
    let meshes = BasicMeshes::new(&app.gl)?;

    let mut scene = SceneManager::<TextureHandle>::new();
    scene.define_materials().map_err(|e| e.to_string())?;
    // owns the GPU textures until the window closes
    let _textures = SceneTextures::load(&app.gl, &config.texture_dir, &mut scene.textures);
    SceneTextures::bind(&app.gl, &scene.textures);

    program.use_program();
    let mut backend = GlBackend::new(&program, &meshes);
    scene.setup_scene_lights(&mut backend);

    let mut camera = Camera {
        sensitivity: config.mouse_sensitivity,
        ..Default::default()
    };
    let mut input = InputState::default();
    app.sdl.mouse().set_relative_mouse_mode(true);

    let mut last_frame_time = std::time::Instant::now();

    'running: loop {
        let now = std::time::Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        input.begin_frame();
        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                event => input.handle_event(&event),
            }
        }

        camera.update(&input.camera_input(), delta_time);

        unsafe {
            app.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        scene.set_camera(&mut backend, &camera, app.aspect_ratio());
        scene.render_scene(&mut backend, ClockTime::now());

        app.window.gl_swap_window();
    }

    log::info!("Closing");
    Ok(())
}
