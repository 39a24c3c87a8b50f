//! Loading the scene's image files into texture units.

use std::{path::Path, sync::Arc};

use deskscene_core::{TextureRegistry, scene::SCENE_TEXTURES};

use crate::abs::{Texture, TextureHandle};

/// Owns the GPU textures of the scene. Dropping it frees all of them.
pub struct SceneTextures {
    _textures: Vec<Texture>,
}

impl SceneTextures {
    /// Loads every scene texture from `dir` and registers it in `registry`.
    ///
    /// A texture that fails to load is logged and skipped; objects using its tag are then
    /// drawn without a texture.
    pub fn load(
        gl: &Arc<glow::Context>,
        dir: &Path,
        registry: &mut TextureRegistry<TextureHandle>,
    ) -> Self {
        let mut textures = Vec::with_capacity(SCENE_TEXTURES.len());

        for (file, tag) in SCENE_TEXTURES {
            let path = dir.join(file);
            let texture = match Texture::from_file(gl, &path) {
                Ok(texture) => texture,
                Err(e) => {
                    log::error!("Could not load texture '{tag}': {e}");
                    continue;
                }
            };
            match registry.register(tag, texture.handle()) {
                Ok(slot) => {
                    log::debug!("Texture '{tag}' uses unit {slot}");
                    textures.push(texture);
                }
                Err(e) => log::error!("Could not register texture '{tag}': {e}"),
            }
        }

        log::info!(
            "Loaded {} of {} scene textures",
            textures.len(),
            SCENE_TEXTURES.len()
        );

        Self { _textures: textures }
    }

    /// Binds every registered texture to the unit matching its slot.
    pub fn bind(gl: &glow::Context, registry: &TextureRegistry<TextureHandle>) {
        for (slot, entry) in registry.iter() {
            entry.handle.bind(gl, slot);
        }
    }
}
