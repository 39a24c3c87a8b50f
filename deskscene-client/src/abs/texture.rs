//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture,
//! and the copyable [`TextureHandle`] kept in the scene's texture table.

use std::{num::NonZero, path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, GenericImageView};

/// Represents a handle to a texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub NonZero<u32>);

impl TextureHandle {
    /// Binds the texture handle to the specified texture unit.
    pub fn bind(&self, gl: &glow::Context, unit: u32) {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(glow::NativeTexture(self.0)));
        }
    }
}

/// Represents a texture stored on the GPU side. The GPU memory is freed on drop.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decodes an image file and uploads it.
    ///
    /// Images are flipped vertically so that the first row ends up at `v = 0`.
    pub fn from_file(gl: &Arc<glow::Context>, path: &Path) -> Result<Self, String> {
        let image = image::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
        let channels = image.color().channel_count();
        let texture = Self::new(gl, &image.flipv())?;
        log::info!(
            "Loaded image {}, width: {}, height: {}, channels: {}",
            path.display(),
            texture.width,
            texture.height,
            channels
        );
        Ok(texture)
    }

    /// Creates a new texture from the given [`image::DynamicImage`].
    ///
    /// Three channel images are stored as RGB, everything else is expanded to RGBA.
    pub fn new(gl: &Arc<glow::Context>, image: &DynamicImage) -> Result<Self, String> {
        let (width, height) = image.dimensions();
        let (internal_format, format, data) = match image {
            DynamicImage::ImageRgb8(rgb) => (glow::RGB8, glow::RGB, rgb.as_raw().clone()),
            other => (glow::RGBA8, glow::RGBA, other.to_rgba8().into_raw()),
        };

        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            // RGB rows are not 4-byte aligned in general
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format as i32,
                width as i32,
                height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    /// Returns a handle to the texture.
    pub fn handle(&self) -> TextureHandle {
        TextureHandle(self.id.0)
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

