//! Tag-keyed tables for loaded textures and named materials.
//!
//! Both tables are flat vectors searched linearly; the first entry whose tag matches wins and a
//! miss is reported as `None`. Entries are never removed one by one, only all at once.

use glam::Vec3;

/// The number of texture units the scene binds textures to.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Errors reported when registering textures or materials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("tag '{0}' is already registered")]
    DuplicateTag(String),
    #[error("all {capacity} slots are in use")]
    Full { capacity: usize },
}

/// A loaded texture associated with a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureEntry<H> {
    pub tag: String,
    pub handle: H,
}

/// Maps tags to texture handles. The index of an entry is the texture unit it is bound to.
#[derive(Debug, Clone)]
pub struct TextureRegistry<H> {
    entries: Vec<TextureEntry<H>>,
}

impl<H> Default for TextureRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TextureRegistry<H> {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_TEXTURE_SLOTS),
        }
    }

    /// Registers a handle under `tag` and returns the slot it occupies.
    pub fn register(&mut self, tag: impl Into<String>, handle: H) -> Result<u32, RegistryError> {
        let tag = tag.into();
        if self.position(&tag).is_some() {
            return Err(RegistryError::DuplicateTag(tag));
        }
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            return Err(RegistryError::Full {
                capacity: MAX_TEXTURE_SLOTS,
            });
        }

        self.entries.push(TextureEntry { tag, handle });
        Ok((self.entries.len() - 1) as u32)
    }

    /// Returns the texture unit of the entry registered under `tag`.
    pub fn find_slot(&self, tag: &str) -> Option<u32> {
        self.position(tag).map(|index| index as u32)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(slot, entry)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &TextureEntry<H>)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(slot, entry)| (slot as u32, entry))
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, tag: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.tag == tag)
    }
}

impl<H: Copy> TextureRegistry<H> {
    /// Returns the handle registered under `tag`.
    pub fn find_handle(&self, tag: &str) -> Option<H> {
        self.position(tag).map(|index| self.entries[index].handle)
    }
}

/// Surface parameters fed to the lighting model.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub tag: String,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: impl Into<String>,
        diffuse_color: Vec3,
        specular_color: Vec3,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            diffuse_color,
            specular_color,
            shininess,
        }
    }
}

/// Maps tags to materials.
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material. Its tag must not already be in use.
    pub fn define(&mut self, material: Material) -> Result<(), RegistryError> {
        if self.find(&material.tag).is_some() {
            return Err(RegistryError::DuplicateTag(material.tag));
        }
        self.materials.push(material);
        Ok(())
    }

    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn clear(&mut self) {
        self.materials.clear();
    }
}
