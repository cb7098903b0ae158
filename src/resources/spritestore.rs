//! Static sprite storage.
//!
//! A sprite is a fixed rectangle on a named texture. Re-adding a name
//! replaces the previous sprite.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{AssetError, AssetResult};
use crate::resources::assetregistry::SourceRect;

/// A single named rectangle on a texture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteReference {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub file_reference: String,
    /// Unique sprite name.
    pub sprite_reference: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl SpriteReference {
    /// Create a sprite, rejecting non-positive sizes.
    pub fn new(
        file_reference: impl Into<String>,
        sprite_reference: impl Into<String>,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
    ) -> AssetResult<Self> {
        let sprite_reference = sprite_reference.into();
        if width <= 0 || height <= 0 {
            return Err(AssetError::InvalidSize {
                name: sprite_reference,
                width,
                height,
            });
        }
        Ok(Self {
            file_reference: file_reference.into(),
            sprite_reference,
            x,
            y,
            w: width,
            h: height,
        })
    }

    pub fn source_rect(&self) -> SourceRect {
        SourceRect::new(self.x, self.y, self.w, self.h)
    }
}

/// Map of sprite names to sprites.
#[derive(Debug, Default)]
pub struct SpriteStore {
    sprites: FxHashMap<String, SpriteReference>,
}

impl SpriteStore {
    pub fn new() -> Self {
        Self {
            sprites: FxHashMap::default(),
        }
    }

    /// Store a sprite under its own name and return the one it replaced.
    pub fn insert(&mut self, sprite: SpriteReference) -> Option<SpriteReference> {
        self.sprites.insert(sprite.sprite_reference.clone(), sprite)
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&SpriteReference> {
        self.sprites.get(name.as_ref())
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.sprites.contains_key(name.as_ref())
    }

    /// Names of all stored sprites, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sprites.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
