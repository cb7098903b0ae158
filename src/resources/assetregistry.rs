//! Texture, sprite and animation registry.
//!
//! [`AssetRegistry`] owns the three name-keyed tables used by rendering code:
//!
//! - textures, keyed by file reference, holding backend handles
//! - sprites, keyed by sprite name
//! - animations, keyed by animation name
//!
//! Names are unique within a table but may repeat across tables. Lookups of
//! absent names return `None` (or [`AssetError::NotFound`]) and log a single
//! warning; callers are expected to skip drawing rather than fail.
//!
//! The registry is created empty, filled by the [`loader`](crate::loader) and
//! emptied by [`AssetRegistry::teardown`]. Texture handles free their GPU
//! resource when dropped, so teardown is just clearing the tables.
//!
//! With raylib the registry must stay on the main thread; insert it into a
//! bevy `World` with `insert_non_send_resource`.

use std::fmt;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AssetError, AssetResult};
use crate::resources::animationstore::{AnimationReference, AnimationStore, FrameSpec};
use crate::resources::spritestore::{SpriteReference, SpriteStore};
use crate::resources::texturestore::TextureStore;

/// Which lookup table a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetTable {
    Texture,
    Sprite,
    Animation,
}

impl fmt::Display for AssetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetTable::Texture => write!(f, "texture"),
            AssetTable::Sprite => write!(f, "sprite"),
            AssetTable::Animation => write!(f, "animation"),
        }
    }
}

/// Kind of reference used to find a texture with [`AssetRegistry::get_texture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureKind {
    Sprite,
    Animation,
}

impl From<TextureKind> for AssetTable {
    fn from(kind: TextureKind) -> Self {
        match kind {
            TextureKind::Sprite => AssetTable::Sprite,
            TextureKind::Animation => AssetTable::Animation,
        }
    }
}

/// Pixel rectangle on a texture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl SourceRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

#[cfg(feature = "raylib")]
impl From<SourceRect> for raylib::prelude::Rectangle {
    fn from(rect: SourceRect) -> Self {
        raylib::prelude::Rectangle {
            x: rect.x as f32,
            y: rect.y as f32,
            width: rect.w as f32,
            height: rect.h as f32,
        }
    }
}

/// Sorted names of everything currently registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySummary {
    pub textures: Vec<String>,
    pub sprites: Vec<String>,
    pub animations: Vec<String>,
}

/// Owner of all loaded textures, sprites and animations.
///
/// `T` is the texture handle type of the [`TextureBackend`](crate::backend::TextureBackend)
/// used to load images.
pub struct AssetRegistry<T> {
    textures: TextureStore<T>,
    sprites: SpriteStore,
    animations: AnimationStore,
}

impl<T> Default for AssetRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AssetRegistry<T> {
    /// Create a registry with three empty tables.
    pub fn new() -> Self {
        Self {
            textures: TextureStore::new(),
            sprites: SpriteStore::new(),
            animations: AnimationStore::new(),
        }
    }

    /// Store a texture under `reference`, returning the handle it replaced.
    pub fn put_texture(&mut self, reference: impl Into<String>, texture: T) -> Option<T> {
        let reference = reference.into();
        let previous = self.textures.insert(reference.clone(), texture);
        if previous.is_some() {
            warn!(
                "Texture '{}' replaced; its sprites and animations now use the new image",
                reference
            );
        }
        previous
    }

    /// Store a sprite, returning the sprite it replaced.
    pub fn put_sprite(&mut self, sprite: SpriteReference) -> Option<SpriteReference> {
        let previous = self.sprites.insert(sprite);
        if let Some(old) = &previous {
            debug!("Sprite '{}' replaced", old.sprite_reference);
        }
        previous
    }

    /// Register a sprite rectangle on the texture `file_reference`.
    pub fn add_sprite_reference(
        &mut self,
        file_reference: &str,
        sprite_reference: &str,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
    ) -> AssetResult<()> {
        let sprite =
            SpriteReference::new(file_reference, sprite_reference, width, height, x, y)?;
        self.put_sprite(sprite);
        Ok(())
    }

    /// Append an animation frame; see [`AnimationStore::add_animation_frame`].
    pub fn add_animation_frame(&mut self, file_reference: &str, name: &str, spec: FrameSpec) {
        self.animations.add_animation_frame(file_reference, name, spec);
    }

    /// Texture used by the sprite or animation called `reference`.
    pub fn get_texture(&self, kind: TextureKind, reference: &str) -> Option<&T> {
        let file_reference = match kind {
            TextureKind::Sprite => self.sprites.get(reference).map(|s| &s.file_reference),
            TextureKind::Animation => self.animations.get(reference).map(|a| &a.file_reference),
        };
        match file_reference {
            Some(file_reference) => self.get_texture_file_reference(file_reference),
            None => {
                warn!("get_texture: {} '{}' not found", AssetTable::from(kind), reference);
                None
            }
        }
    }

    /// Texture stored under a file reference.
    pub fn get_texture_file_reference(&self, file_reference: &str) -> Option<&T> {
        let texture = self.textures.get(file_reference);
        if texture.is_none() {
            warn!("get_texture_file_reference: '{}' not found", file_reference);
        }
        texture
    }

    pub fn get_sprite_reference(&self, sprite_reference: &str) -> Option<&SpriteReference> {
        let sprite = self.sprites.get(sprite_reference);
        if sprite.is_none() {
            warn!("get_sprite_reference: '{}' not found", sprite_reference);
        }
        sprite
    }

    /// Look up an animation; `suppress_warning` silences the not-found warning.
    pub fn get_animation_reference(
        &self,
        animation_reference: &str,
        suppress_warning: bool,
    ) -> Option<&AnimationReference> {
        let animation = self.animations.get(animation_reference);
        if animation.is_none() && !suppress_warning {
            warn!("get_animation_reference: '{}' not found", animation_reference);
        }
        animation
    }

    /// Source rectangle of a sprite.
    pub fn sprite_source_rect(&self, sprite_reference: &str) -> Option<SourceRect> {
        match self.sprites.get(sprite_reference) {
            Some(sprite) => Some(sprite.source_rect()),
            None => {
                warn!("sprite_source_rect: '{}' not found", sprite_reference);
                None
            }
        }
    }

    /// Source rectangle of one frame of an animation.
    pub fn animation_source_rect(
        &self,
        animation_reference: &str,
        frame: usize,
    ) -> AssetResult<SourceRect> {
        match self.animations.get(animation_reference) {
            Some(animation) => animation.source_rect(frame),
            None => {
                warn!("animation_source_rect: '{}' not found", animation_reference);
                Err(AssetError::NotFound {
                    table: AssetTable::Animation,
                    name: animation_reference.to_string(),
                })
            }
        }
    }

    /// Source rectangle of an animation frame or a sprite.
    ///
    /// Animations are searched first. For sprites `frame` is ignored. A name
    /// found in neither table is reported against the animation table.
    pub fn resolve_source_rect(&self, name: &str, frame: usize) -> AssetResult<SourceRect> {
        if let Some(animation) = self.animations.get(name) {
            return animation.source_rect(frame);
        }
        if let Some(sprite) = self.sprites.get(name) {
            return Ok(sprite.source_rect());
        }
        warn!("resolve_source_rect: '{}' not found", name);
        Err(AssetError::NotFound {
            table: AssetTable::Animation,
            name: name.to_string(),
        })
    }

    pub fn textures(&self) -> &TextureStore<T> {
        &self.textures
    }

    pub fn sprites(&self) -> &SpriteStore {
        &self.sprites
    }

    pub fn animations(&self) -> &AnimationStore {
        &self.animations
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty() && self.sprites.is_empty() && self.animations.is_empty()
    }

    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            textures: self.textures.names(),
            sprites: self.sprites.names(),
            animations: self.animations.names(),
        }
    }

    /// Release every texture, sprite and animation and empty all tables.
    ///
    /// Call once at shutdown. A second call finds nothing to release.
    pub fn teardown(&mut self) {
        if self.is_empty() {
            debug!("teardown: registry already empty");
            return;
        }
        info!(
            "Releasing {} textures, {} sprites, {} animations",
            self.textures.len(),
            self.sprites.len(),
            self.animations.len()
        );
        self.textures.clear();
        self.sprites.clear();
        self.animations.clear();
    }
}
