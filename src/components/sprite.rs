use bevy_ecs::prelude::Component;

use crate::resources::assetregistry::{SourceRect, TextureKind};

/// A drawable reference into the asset registry.
///
/// `reference` names a sprite or an animation depending on `kind`; the
/// texture is found with
/// [`AssetRegistry::get_texture`](crate::resources::assetregistry::AssetRegistry::get_texture).
/// `source` is the rectangle to copy from that texture and is kept up to
/// date by the systems in [`crate::systems::animation`].
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub reference: String,
    pub kind: TextureKind,
    pub source: SourceRect,
}

impl Sprite {
    /// Sprite drawn from a static sprite reference.
    pub fn from_sprite(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            kind: TextureKind::Sprite,
            source: SourceRect::default(),
        }
    }

    /// Sprite drawn from the current frame of an animation.
    pub fn from_animation(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            kind: TextureKind::Animation,
            source: SourceRect::default(),
        }
    }
}
