//! Animation systems.
//!
//! - [`animation`] advances animations based on elapsed time and writes the
//!   current frame's source rectangle into the entity's [`Sprite`].
//! - [`sprite_source`] fills the source rectangle of newly added sprites.
//!
//! # Animation Flow
//!
//! 1. Animation data is loaded into the [`AssetRegistry`] from sheet metadata
//! 2. Entities have an [`Animation`] component pointing to an animation name
//! 3. The `animation` system advances frames according to the animation's
//!    [`AnimationType`](crate::resources::animationstore::AnimationType) and
//!    frame delay, then updates [`Sprite::source`]
//!
//! Both systems are generic over the registry's texture handle type and read
//! the registry as a non-send resource.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::assetregistry::{AssetRegistry, TextureKind};
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Entities whose animation is not registered are skipped.
pub fn animation<T: 'static>(
    mut query: Query<(&mut Animation, Option<&mut Sprite>)>,
    registry: NonSend<AssetRegistry<T>>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, maybe_sprite) in query.iter_mut() {
        let Some(reference) = registry.get_animation_reference(&anim_comp.animation_key, true)
        else {
            debug!("Animation '{}' not registered, skipping", anim_comp.animation_key);
            continue;
        };

        anim_comp.advance(reference, time.delta);

        if let Some(mut sprite) = maybe_sprite {
            if let Ok(rect) = reference.source_rect(anim_comp.frame_index) {
                sprite.source = rect;
            }
        }
    }
}

/// Resolve the source rectangle of sprites when they are added.
///
/// Animation sprites start on frame 0. Unknown names leave the rect empty.
pub fn sprite_source<T: 'static>(
    mut query: Query<&mut Sprite, Added<Sprite>>,
    registry: NonSend<AssetRegistry<T>>,
) {
    for mut sprite in query.iter_mut() {
        let rect = match sprite.kind {
            TextureKind::Sprite => registry.sprite_source_rect(&sprite.reference),
            TextureKind::Animation => registry
                .get_animation_reference(&sprite.reference, false)
                .and_then(|a| a.source_rect(0).ok()),
        };
        if let Some(rect) = rect {
            sprite.source = rect;
        }
    }
}
