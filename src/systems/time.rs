//! Clock update.
//!
//! Call once per frame before running the playback schedule.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Feed the raw frame delta into the [`WorldTime`] resource.
///
/// Inserts a default clock if the world has none yet.
pub fn update_world_time(world: &mut World, dt: f32) {
    world
        .get_resource_or_insert_with(WorldTime::default)
        .advance(dt);
}
