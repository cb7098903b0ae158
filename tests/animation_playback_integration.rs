//! Animation playback integration tests.
//!
//! Runs the animation and sprite systems on a bevy `World` holding an
//! [`AssetRegistry`] as a non-send resource.

use std::rc::Rc;

use bevy_ecs::prelude::*;

use chaindrop_textures::components::animation::Animation;
use chaindrop_textures::components::sprite::Sprite;
use chaindrop_textures::resources::animationstore::{AnimationType, FrameSpec};
use chaindrop_textures::resources::assetregistry::{AssetRegistry, SourceRect};
use chaindrop_textures::resources::worldtime::WorldTime;
use chaindrop_textures::systems::animation::{animation, sprite_source};
use chaindrop_textures::systems::time::update_world_time;

type Texture = Rc<()>;

fn make_registry() -> AssetRegistry<Texture> {
    let mut registry = AssetRegistry::new();
    registry.put_texture("sprites", Rc::new(()));
    registry
        .add_sprite_reference("sprites", "Block", 16, 16, 0, 64)
        .unwrap();
    add_strip(&mut registry, "Spark", AnimationType::Loop, 4);
    add_strip(&mut registry, "Bounce", AnimationType::PingPong, 3);
    add_strip(&mut registry, "Pop", AnimationType::OneShot, 3);
    registry
}

fn add_strip(registry: &mut AssetRegistry<Texture>, name: &str, kind: AnimationType, frames: i32) {
    for i in 0..frames {
        let mut spec = FrameSpec::new(8, 8, i * 8, 32);
        if i == 0 {
            spec = spec.with_playback(kind, 0.1);
        }
        registry.add_animation_frame("sprites", name, spec);
    }
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_non_send_resource(make_registry());
    world
}

fn make_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((sprite_source::<Texture>, animation::<Texture>).chain());
    schedule
}

/// Run `ticks` frames of `dt` seconds, returning the sprite's x offset after each.
fn run_frames(
    world: &mut World,
    schedule: &mut Schedule,
    entity: Entity,
    ticks: usize,
    dt: f32,
) -> Vec<i32> {
    (0..ticks)
        .map(|_| {
            update_world_time(world, dt);
            schedule.run(world);
            world.get::<Sprite>(entity).unwrap().source.x
        })
        .collect()
}

#[test]
fn static_sprite_gets_its_rect_on_spawn() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let entity = world.spawn(Sprite::from_sprite("Block")).id();

    update_world_time(&mut world, 0.0);
    schedule.run(&mut world);

    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.source, SourceRect::new(0, 64, 16, 16));
}

#[test]
fn animation_sprite_starts_on_first_frame() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let entity = world
        .spawn((Animation::new("Spark"), Sprite::from_animation("Spark")))
        .id();

    update_world_time(&mut world, 0.0);
    schedule.run(&mut world);

    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.source, SourceRect::new(0, 32, 8, 8));
    assert_eq!(world.get::<Animation>(entity).unwrap().frame_index, 0);
}

#[test]
fn loop_animation_wraps_over_ticks() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let entity = world
        .spawn((Animation::new("Spark"), Sprite::from_animation("Spark")))
        .id();

    let xs = run_frames(&mut world, &mut schedule, entity, 5, 0.1);
    assert_eq!(xs, vec![8, 16, 24, 0, 8]);
}

#[test]
fn ping_pong_animation_reverses() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let entity = world
        .spawn((Animation::new("Bounce"), Sprite::from_animation("Bounce")))
        .id();

    let xs = run_frames(&mut world, &mut schedule, entity, 4, 0.1);
    assert_eq!(xs, vec![8, 16, 8, 0]);
}

#[test]
fn one_shot_animation_holds_last_frame() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let entity = world
        .spawn((Animation::new("Pop"), Sprite::from_animation("Pop")))
        .id();

    let xs = run_frames(&mut world, &mut schedule, entity, 4, 0.1);
    assert_eq!(xs, vec![8, 16, 16, 16]);
    assert!(world.get::<Animation>(entity).unwrap().finished);
}

#[test]
fn time_scale_slows_playback() {
    let mut world = make_world();
    world.insert_resource(WorldTime::default().with_time_scale(0.5));
    let mut schedule = make_schedule();
    let entity = world
        .spawn((Animation::new("Spark"), Sprite::from_animation("Spark")))
        .id();

    let xs = run_frames(&mut world, &mut schedule, entity, 4, 0.1);
    assert_eq!(xs, vec![0, 8, 8, 16]);
}

#[test]
fn unregistered_animation_is_skipped() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let entity = world
        .spawn((Animation::new("Missing"), Sprite::from_animation("Missing")))
        .id();

    let xs = run_frames(&mut world, &mut schedule, entity, 3, 0.1);
    assert_eq!(xs, vec![0, 0, 0]);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.source, SourceRect::default());
    assert_eq!(world.get::<Animation>(entity).unwrap().frame_index, 0);
}

#[test]
fn switching_animation_restarts_playback() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let entity = world
        .spawn((Animation::new("Spark"), Sprite::from_animation("Spark")))
        .id();

    run_frames(&mut world, &mut schedule, entity, 2, 0.1);
    world
        .get_mut::<Animation>(entity)
        .unwrap()
        .set_animation("Pop");

    let xs = run_frames(&mut world, &mut schedule, entity, 3, 0.1);
    assert_eq!(xs, vec![8, 16, 16]);
}

#[test]
fn teardown_releases_texture_held_by_world() {
    let mut world = make_world();
    let texture = Rc::clone(
        world
            .non_send_resource::<AssetRegistry<Texture>>()
            .get_texture_file_reference("sprites")
            .unwrap(),
    );
    assert_eq!(Rc::strong_count(&texture), 2);

    world
        .non_send_resource_mut::<AssetRegistry<Texture>>()
        .teardown();

    assert_eq!(Rc::strong_count(&texture), 1);
    assert!(world.non_send_resource::<AssetRegistry<Texture>>().is_empty());
}
