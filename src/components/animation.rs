use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::resources::animationstore::{AnimationReference, AnimationType};

/// Playback state of one entity's animation.
///
/// The animation data itself lives in the
/// [`AssetRegistry`](crate::resources::assetregistry::AssetRegistry); this
/// component only tracks where playback is.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// PingPong is currently moving towards frame 0.
    pub reversing: bool,
    /// OneShot reached its last frame.
    pub finished: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            reversing: false,
            finished: false,
        }
    }

    /// Switch to another animation and restart playback. No-op if unchanged.
    pub fn set_animation(&mut self, animation_key: impl Into<String>) {
        let animation_key = animation_key.into();
        if self.animation_key != animation_key {
            *self = Self::new(animation_key);
        }
    }

    /// Advance playback by `dt` seconds.
    ///
    /// Static animations, single-frame animations and a zero frame delay
    /// never advance. Every whole frame delay in the accumulated time is one
    /// step, so a long tick or a tiny delay skips frames in constant time.
    pub fn advance(&mut self, reference: &AnimationReference, dt: f32) {
        let last = reference.last_frame();
        self.frame_index = self.frame_index.min(last);

        let delay = reference.frame_delay;
        if self.finished
            || last == 0
            || delay <= 0.0
            || reference.animation_type == AnimationType::None
        {
            return;
        }

        self.elapsed_time += dt;
        if self.elapsed_time < delay {
            return;
        }
        // saturating cast: an extreme ratio only means "many steps"
        let steps = (self.elapsed_time / delay).floor() as u64;
        self.elapsed_time %= delay;
        self.step(reference.animation_type, last, steps);
        if self.finished {
            self.elapsed_time = 0.0;
        }
    }

    fn step(&mut self, animation_type: AnimationType, last: usize, steps: u64) {
        let last = last as u64;
        match animation_type {
            AnimationType::None => {}
            AnimationType::Loop => {
                let len = last + 1;
                self.frame_index = ((self.frame_index as u64 + steps % len) % len) as usize;
            }
            AnimationType::PingPong => {
                // position on a 0..=last..1 cycle of length 2 * last
                let cycle = 2 * last;
                let frame = self.frame_index as u64;
                let phase = if self.reversing { cycle - frame } else { frame };
                let phase = (phase + steps % cycle) % cycle;
                if phase > last {
                    self.reversing = true;
                    self.frame_index = (cycle - phase) as usize;
                } else {
                    self.reversing = false;
                    self.frame_index = phase as usize;
                }
            }
            AnimationType::OneShot => {
                let frame = (self.frame_index as u64).saturating_add(steps).min(last);
                self.frame_index = frame as usize;
                if frame == last {
                    self.finished = true;
                }
            }
        }
    }
}
