//! Playback clock.
//!
//! Animation systems read `delta` each tick. Raw frame deltas go through
//! [`WorldTime::advance`], which drops unusable values and caps long stalls
//! so a paused window does not fast-forward every animation on resume.

use bevy_ecs::prelude::Resource;

/// Longest delta, in seconds, a single tick may contribute.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Simulation clock shared by playback systems.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Advance by an unscaled frame delta.
    ///
    /// Negative or non-finite deltas (and scales) count as zero. The scaled
    /// delta is capped at [`MAX_FRAME_DELTA`].
    pub fn advance(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.delta = if scaled.is_finite() && scaled > 0.0 {
            scaled.min(MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.elapsed += self.delta;
    }
}
