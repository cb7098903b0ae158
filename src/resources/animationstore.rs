//! Animation resource registry.
//!
//! Animations are built up one frame at a time from metadata records. The
//! first frame seen for a name fixes the animation's playback type, frame
//! delay and frame size; every later frame for that name only contributes its
//! `(x, y)` offset on the source sheet. Frames are kept in arrival order,
//! which is also playback order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{AssetError, AssetResult};
use crate::resources::assetregistry::SourceRect;

/// How an animation plays back once it reaches its last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationType {
    /// Static; stays on the first frame.
    #[default]
    None,
    /// Restarts from the first frame.
    Loop,
    /// Reverses direction at both ends.
    PingPong,
    /// Plays once and holds the last frame.
    OneShot,
}

impl TryFrom<i32> for AnimationType {
    type Error = AssetError;

    /// Converts the integer code used by metadata files.
    fn try_from(code: i32) -> AssetResult<Self> {
        match code {
            0 => Ok(AnimationType::None),
            1 => Ok(AnimationType::Loop),
            2 => Ok(AnimationType::PingPong),
            3 => Ok(AnimationType::OneShot),
            other => Err(AssetError::malformed(format!(
                "unknown animation type {other}"
            ))),
        }
    }
}

impl From<AnimationType> for i32 {
    fn from(kind: AnimationType) -> Self {
        match kind {
            AnimationType::None => 0,
            AnimationType::Loop => 1,
            AnimationType::PingPong => 2,
            AnimationType::OneShot => 3,
        }
    }
}

/// Offset of one frame on the animation's source sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub x: i32,
    pub y: i32,
}

impl AnimationFrame {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A named, ordered sequence of equally sized frames on one texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationReference {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub file_reference: String,
    /// Unique animation name.
    pub animation_reference: String,
    pub animation_type: AnimationType,
    /// Always equal to `frames.len()`.
    pub frame_count: usize,
    /// Seconds each frame is held.
    pub frame_delay: f32,
    /// Width shared by every frame.
    pub w: i32,
    /// Height shared by every frame.
    pub h: i32,
    pub frames: Vec<AnimationFrame>,
}

impl AnimationReference {
    /// Source rectangle of `frame`, or `FrameOutOfRange`.
    pub fn source_rect(&self, frame: usize) -> AssetResult<SourceRect> {
        let Some(f) = self.frames.get(frame) else {
            return Err(AssetError::FrameOutOfRange {
                name: self.animation_reference.clone(),
                frame,
                frame_count: self.frame_count,
            });
        };
        Ok(SourceRect::new(f.x, f.y, self.w, self.h))
    }

    /// Index of the last frame.
    pub fn last_frame(&self) -> usize {
        self.frame_count.saturating_sub(1)
    }
}

/// Parameters for one call to [`AnimationStore::add_animation_frame`].
///
/// `animation_type` and `frame_delay` only matter for the first frame of an
/// animation; [`FrameSpec::new`] defaults them to `None` and `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSpec {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
    pub animation_type: AnimationType,
    pub frame_delay: f32,
}

impl FrameSpec {
    pub fn new(width: i32, height: i32, x: i32, y: i32) -> Self {
        Self {
            width,
            height,
            x,
            y,
            animation_type: AnimationType::None,
            frame_delay: 0.0,
        }
    }

    pub fn with_playback(mut self, animation_type: AnimationType, frame_delay: f32) -> Self {
        self.animation_type = animation_type;
        self.frame_delay = frame_delay;
        self
    }
}

/// Central registry of animations keyed by name.
#[derive(Debug, Default)]
pub struct AnimationStore {
    animations: FxHashMap<String, AnimationReference>,
}

impl AnimationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            animations: FxHashMap::default(),
        }
    }

    /// Append a frame to the animation called `name`, creating it first if needed.
    ///
    /// When the animation already exists only `spec.x`/`spec.y` are used; the
    /// size, type and delay of the first frame stay in effect. Frames must be
    /// added in playback order.
    pub fn add_animation_frame(&mut self, file_reference: &str, name: &str, spec: FrameSpec) {
        if let Some(animation) = self.animations.get_mut(name) {
            animation.frames.push(AnimationFrame::new(spec.x, spec.y));
            animation.frame_count += 1;
            return;
        }

        self.animations.insert(
            name.to_string(),
            AnimationReference {
                file_reference: file_reference.to_string(),
                animation_reference: name.to_string(),
                animation_type: spec.animation_type,
                frame_count: 1,
                frame_delay: spec.frame_delay,
                w: spec.width,
                h: spec.height,
                frames: vec![AnimationFrame::new(spec.x, spec.y)],
            },
        );
    }

    /// Get an animation by name.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&AnimationReference> {
        self.animations.get(name.as_ref())
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.animations.contains_key(name.as_ref())
    }

    /// Names of all stored animations, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.animations.keys().cloned().collect();
        names.sort();
        names
    }

    /// Remove all animations.
    pub fn clear(&mut self) {
        self.animations.clear();
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_creates_animation() {
        let mut store = AnimationStore::new();
        store.add_animation_frame(
            "sprites",
            "RedDrop",
            FrameSpec::new(16, 16, 32, 48).with_playback(AnimationType::Loop, 0.1),
        );

        let anim = store.get("RedDrop").unwrap();
        assert_eq!(anim.file_reference, "sprites");
        assert_eq!(anim.animation_reference, "RedDrop");
        assert_eq!(anim.animation_type, AnimationType::Loop);
        assert_eq!(anim.frame_count, 1);
        assert_eq!(anim.frame_delay, 0.1);
        assert_eq!((anim.w, anim.h), (16, 16));
        assert_eq!(anim.frames, vec![AnimationFrame::new(32, 48)]);
    }

    #[test]
    fn test_frames_append_in_call_order() {
        let mut store = AnimationStore::new();
        let offsets = [(0, 0), (16, 0), (32, 0), (0, 16), (16, 16)];
        for (i, (x, y)) in offsets.iter().enumerate() {
            let spec = if i == 0 {
                FrameSpec::new(16, 16, *x, *y).with_playback(AnimationType::PingPong, 0.2)
            } else {
                FrameSpec::new(16, 16, *x, *y)
            };
            store.add_animation_frame("sprites", "Spin", spec);
        }

        let anim = store.get("Spin").unwrap();
        assert_eq!(anim.frame_count, offsets.len());
        assert_eq!(anim.frames.len(), anim.frame_count);
        for (i, (x, y)) in offsets.iter().enumerate() {
            assert_eq!(anim.frames[i], AnimationFrame::new(*x, *y));
        }
    }

    #[test]
    fn test_later_frames_do_not_change_first_frame_metadata() {
        let mut store = AnimationStore::new();
        store.add_animation_frame(
            "sprites",
            "Foo",
            FrameSpec::new(10, 20, 0, 0).with_playback(AnimationType::PingPong, 0.15),
        );
        store.add_animation_frame(
            "other",
            "Foo",
            FrameSpec::new(99, 99, 16, 0).with_playback(AnimationType::OneShot, 3.0),
        );

        let anim = store.get("Foo").unwrap();
        assert_eq!(anim.file_reference, "sprites");
        assert_eq!(anim.animation_type, AnimationType::PingPong);
        assert_eq!(anim.frame_delay, 0.15);
        assert_eq!((anim.w, anim.h), (10, 20));
        assert_eq!(anim.frame_count, 2);
        assert_eq!(anim.frames[1], AnimationFrame::new(16, 0));
    }

    #[test]
    fn test_frame_defaults_when_first_frame_has_no_playback() {
        let mut store = AnimationStore::new();
        store.add_animation_frame("sprites", "Idle", FrameSpec::new(8, 8, 0, 0));
        let anim = store.get("Idle").unwrap();
        assert_eq!(anim.animation_type, AnimationType::None);
        assert_eq!(anim.frame_delay, 0.0);
    }

    #[test]
    fn test_source_rect_uses_shared_size() {
        let mut store = AnimationStore::new();
        store.add_animation_frame("sprites", "Foo", FrameSpec::new(10, 20, 0, 0));
        store.add_animation_frame("sprites", "Foo", FrameSpec::new(10, 20, 16, 0));

        let anim = store.get("Foo").unwrap();
        assert_eq!(anim.source_rect(1).unwrap(), SourceRect::new(16, 0, 10, 20));
        assert_eq!(anim.last_frame(), 1);
    }

    #[test]
    fn test_source_rect_out_of_range() {
        let mut store = AnimationStore::new();
        store.add_animation_frame("sprites", "Foo", FrameSpec::new(10, 20, 0, 0));

        let err = store.get("Foo").unwrap().source_rect(1).unwrap_err();
        assert!(matches!(
            err,
            AssetError::FrameOutOfRange {
                frame: 1,
                frame_count: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_animation_type_codes() {
        for code in 0..4 {
            let kind = AnimationType::try_from(code).unwrap();
            assert_eq!(i32::from(kind), code);
        }
        assert!(AnimationType::try_from(4).is_err());
        assert!(AnimationType::try_from(-1).is_err());
    }

    #[test]
    fn test_clear_and_names() {
        let mut store = AnimationStore::new();
        store.add_animation_frame("sprites", "b", FrameSpec::new(1, 1, 0, 0));
        store.add_animation_frame("sprites", "a", FrameSpec::new(1, 1, 0, 0));
        assert_eq!(store.names(), vec!["a".to_string(), "b".to_string()]);
        store.clear();
        assert!(store.is_empty());
        assert!(store.get("a").is_none());
    }
}
