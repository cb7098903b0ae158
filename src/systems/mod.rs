//! ECS systems driving asset playback.
//!
//! - `animation` – advance animations and keep sprite source rects current
//! - `time` – per-frame update of the shared world clock
pub mod animation;
pub mod time;
