//! ECS components for entities drawn from the asset registry.
//!
//! - `animation` – per-entity animation playback state
//! - `sprite` – which sprite or animation an entity shows and its current source rect
pub mod animation;
pub mod sprite;
