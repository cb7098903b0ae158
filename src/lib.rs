//! Chain Drop texture registry.
//!
//! Loads sprite sheets and their tab-separated metadata into an
//! [`AssetRegistry`](resources::assetregistry::AssetRegistry) of textures,
//! sprites and animations, and exposes ECS components and systems that play
//! those animations back.

pub mod backend;
pub mod components;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod resources;
pub mod systems;
