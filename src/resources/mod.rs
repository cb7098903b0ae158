//! Long-lived data: the asset registry and its tables, configuration and
//! the world clock.
//!
//! Overview
//! - `animationstore` – animations accumulated frame by frame from sheet metadata
//! - `assetregistry` – owner of the texture, sprite and animation tables
//! - `gameconfig` – window and asset location settings from `config.ini`
//! - `manifest` – list of sheets and images to load at startup
//! - `spritestore` – static sprite rectangles keyed by name
//! - `texturestore` – loaded textures keyed by file reference
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod assetregistry;
pub mod gameconfig;
pub mod manifest;
pub mod spritestore;
pub mod texturestore;
pub mod worldtime;
