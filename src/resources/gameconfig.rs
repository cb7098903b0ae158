//! Game configuration.
//!
//! Window settings and asset locations loaded from an INI configuration file.
//! Defaults are used for anything missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 360
//! title = Chain Drop
//! target_fps = 60
//!
//! [assets]
//! root = .
//! manifest = assets.ini
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 360;
const DEFAULT_WINDOW_TITLE: &str = "Chain Drop";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ASSET_ROOT: &str = ".";
const DEFAULT_MANIFEST: &str = "assets.ini";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and asset settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub window_title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Directory that manifest and image paths are relative to.
    pub asset_root: PathBuf,
    /// Manifest file, relative to `asset_root` unless absolute.
    pub manifest: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [assets] section
        if let Some(root) = config.get("assets", "root") {
            self.asset_root = PathBuf::from(root);
        }
        if let Some(manifest) = config.get("assets", "manifest") {
            self.manifest = PathBuf::from(manifest);
        }

        info!(
            "Loaded config: {}x{} window '{}', fps={}, assets in {:?}, manifest {:?}",
            self.window_width,
            self.window_height,
            self.window_title,
            self.target_fps,
            self.asset_root,
            self.manifest
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.window_title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [assets] section
        config.set("assets", "root", Some(self.asset_root.display().to_string()));
        config.set("assets", "manifest", Some(self.manifest.display().to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Manifest location with the asset root applied.
    pub fn manifest_path(&self) -> PathBuf {
        self.asset_root.join(&self.manifest)
    }

    /// Asset root directory.
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }
}
