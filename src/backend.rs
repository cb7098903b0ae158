//! Texture loading backends.
//!
//! The registry never talks to the graphics library directly. Images are
//! turned into texture handles by a [`TextureBackend`]; the handle type is
//! whatever the backend returns and is released by dropping it.
//!
//! - [`RaylibBackend`] (feature `raylib`) uploads images to the GPU through a
//!   raylib window/renderer pair.
//! - [`FileCheckBackend`] only checks that the image exists. It is used for
//!   headless validation of metadata and manifests.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AssetError, AssetResult};

/// Turns image files into texture handles.
pub trait TextureBackend {
    type Texture;

    /// Load the image at `path`.
    fn load_texture(&mut self, path: &Path) -> AssetResult<Self::Texture>;
}

/// Backend that resolves images to their checked path without decoding them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileCheckBackend;

impl TextureBackend for FileCheckBackend {
    type Texture = PathBuf;

    fn load_texture(&mut self, path: &Path) -> AssetResult<PathBuf> {
        if !path.is_file() {
            return Err(AssetError::ResourceLoad {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }
        debug!("Found image {}", path.display());
        Ok(path.to_path_buf())
    }
}

#[cfg(feature = "raylib")]
pub use self::raylib_backend::{RaylibBackend, init_window};

#[cfg(feature = "raylib")]
mod raylib_backend {
    use std::path::Path;

    use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};

    use super::TextureBackend;
    use crate::error::{AssetError, AssetResult};
    use crate::resources::gameconfig::GameConfig;

    /// Open the window and its renderer.
    pub fn init_window(config: &GameConfig) -> (RaylibHandle, RaylibThread) {
        let (mut rl, thread) = raylib::init()
            .size(config.window_width as i32, config.window_height as i32)
            .title(&config.window_title)
            .build();
        rl.set_target_fps(config.target_fps);
        (rl, thread)
    }

    /// Loads textures onto the GPU of an open raylib window.
    ///
    /// `Texture2D` unloads itself on drop.
    pub struct RaylibBackend<'a> {
        rl: &'a mut RaylibHandle,
        thread: &'a RaylibThread,
    }

    impl<'a> RaylibBackend<'a> {
        pub fn new(rl: &'a mut RaylibHandle, thread: &'a RaylibThread) -> Self {
            Self { rl, thread }
        }
    }

    impl TextureBackend for RaylibBackend<'_> {
        type Texture = Texture2D;

        fn load_texture(&mut self, path: &Path) -> AssetResult<Texture2D> {
            let path_str = path.to_str().ok_or_else(|| AssetError::ResourceLoad {
                path: path.to_path_buf(),
                reason: "path is not valid UTF-8".to_string(),
            })?;
            self.rl
                .load_texture(self.thread, path_str)
                .map_err(|e| AssetError::ResourceLoad {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
        }
    }
}
