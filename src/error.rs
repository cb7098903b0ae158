//! Error types for texture, sprite and animation loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::resources::assetregistry::AssetTable;

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors produced while loading or querying assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Name absent from a table.
    #[error("{table} '{name}' not found")]
    NotFound {
        /// Table that was searched.
        table: AssetTable,
        /// Requested name.
        name: String,
    },

    /// A metadata line could not be classified or its fields did not parse.
    #[error("malformed record: {reason}")]
    MalformedRecord {
        /// What was wrong with the line.
        reason: String,
    },

    /// A malformed record, located inside a metadata file.
    #[error("{}:{line}: {source}", path.display())]
    MalformedLine {
        /// Metadata file being processed.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The underlying record error.
        #[source]
        source: Box<AssetError>,
    },

    /// Frame index past the end of an animation.
    #[error("frame {frame} out of range for animation '{name}' ({frame_count} frames)")]
    FrameOutOfRange {
        /// Animation name.
        name: String,
        /// Requested frame.
        frame: usize,
        /// Frames available.
        frame_count: usize,
    },

    /// Sprite or animation declared with a non-positive size.
    #[error("invalid size {width}x{height} for '{name}'")]
    InvalidSize {
        /// Sprite or animation name.
        name: String,
        /// Declared width.
        width: i32,
        /// Declared height.
        height: i32,
    },

    /// The texture backend could not load an image.
    #[error("failed to load texture {}: {reason}", path.display())]
    ResourceLoad {
        /// Image path.
        path: PathBuf,
        /// Backend message.
        reason: String,
    },

    /// Invalid asset manifest entry.
    #[error("invalid manifest entry '{entry}': {reason}")]
    Manifest {
        /// Section and key of the entry.
        entry: String,
        /// What was wrong with it.
        reason: String,
    },

    /// I/O error on a metadata or manifest file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// Creates a malformed record error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }

    /// Creates a manifest error.
    pub fn manifest(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Manifest {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for lookups of absent names.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
