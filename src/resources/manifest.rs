//! Asset manifest.
//!
//! Lists the sprite sheets and standalone images to load at startup. Keys
//! are case-sensitive because they become sprite and texture names.
//!
//! # Manifest File Format
//!
//! ```ini
//! [sheets]
//! sprites = image/sprites.png
//! ui = image/ui.png
//!
//! [images]
//! ; reference = path, width, height[, x, y]
//! CloudBox = image/CloudBox.png, 392, 294
//! Arrow = image/Arrow.png, 16, 57
//! ```
//!
//! Sheets are loaded together with their `.txt` metadata. Each image becomes
//! a texture and a sprite, both named after the key.

use std::path::{Path, PathBuf};

use configparser::ini::Ini;
use log::info;

use crate::error::{AssetError, AssetResult};

const SHEETS_SECTION: &str = "sheets";
const IMAGES_SECTION: &str = "images";

/// A sprite sheet: image plus companion metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    pub reference: String,
    pub path: PathBuf,
}

/// A standalone image registered as a single sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub reference: String,
    pub path: PathBuf,
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

/// Parsed manifest, entries sorted by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    root: PathBuf,
    sheets: Vec<SheetEntry>,
    images: Vec<ImageEntry>,
}

impl AssetManifest {
    /// Empty manifest whose paths resolve against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sheets: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Read a manifest file. Paths resolve against `root`.
    pub fn load(path: &Path, root: impl Into<PathBuf>) -> AssetResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&contents, root)?;
        info!(
            "Loaded manifest {}: {} sheets, {} images",
            path.display(),
            manifest.sheets.len(),
            manifest.images.len()
        );
        Ok(manifest)
    }

    /// Parse manifest text.
    pub fn parse(contents: &str, root: impl Into<PathBuf>) -> AssetResult<Self> {
        let mut ini = Ini::new_cs();
        ini.read(contents.to_string())
            .map_err(|e| AssetError::manifest("<file>", e))?;

        let mut manifest = Self::new(root);

        for (reference, value) in sorted_section(&ini, SHEETS_SECTION) {
            let entry = format!("{SHEETS_SECTION}.{reference}");
            let path = value
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AssetError::manifest(&entry, "missing image path"))?;
            manifest.sheets.push(SheetEntry {
                reference,
                path: PathBuf::from(path.trim()),
            });
        }

        for (reference, value) in sorted_section(&ini, IMAGES_SECTION) {
            let entry = format!("{IMAGES_SECTION}.{reference}");
            if manifest.sheets.iter().any(|s| s.reference == reference) {
                return Err(AssetError::manifest(
                    &entry,
                    "texture name already used by a sheet",
                ));
            }
            let value = value.ok_or_else(|| AssetError::manifest(&entry, "missing value"))?;
            manifest.images.push(parse_image(&entry, reference, &value)?);
        }

        Ok(manifest)
    }

    pub fn sheets(&self) -> &[SheetEntry] {
        &self.sheets
    }

    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an entry path against the asset root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

fn sorted_section(ini: &Ini, section: &str) -> Vec<(String, Option<String>)> {
    let mut entries: Vec<(String, Option<String>)> = ini
        .get_map_ref()
        .get(section)
        .map(|keys| keys.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

fn parse_image(entry: &str, reference: String, value: &str) -> AssetResult<ImageEntry> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 5 {
        return Err(AssetError::manifest(
            entry,
            "expected 'path, width, height' or 'path, width, height, x, y'",
        ));
    }
    let int = |i: usize| -> AssetResult<i32> {
        parts[i]
            .parse()
            .map_err(|_| AssetError::manifest(entry, format!("'{}' is not an integer", parts[i])))
    };
    let (x, y) = if parts.len() == 5 { (int(3)?, int(4)?) } else { (0, 0) };
    Ok(ImageEntry {
        reference,
        path: PathBuf::from(parts[0]),
        width: int(1)?,
        height: int(2)?,
        x,
        y,
    })
}
