//! Sprite sheet and image loading.
//!
//! [`load_file`] reads the metadata file that sits next to an image, feeds
//! each line to the [`metadata`](crate::metadata) parser and registers the
//! resulting sprites and animation frames under the sheet's reference. Once
//! every line has been accepted the image itself is loaded through the
//! [`TextureBackend`] and stored under the same reference.
//!
//! The first malformed line stops the load: records from earlier lines stay
//! registered, later lines are not read and the texture is not loaded.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::backend::TextureBackend;
use crate::error::{AssetError, AssetResult};
use crate::metadata::{MetadataRecord, parse_line, trim_line_ending};
use crate::resources::assetregistry::AssetRegistry;
use crate::resources::manifest::AssetManifest;
use crate::resources::spritestore::SpriteReference;

/// Extension of the metadata file that accompanies a sprite sheet.
pub const METADATA_EXTENSION: &str = "txt";

/// What a successful [`load_file`] registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub sprites: usize,
    pub frames: usize,
}

/// Metadata path for an image: same name, `.txt` extension.
pub fn metadata_path_for(image: &Path) -> PathBuf {
    image.with_extension(METADATA_EXTENSION)
}

/// Read all lines of a text file with their line terminators removed.
pub fn read_lines(path: &Path) -> AssetResult<Vec<String>> {
    let io_err = |source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf).map_err(io_err)? == 0 {
            break;
        }
        lines.push(trim_line_ending(&buf).to_string());
    }
    Ok(lines)
}

/// Register one parsed record under the sheet `reference`.
///
/// Returns false for blank records.
pub fn ingest_record<T>(
    registry: &mut AssetRegistry<T>,
    reference: &str,
    record: &MetadataRecord,
) -> AssetResult<bool> {
    match record {
        MetadataRecord::Blank => Ok(false),
        MetadataRecord::Sprite {
            name,
            width,
            height,
            x,
            y,
        } => {
            let sprite = SpriteReference::new(reference, name.as_str(), *width, *height, *x, *y)?;
            if registry.put_sprite(sprite).is_some() {
                warn!("Sprite '{}' redefined in '{}'", name, reference);
            }
            debug!("Sprite '{}' added to '{}'", name, reference);
            Ok(true)
        }
        MetadataRecord::FirstFrame { name, .. } | MetadataRecord::Frame { name, .. } => {
            if let Some(spec) = record.frame_spec() {
                registry.add_animation_frame(reference, name, spec);
                debug!("Animation frame for '{}' added to '{}'", name, reference);
            }
            Ok(true)
        }
    }
}

/// Load a sprite sheet: metadata first, then the image.
pub fn load_file<B: TextureBackend>(
    registry: &mut AssetRegistry<B::Texture>,
    backend: &mut B,
    image: &Path,
    reference: &str,
) -> AssetResult<LoadReport> {
    let metadata_path = metadata_path_for(image);
    let lines = read_lines(&metadata_path).inspect_err(|e| {
        error!("load_file: error opening {}: {}", metadata_path.display(), e);
    })?;

    let mut report = LoadReport::default();
    for (index, line) in lines.iter().enumerate() {
        let record = parse_line(line)
            .and_then(|record| ingest_record(registry, reference, &record).map(|_| record))
            .map_err(|source| AssetError::MalformedLine {
                path: metadata_path.clone(),
                line: index + 1,
                source: Box::new(source),
            })?;
        match record {
            MetadataRecord::Sprite { .. } => report.sprites += 1,
            MetadataRecord::FirstFrame { .. } | MetadataRecord::Frame { .. } => {
                report.frames += 1
            }
            MetadataRecord::Blank => {}
        }
    }

    add_file_reference(registry, backend, image, reference)?;
    info!(
        "Loaded '{}' from {}: {} sprites, {} animation frames",
        reference,
        image.display(),
        report.sprites,
        report.frames
    );
    Ok(report)
}

/// Load an image and store it under `reference`.
///
/// On failure the error is logged and the texture slot is left untouched.
pub fn add_file_reference<B: TextureBackend>(
    registry: &mut AssetRegistry<B::Texture>,
    backend: &mut B,
    image: &Path,
    reference: &str,
) -> AssetResult<()> {
    let texture = backend.load_texture(image).inspect_err(|e| {
        error!("add_file_reference: {}", e);
    })?;
    registry.put_texture(reference, texture);
    Ok(())
}

/// Load every sheet and image listed in a manifest.
///
/// Entries are loaded in name order; failures are logged and skipped.
/// Returns the number of entries that failed.
pub fn initialize_textures<B: TextureBackend>(
    registry: &mut AssetRegistry<B::Texture>,
    backend: &mut B,
    manifest: &AssetManifest,
) -> usize {
    let mut failures = 0;

    for sheet in manifest.sheets() {
        let path = manifest.resolve(&sheet.path);
        if let Err(e) = load_file(registry, backend, &path, &sheet.reference) {
            error!("Sheet '{}' not loaded: {}", sheet.reference, e);
            failures += 1;
        }
    }

    for image in manifest.images() {
        let path = manifest.resolve(&image.path);
        // validate the sprite first so a bad size never leaves a texture behind
        let loaded = SpriteReference::new(
            &image.reference,
            &image.reference,
            image.width,
            image.height,
            image.x,
            image.y,
        )
        .and_then(|sprite| {
            add_file_reference(registry, backend, &path, &image.reference)?;
            registry.put_sprite(sprite);
            Ok(())
        });
        if let Err(e) = loaded {
            error!("Image '{}' not loaded: {}", image.reference, e);
            failures += 1;
        }
    }

    info!(
        "Textures initialized: {} textures, {} sprites, {} animations ({} failed entries)",
        registry.textures().len(),
        registry.sprites().len(),
        registry.animations().len(),
        failures
    );
    failures
}
