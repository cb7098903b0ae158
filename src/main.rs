//! Chain Drop texture loader entry point.
//!
//! Loads every sprite sheet and image listed in the asset manifest into an
//! [`AssetRegistry`], reports what was registered and releases it again.
//!
//! - With the `raylib` feature (and without `--headless`) a window is opened
//!   and textures are uploaded to the GPU.
//! - Otherwise images are only checked for existence, which validates the
//!   manifest and all sheet metadata without a display.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --headless --json
//! cargo run --features raylib -- --config config.ini
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use chaindrop_textures::backend::FileCheckBackend;
use chaindrop_textures::loader::initialize_textures;
use chaindrop_textures::resources::assetregistry::{AssetRegistry, RegistrySummary};
use chaindrop_textures::resources::gameconfig::GameConfig;
use chaindrop_textures::resources::manifest::AssetManifest;
use clap::Parser;
use log::{error, info, warn};

/// Chain Drop texture loader
#[derive(Parser)]
#[command(version, about = "Loads and validates Chain Drop sprite sheets and animations.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Asset manifest, overriding the one named in the configuration.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Validate assets without opening a window.
    #[arg(long)]
    headless: bool,

    /// Print the registry summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }

    let manifest_path = cli.manifest.clone().unwrap_or_else(|| config.manifest_path());
    let manifest = match AssetManifest::load(&manifest_path, config.asset_root()) {
        Ok(manifest) => manifest,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let (summary, failures) = if cli.headless || !cfg!(feature = "raylib") {
        if !cli.headless {
            info!("Built without the raylib feature, running headless");
        }
        load_headless(&manifest)
    } else {
        load_with_window(&config, &manifest)
    };

    print_summary(&summary, cli.json);

    if failures > 0 {
        error!("{} manifest entries failed to load", failures);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn load_headless(manifest: &AssetManifest) -> (RegistrySummary, usize) {
    let mut registry = AssetRegistry::new();
    let failures = initialize_textures(&mut registry, &mut FileCheckBackend, manifest);
    let summary = registry.summary();
    registry.teardown();
    (summary, failures)
}

#[cfg(feature = "raylib")]
fn load_with_window(config: &GameConfig, manifest: &AssetManifest) -> (RegistrySummary, usize) {
    use chaindrop_textures::backend::{RaylibBackend, init_window};

    let (mut rl, thread) = init_window(config);
    let mut registry = AssetRegistry::new();
    let failures = {
        let mut backend = RaylibBackend::new(&mut rl, &thread);
        initialize_textures(&mut registry, &mut backend, manifest)
    };
    let summary = registry.summary();
    // textures must be released before the window closes
    registry.teardown();
    drop(rl);
    (summary, failures)
}

#[cfg(not(feature = "raylib"))]
fn load_with_window(_config: &GameConfig, manifest: &AssetManifest) -> (RegistrySummary, usize) {
    load_headless(manifest)
}

fn print_summary(summary: &RegistrySummary, json: bool) {
    if json {
        match serde_json::to_string_pretty(summary) {
            Ok(text) => println!("{text}"),
            Err(e) => error!("Failed to serialize summary: {}", e),
        }
        return;
    }
    println!("textures ({}): {}", summary.textures.len(), summary.textures.join(", "));
    println!("sprites ({}): {}", summary.sprites.len(), summary.sprites.join(", "));
    println!(
        "animations ({}): {}",
        summary.animations.len(),
        summary.animations.join(", ")
    );
}
