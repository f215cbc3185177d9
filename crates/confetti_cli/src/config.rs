//! Locating and loading confetti.toml

use anyhow::{Context, Result};
use confetti::{ExplosionConfig, Origin};
use std::path::Path;

/// File name looked up in directories
pub const CONFIG_FILE: &str = "confetti.toml";

/// Piece count used when no config file is given
pub const DEFAULT_COUNT: usize = 100;

/// Load configuration from a file, or from a directory containing
/// confetti.toml
pub fn load_from_path(path: &Path) -> Result<ExplosionConfig> {
    let config_path = if path.is_file() {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    };

    if !config_path.exists() {
        anyhow::bail!(
            "No {} found in {}. Run `confetti init` to create one.",
            CONFIG_FILE,
            path.display()
        );
    }

    ExplosionConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))
}

/// Load the given file, fall back to ./confetti.toml, then to defaults
/// centred at the top of a `width`-wide screen
pub fn resolve(path: Option<&Path>, width: f32) -> Result<ExplosionConfig> {
    if let Some(path) = path {
        return load_from_path(path);
    }

    let local = Path::new(CONFIG_FILE);
    if local.is_file() {
        tracing::info!("Using {}", local.display());
        return load_from_path(local);
    }

    Ok(default_config(width))
}

/// Defaults for a screen `width` points wide
pub fn default_config(width: f32) -> ExplosionConfig {
    ExplosionConfig::new(
        DEFAULT_COUNT,
        Origin {
            x: width / 2.0,
            y: 0.0,
        },
    )
}
