//! Config scaffolding

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{default_config, CONFIG_FILE};

const HEADER: &str = "# Confetti explosion settings
#
# count            number of pieces
# origin           burst point in screen coordinates
# explosion_speed  burst duration (ms)
# fall_speed       fall duration (ms)
# colors           palette, one picked per piece on every render
# fade_out         fade pieces out at the end of the fall
# auto_start       play as soon as the explosion is mounted
# seed             optional, fixes particles and colours

";

/// Write a default confetti.toml into `path` (a directory, created if
/// needed). Refuses to overwrite an existing file.
pub fn init_config(path: &Path, width: f32) -> Result<PathBuf> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let body = default_config(width)
        .to_toml()
        .context("Failed to serialize config")?;
    fs::write(&config_path, format!("{HEADER}{body}"))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "config written");
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_from_path, DEFAULT_COUNT};

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("party");

        let written = init_config(&target, 400.0).unwrap();
        assert_eq!(written, target.join(CONFIG_FILE));

        let config = load_from_path(&target).unwrap();
        assert_eq!(config, default_config(400.0));
        assert_eq!(config.count, DEFAULT_COUNT);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "mine").unwrap();

        assert!(init_config(dir.path(), 400.0).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap(),
            "mine"
        );
    }
}
