//! Explosion error types

use std::path::PathBuf;

use confetti_animation::AnimationError;
use thiserror::Error;

/// Errors raised while configuring or sampling an explosion
#[derive(Error, Debug)]
pub enum ExplosionError {
    /// No colours to draw with
    #[error("color palette is empty")]
    EmptyPalette,

    /// Config file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config document is malformed
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written out
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A particle produced unusable interpolation breakpoints
    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// Result type for explosion operations
pub type Result<T> = std::result::Result<T, ExplosionError>;
