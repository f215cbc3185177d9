//! Explosion configuration
//!
//! Plain data, loadable from TOML. Lifecycle callbacks are code and are
//! attached through [`ExplosionBuilder`](crate::ExplosionBuilder) instead.

use std::fs;
use std::path::Path;

use confetti_animation::{Easing, TimingStep};
use serde::{Deserialize, Serialize};

use crate::error::{ExplosionError, Result};
use crate::palette::{default_colors, Palette};

/// Burst duration used when none is configured (ms)
pub const DEFAULT_EXPLOSION_SPEED: u32 = 350;
/// Fall duration used when none is configured (ms)
pub const DEFAULT_FALL_SPEED: u32 = 3000;

/// Point the confetti bursts from
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

/// Explosion settings (confetti.toml)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplosionConfig {
    /// Number of pieces
    pub count: usize,
    pub origin: Origin,
    /// Burst phase duration in milliseconds
    #[serde(default = "default_explosion_speed")]
    pub explosion_speed: u32,
    /// Fall phase duration in milliseconds
    #[serde(default = "default_fall_speed")]
    pub fall_speed: u32,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    /// Fade pieces out at the end of the fall
    #[serde(default)]
    pub fade_out: bool,
    /// Start as soon as the explosion is mounted
    #[serde(default = "default_true")]
    pub auto_start: bool,
    #[serde(default = "default_explosion_easing")]
    pub explosion_easing: Easing,
    #[serde(default = "default_fall_easing")]
    pub fall_easing: Easing,
    /// Fixed RNG seed for reproducible particles and colours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_explosion_speed() -> u32 {
    DEFAULT_EXPLOSION_SPEED
}

fn default_fall_speed() -> u32 {
    DEFAULT_FALL_SPEED
}

fn default_true() -> bool {
    true
}

fn default_explosion_easing() -> Easing {
    Easing::EaseOutQuad
}

fn default_fall_easing() -> Easing {
    Easing::EaseInQuad
}

impl ExplosionConfig {
    /// Configuration with every optional field at its default
    pub fn new(count: usize, origin: Origin) -> Self {
        Self {
            count,
            origin,
            explosion_speed: default_explosion_speed(),
            fall_speed: default_fall_speed(),
            colors: default_colors(),
            fade_out: false,
            auto_start: true,
            explosion_easing: default_explosion_easing(),
            fall_easing: default_fall_easing(),
            seed: None,
        }
    }

    /// Parse from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ExplosionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn palette(&self) -> Result<Palette> {
        Palette::new(self.colors.clone())
    }

    /// The reset / burst / fall steps driving the clock 0 -> 1 -> 2
    pub fn timeline(&self) -> Vec<TimingStep> {
        vec![
            TimingStep::new(0.0, 0),
            TimingStep::new(1.0, self.explosion_speed).with_easing(self.explosion_easing),
            TimingStep::new(2.0, self.fall_speed).with_easing(self.fall_easing),
        ]
    }

    /// Length of one full run in milliseconds
    pub fn total_duration_ms(&self) -> u32 {
        self.timeline().iter().map(|s| s.duration_ms).sum()
    }
}
