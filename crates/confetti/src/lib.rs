//! Confetti
//!
//! A one-shot confetti explosion: a burst of particles that arc out of an
//! origin point, fall back under an accelerating curve and optionally fade.
//!
//! Every particle is a fixed random motion profile ([`Particle`]). Its
//! position, spin, sway and opacity are interpolated from one shared clock
//! that a [`TweenEngine`](confetti_animation::TweenEngine) drives through
//! three phases: reset to 0, burst to 1, fall to 2.
//!
//! # Example
//!
//! ```rust
//! use confetti::{ExplosionBuilder, ExplosionConfig, Origin, ScreenSize};
//! use confetti_animation::AnimationScheduler;
//!
//! let scheduler = AnimationScheduler::new();
//! let config = ExplosionConfig::new(50, Origin { x: 0.0, y: 0.0 });
//!
//! let mut explosion = ExplosionBuilder::new(config)
//!     .on_animation_end(|particles| println!("{} pieces landed", particles.len()))
//!     .build(scheduler.clone())
//!     .unwrap();
//!
//! explosion.mount();
//! scheduler.tick(16.0);
//!
//! let frame = explosion.frame(&ScreenSize::new(390.0, 844.0)).unwrap();
//! assert_eq!(frame.len(), 50);
//! ```

pub mod config;
pub mod error;
pub mod explosion;
pub mod host;
pub mod palette;
pub mod particle;
pub mod transform;

pub use config::{ExplosionConfig, Origin, DEFAULT_EXPLOSION_SPEED, DEFAULT_FALL_SPEED};
pub use error::{ExplosionError, Result};
pub use explosion::{Explosion, ExplosionBuilder, ExplosionState};
pub use host::{ConfettiCanvas, ConfettiPiece, ScreenMetrics, ScreenSize, Transform};
pub use palette::{Palette, DEFAULT_COLORS};
pub use particle::{Particle, ParticleGenerator, SpeedDelta, TOP_MIN};
pub use transform::{ParticleTrack, ParticleTransform};
