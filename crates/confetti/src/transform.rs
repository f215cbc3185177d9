//! Per-particle transforms as a function of the explosion clock
//!
//! The clock runs over `[0, 2]`: `[0, 1]` is the burst, `[1, 2]` the fall.
//! Every channel below is a fixed breakpoint interpolation of that one
//! value, shaped by the particle's own coefficients.

use confetti_animation::{AnimationError, Interpolation};
use serde::Serialize;

use crate::config::Origin;
use crate::host::{ScreenSize, Transform};
use crate::particle::Particle;

/// Clock value at the end of the burst phase
pub const BURST_END: f32 = 1.0;
/// Clock value at the end of the fall phase
pub const FALL_END: f32 = 2.0;
/// Clock value where fading begins
pub const FADE_START: f32 = 1.8;
/// Full turns per axis over the whole run at speed factor 1
pub const ROTATE_X_TURNS: f32 = 10.0;
pub const ROTATE_Y_TURNS: f32 = 5.0;
pub const ROTATE_Z_TURNS: f32 = 2.0;
/// Sway amplitude in points at swing factor 1
pub const SWING_AMPLITUDE: f32 = 30.0;

const SWING_BREAKPOINTS: [f32; 4] = [0.0, 0.4, 1.2, FALL_END];

/// Resolved transform channels of one particle at one clock value
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParticleTransform {
    /// Horizontal container offset
    pub left: f32,
    /// Vertical container offset
    pub top: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
    /// Horizontal sway applied after rotation
    pub swing: f32,
    pub opacity: f32,
}

impl ParticleTransform {
    pub fn container_transform(&self) -> [Transform; 2] {
        [Transform::TranslateX(self.left), Transform::TranslateY(self.top)]
    }

    pub fn transform(&self) -> [Transform; 4] {
        [
            Transform::RotateX(self.rotate_x),
            Transform::RotateY(self.rotate_y),
            Transform::Rotate(self.rotate_z),
            Transform::TranslateX(self.swing),
        ]
    }
}

/// Interpolation tracks of one particle for a given screen and origin
#[derive(Clone, Debug)]
pub struct ParticleTrack {
    left: Interpolation,
    top: Interpolation,
    rotate_x: Interpolation,
    rotate_y: Interpolation,
    rotate_z: Interpolation,
    swing: Interpolation,
    opacity: Interpolation,
}

impl ParticleTrack {
    pub fn new(
        particle: &Particle,
        origin: Origin,
        screen: ScreenSize,
        fade_out: bool,
    ) -> Result<Self, AnimationError> {
        let landing_x = particle.left_delta * screen.width;
        let peak_y = -particle.top_delta * screen.height;
        let sway = particle.swing_delta * SWING_AMPLITUDE;
        let spin = |speed: f32, turns: f32| {
            Interpolation::new(&[0.0, FALL_END], &[0.0, speed * 360.0 * turns])
        };

        Ok(Self {
            left: Interpolation::new(
                &[0.0, BURST_END, FALL_END],
                &[origin.x, landing_x, landing_x],
            )?,
            // Rises to the peak during the burst, then lands after
            // `top_delta` of clock time and rests
            top: Interpolation::new(
                &[0.0, BURST_END, BURST_END + particle.top_delta, FALL_END],
                &[-origin.y, peak_y, 0.0, 0.0],
            )?,
            rotate_x: spin(particle.speed_delta.rotate_x, ROTATE_X_TURNS)?,
            rotate_y: spin(particle.speed_delta.rotate_y, ROTATE_Y_TURNS)?,
            rotate_z: spin(particle.speed_delta.rotate_z, ROTATE_Z_TURNS)?,
            swing: Interpolation::new(&SWING_BREAKPOINTS, &[0.0, -sway, sway, 0.0])?,
            opacity: Interpolation::new(
                &[0.0, BURST_END, FADE_START, FALL_END],
                &[1.0, 1.0, 1.0, if fade_out { 0.0 } else { 1.0 }],
            )?,
        })
    }

    /// Resolve every channel at clock value `t`
    pub fn sample(&self, t: f32) -> ParticleTransform {
        ParticleTransform {
            left: self.left.sample(t),
            top: self.top.sample(t),
            rotate_x: self.rotate_x.sample(t),
            rotate_y: self.rotate_y.sample(t),
            rotate_z: self.rotate_z.sample(t),
            swing: self.swing.sample(t),
            opacity: self.opacity.sample(t),
        }
    }
}
