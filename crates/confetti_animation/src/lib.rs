//! Confetti Animation System
//!
//! Clock-driven tweening for one-shot effects.
//!
//! # Features
//!
//! - **Easing**: quad, cubic and cubic-bezier curves
//! - **Interpolation**: piecewise-linear breakpoint mapping of a clock value
//! - **Sequences**: timing steps played back to back on a shared clock
//! - **Scheduler**: a tick-driven [`TweenEngine`] implementation

pub mod easing;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod scheduler;
pub mod timeline;
pub mod value;

pub use easing::Easing;
pub use engine::{EndCallback, SequenceId, TweenEngine};
pub use error::{AnimationError, Result};
pub use interpolate::{Extrapolate, Interpolation};
pub use scheduler::AnimationScheduler;
pub use timeline::{EndResult, Sequence, TimingStep};
pub use value::AnimatedValue;
