//! Animation error types

use thiserror::Error;

/// Errors raised while building interpolations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Fewer than two breakpoints were supplied
    #[error("interpolation needs at least 2 breakpoints, got {0}")]
    TooFewBreakpoints(usize),

    /// Input and output ranges differ in length
    #[error("input range has {input} breakpoints but output range has {output}")]
    RangeLengthMismatch { input: usize, output: usize },

    /// Input range goes backwards
    #[error("input range must be non-decreasing: {prev} is followed by {next}")]
    DecreasingInput { prev: f32, next: f32 },

    /// A breakpoint is NaN or infinite
    #[error("interpolation breakpoint is not finite: {0}")]
    NonFinite(f32),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
