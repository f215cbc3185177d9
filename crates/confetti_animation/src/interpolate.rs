//! Piecewise-linear interpolation of a clock value
//!
//! An [`Interpolation`] maps an input value (usually an animation clock)
//! onto an output value through matching breakpoint lists. Segment lookup
//! picks the first breakpoint at or above the input, so repeated
//! breakpoints (`[0, 1, 2, 2]`) are legal and resolve deterministically.

use smallvec::SmallVec;

use crate::error::{AnimationError, Result};

/// What happens to inputs outside the breakpoint range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolate {
    /// Continue the edge segment's slope
    #[default]
    Extend,
    /// Hold the edge output value
    Clamp,
}

/// Breakpoint-based mapping from input to output
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    input: SmallVec<[f32; 4]>,
    output: SmallVec<[f32; 4]>,
    extrapolate: Extrapolate,
}

impl Interpolation {
    /// Build an interpolation from matching input/output breakpoints.
    ///
    /// The input range must hold at least two finite, non-decreasing values
    /// and the output range must be the same length.
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self> {
        if input.len() != output.len() {
            return Err(AnimationError::RangeLengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(AnimationError::TooFewBreakpoints(input.len()));
        }
        if let Some(bad) = input.iter().chain(output).find(|v| !v.is_finite()) {
            return Err(AnimationError::NonFinite(*bad));
        }
        for pair in input.windows(2) {
            if pair[1] < pair[0] {
                return Err(AnimationError::DecreasingInput {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }

        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
            extrapolate: Extrapolate::default(),
        })
    }

    /// Builder: set the extrapolation mode for both ends
    pub fn extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Map `value` through the breakpoints
    pub fn sample(&self, value: f32) -> f32 {
        let idx = self.find_segment(value);
        let (in_min, in_max) = (self.input[idx], self.input[idx + 1]);
        let (out_min, out_max) = (self.output[idx], self.output[idx + 1]);

        let mut x = value;
        if self.extrapolate == Extrapolate::Clamp {
            x = x.clamp(in_min, in_max);
        }

        if out_min == out_max {
            return out_min;
        }

        if in_min == in_max {
            return if x <= in_min { out_min } else { out_max };
        }

        let progress = (x - in_min) / (in_max - in_min);
        progress * (out_max - out_min) + out_min
    }

    /// Index of the segment's first breakpoint
    fn find_segment(&self, value: f32) -> usize {
        let last = self.input.len() - 1;
        let mut i = 1;
        while i < last {
            if self.input[i] >= value {
                break;
            }
            i += 1;
        }
        i - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_segments() {
        let interp = Interpolation::new(&[0.0, 1.0, 2.0], &[100.0, 300.0, 300.0]).unwrap();

        assert_eq!(interp.sample(0.0), 100.0);
        assert_eq!(interp.sample(0.5), 200.0);
        assert_eq!(interp.sample(1.0), 300.0);
        assert_eq!(interp.sample(1.7), 300.0);
        assert_eq!(interp.sample(2.0), 300.0);
    }

    #[test]
    fn test_repeated_breakpoint_lands_on_last_segment() {
        // Vertical track of a particle whose top_delta is exactly 1.0
        let interp = Interpolation::new(&[0.0, 1.0, 2.0, 2.0], &[-200.0, -800.0, 0.0, 0.0]).unwrap();

        assert_eq!(interp.sample(1.0), -800.0);
        assert_eq!(interp.sample(1.5), -400.0);
        assert_eq!(interp.sample(2.0), 0.0);
    }

    #[test]
    fn test_zero_width_segment() {
        let interp = Interpolation::new(&[0.0, 0.0], &[5.0, 10.0]).unwrap();

        assert_eq!(interp.sample(-1.0), 5.0);
        assert_eq!(interp.sample(0.0), 5.0);
        assert_eq!(interp.sample(0.1), 10.0);
    }

    #[test]
    fn test_extend_and_clamp() {
        let interp = Interpolation::new(&[0.0, 1.0], &[0.0, 10.0]).unwrap();
        assert_eq!(interp.sample(2.0), 20.0);
        assert_eq!(interp.sample(-1.0), -10.0);

        let clamped = interp.extrapolate(Extrapolate::Clamp);
        assert_eq!(clamped.sample(2.0), 10.0);
        assert_eq!(clamped.sample(-1.0), 0.0);
    }

    #[test]
    fn test_invalid_ranges() {
        assert_eq!(
            Interpolation::new(&[0.0], &[1.0]),
            Err(AnimationError::TooFewBreakpoints(1))
        );
        assert_eq!(
            Interpolation::new(&[0.0, 1.0], &[1.0]),
            Err(AnimationError::RangeLengthMismatch { input: 2, output: 1 })
        );
        assert_eq!(
            Interpolation::new(&[0.0, 1.0, 0.5], &[0.0, 1.0, 2.0]),
            Err(AnimationError::DecreasingInput { prev: 1.0, next: 0.5 })
        );
        assert!(matches!(
            Interpolation::new(&[0.0, f32::NAN], &[0.0, 1.0]),
            Err(AnimationError::NonFinite(_))
        ));
    }
}
