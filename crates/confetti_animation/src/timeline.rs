//! Timing steps played back to back on one clock

use crate::easing::Easing;
use crate::value::AnimatedValue;

/// One `(to_value, duration, easing)` leg of a sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingStep {
    pub to_value: f32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl TimingStep {
    pub fn new(to_value: f32, duration_ms: u32) -> Self {
        Self {
            to_value,
            duration_ms,
            easing: Easing::Linear,
        }
    }

    /// Builder: set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// How a sequence run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndResult {
    /// `true` when every step played to completion, `false` when the run
    /// was stopped or interrupted
    pub finished: bool,
}

/// A sequence of timing steps driving one [`AnimatedValue`]
///
/// Each step animates from whatever value the clock holds when the step
/// begins. Restarting after a stop re-enters the interrupted step from the
/// clock's present value with that step's full duration. Time left over
/// when a step completes carries into the next one.
#[derive(Clone, Debug)]
pub struct Sequence {
    clock: AnimatedValue,
    steps: Vec<TimingStep>,
    current: usize,
    /// Milliseconds into the current step
    step_elapsed: f64,
    step_from: f32,
    playing: bool,
}

impl Sequence {
    pub fn new(clock: AnimatedValue, steps: Vec<TimingStep>) -> Self {
        Self {
            clock,
            steps,
            current: 0,
            step_elapsed: 0.0,
            step_from: 0.0,
            playing: false,
        }
    }

    pub fn clock(&self) -> &AnimatedValue {
        &self.clock
    }

    pub fn steps(&self) -> &[TimingStep] {
        &self.steps
    }

    /// Index of the step currently playing (or about to)
    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Sum of all step durations
    pub fn total_duration_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_ms).sum()
    }

    /// Begin or continue playback from the current step.
    ///
    /// Zero-duration steps complete immediately. Returns `true` when the
    /// whole sequence completed inside this call.
    pub fn start(&mut self) -> bool {
        self.playing = true;
        self.begin_step();
        self.advance(0.0)
    }

    /// Halt playback where it is. Returns whether it was playing.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.playing, false)
    }

    /// Advance by `dt_ms`. Returns `true` on the call that completes the
    /// last step.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }
        self.advance(f64::from(dt_ms))
    }

    fn begin_step(&mut self) {
        self.step_from = self.clock.get();
        self.step_elapsed = 0.0;
    }

    fn advance(&mut self, mut dt_ms: f64) -> bool {
        loop {
            let Some(step) = self.steps.get(self.current).copied() else {
                // Rewind so a later start replays from the first step
                self.playing = false;
                self.current = 0;
                return true;
            };

            let remaining = f64::from(step.duration_ms) - self.step_elapsed;
            if dt_ms < remaining {
                self.step_elapsed += dt_ms;
                let progress = (self.step_elapsed / f64::from(step.duration_ms)) as f32;
                let eased = step.easing.apply(progress);
                self.clock
                    .set(self.step_from + (step.to_value - self.step_from) * eased);
                return false;
            }

            dt_ms -= remaining.max(0.0);
            self.clock.set(step.to_value);
            self.current += 1;
            self.begin_step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burst(clock: &AnimatedValue) -> Sequence {
        Sequence::new(
            clock.clone(),
            vec![
                TimingStep::new(0.0, 0),
                TimingStep::new(1.0, 100).with_easing(Easing::EaseOutQuad),
                TimingStep::new(2.0, 400).with_easing(Easing::EaseInQuad),
            ],
        )
    }

    #[test]
    fn test_zero_duration_step_applies_on_start() {
        let clock = AnimatedValue::new(1.7);
        let mut seq = burst(&clock);

        assert!(!seq.start());
        assert_eq!(clock.get(), 0.0);
        assert_eq!(seq.current_step(), 1);
        assert!(seq.is_playing());
    }

    #[test]
    fn test_steps_follow_easing() {
        let clock = AnimatedValue::new(0.0);
        let mut seq = burst(&clock);
        seq.start();

        seq.tick(50.0);
        assert!((clock.get() - 0.75).abs() < 1e-6);

        seq.tick(50.0);
        assert_eq!(clock.get(), 1.0);

        seq.tick(200.0);
        assert!((clock.get() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_completes_after_total_duration() {
        let clock = AnimatedValue::new(0.0);
        let mut seq = burst(&clock);
        assert_eq!(seq.total_duration_ms(), 500);

        seq.start();
        assert!(!seq.tick(499.0));
        assert!(seq.tick(1.0));
        assert_eq!(clock.get(), 2.0);
        assert!(!seq.is_playing());
        assert_eq!(seq.current_step(), 0);
    }

    #[test]
    fn test_stop_and_restart_continues_current_step() {
        let clock = AnimatedValue::new(0.0);
        let mut seq = burst(&clock);
        seq.start();
        seq.tick(100.0);
        seq.tick(200.0);

        assert!(seq.stop());
        let held = clock.get();
        assert!(!seq.tick(1000.0));
        assert_eq!(clock.get(), held);

        // Re-entering the fall step takes its full duration again
        assert!(!seq.start());
        assert_eq!(seq.current_step(), 2);
        assert!(!seq.tick(399.0));
        assert!(seq.tick(1.0));
    }

    #[test]
    fn test_empty_sequence_completes_immediately() {
        let mut seq = Sequence::new(AnimatedValue::default(), Vec::new());
        assert!(seq.start());
        assert!(!seq.is_playing());
    }

    #[test]
    fn test_tiny_ticks_still_finish() {
        let clock = AnimatedValue::new(0.0);
        let mut seq = Sequence::new(clock.clone(), vec![TimingStep::new(2.0, 3000)]);
        seq.start();
        seq.tick(2999.0);

        // Each tick is below half an f32 ulp of the elapsed time
        let finished = (0..20_000).filter(|_| seq.tick(1e-4)).count();

        assert_eq!(finished, 1);
        assert_eq!(clock.get(), 2.0);
    }
}
