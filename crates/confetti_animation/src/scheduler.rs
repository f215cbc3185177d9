//! Animation scheduler
//!
//! Owns every registered sequence and advances the playing ones each frame.
//! Completion callbacks are collected while the scheduler is locked and run
//! after the lock is released, so a callback may call back into the
//! scheduler.

use std::sync::{Arc, Mutex, MutexGuard};

use slotmap::SlotMap;

use crate::engine::{EndCallback, SequenceId, TweenEngine};
use crate::timeline::{EndResult, Sequence, TimingStep};
use crate::value::AnimatedValue;

struct Entry {
    sequence: Sequence,
    on_end: Option<EndCallback>,
}

#[derive(Default)]
struct SchedulerState {
    sequences: SlotMap<SequenceId, Entry>,
}

type Pending = Vec<(EndCallback, EndResult)>;

/// Tick-driven tween engine.
///
/// Clones share the same sequences, so one handle can be given to a
/// component while the frame loop keeps another for [`tick`](Self::tick).
#[derive(Clone, Default)]
pub struct AnimationScheduler {
    state: Arc<Mutex<SchedulerState>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn flush(pending: Pending) {
        for (callback, result) in pending {
            callback(result);
        }
    }

    /// Advance every playing sequence by `dt_ms`
    pub fn tick(&self, dt_ms: f32) {
        let mut pending = Pending::new();
        {
            let mut state = self.lock();
            for (id, entry) in state.sequences.iter_mut() {
                if entry.sequence.tick(dt_ms) {
                    tracing::trace!(?id, "sequence finished");
                    if let Some(callback) = entry.on_end.take() {
                        pending.push((callback, EndResult { finished: true }));
                    }
                }
            }
        }
        Self::flush(pending);
    }

    /// Check if any sequence is still playing
    pub fn has_active_animations(&self) -> bool {
        self.lock()
            .sequences
            .values()
            .any(|e| e.sequence.is_playing())
    }

    pub fn is_playing(&self, id: SequenceId) -> bool {
        self.lock()
            .sequences
            .get(id)
            .is_some_and(|e| e.sequence.is_playing())
    }

    /// Total duration of a registered sequence
    pub fn total_duration_ms(&self, id: SequenceId) -> Option<u32> {
        self.lock()
            .sequences
            .get(id)
            .map(|e| e.sequence.total_duration_ms())
    }

    /// Get the number of registered sequences
    pub fn sequence_count(&self) -> usize {
        self.lock().sequences.len()
    }
}

impl TweenEngine for AnimationScheduler {
    fn sequence(&self, clock: &AnimatedValue, steps: Vec<TimingStep>) -> SequenceId {
        let id = self.lock().sequences.insert(Entry {
            sequence: Sequence::new(clock.clone(), steps),
            on_end: None,
        });
        tracing::trace!(?id, "sequence registered");
        id
    }

    fn start(&self, id: SequenceId, on_end: EndCallback) {
        let mut pending = Pending::new();
        {
            let mut state = self.lock();

            let Some(clock) = state.sequences.get(id).map(|e| e.sequence.clock().clone()) else {
                tracing::warn!(?id, "start on unknown sequence");
                return;
            };

            // One clock, one driver: interrupt whatever else animates it,
            // including an earlier run of this same sequence.
            for (other, entry) in state.sequences.iter_mut() {
                if other != id && !entry.sequence.clock().same_as(&clock) {
                    continue;
                }
                if entry.sequence.stop() {
                    tracing::trace!(?other, "sequence interrupted");
                }
                if let Some(callback) = entry.on_end.take() {
                    pending.push((callback, EndResult { finished: false }));
                }
            }

            if let Some(entry) = state.sequences.get_mut(id) {
                if entry.sequence.start() {
                    pending.push((on_end, EndResult { finished: true }));
                } else {
                    entry.on_end = Some(on_end);
                }
            }
        }
        Self::flush(pending);
    }

    fn stop(&self, id: SequenceId) {
        let mut pending = Pending::new();
        {
            let mut state = self.lock();
            if let Some(entry) = state.sequences.get_mut(id) {
                entry.sequence.stop();
                if let Some(callback) = entry.on_end.take() {
                    pending.push((callback, EndResult { finished: false }));
                }
            }
        }
        Self::flush(pending);
    }

    fn release(&self, id: SequenceId) {
        let removed = self.lock().sequences.remove(id);
        if let Some(callback) = removed.and_then(|e| e.on_end) {
            callback(EndResult { finished: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn() -> EndCallback) {
        let results = Arc::new(Mutex::new(Vec::new()));
        let results_clone = results.clone();
        let make = move || -> EndCallback {
            let results = results_clone.clone();
            Box::new(move |r: EndResult| results.lock().unwrap().push(r.finished))
        };
        (results, make)
    }

    fn burst_steps() -> Vec<TimingStep> {
        vec![
            TimingStep::new(0.0, 0),
            TimingStep::new(1.0, 350).with_easing(Easing::EaseOutQuad),
            TimingStep::new(2.0, 3000).with_easing(Easing::EaseInQuad),
        ]
    }

    #[test]
    fn test_runs_to_completion() {
        let scheduler = AnimationScheduler::new();
        let clock = AnimatedValue::new(0.0);
        let (results, make) = recorder();

        let id = scheduler.sequence(&clock, burst_steps());
        assert_eq!(scheduler.total_duration_ms(id), Some(3350));

        scheduler.start(id, make());
        assert!(scheduler.has_active_animations());

        for _ in 0..66 {
            scheduler.tick(50.0);
        }
        assert!(results.lock().unwrap().is_empty());

        scheduler.tick(50.0);
        assert_eq!(*results.lock().unwrap(), vec![true]);
        assert_eq!(clock.get(), 2.0);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_stop_reports_unfinished() {
        let scheduler = AnimationScheduler::new();
        let clock = AnimatedValue::new(0.0);
        let (results, make) = recorder();

        let id = scheduler.sequence(&clock, burst_steps());
        scheduler.start(id, make());
        scheduler.tick(100.0);
        scheduler.stop(id);

        assert_eq!(*results.lock().unwrap(), vec![false]);
        assert!(!scheduler.is_playing(id));

        // Stopped runs never report completion
        scheduler.tick(10_000.0);
        assert_eq!(*results.lock().unwrap(), vec![false]);
    }

    #[test]
    fn test_restart_interrupts_previous_run() {
        let scheduler = AnimationScheduler::new();
        let clock = AnimatedValue::new(0.0);
        let (results, make) = recorder();

        let id = scheduler.sequence(&clock, burst_steps());
        scheduler.start(id, make());
        scheduler.tick(10.0);
        scheduler.start(id, make());
        assert_eq!(*results.lock().unwrap(), vec![false]);

        scheduler.tick(3350.0);
        assert_eq!(*results.lock().unwrap(), vec![false, true]);
    }

    #[test]
    fn test_new_sequence_on_same_clock_takes_over() {
        let scheduler = AnimationScheduler::new();
        let clock = AnimatedValue::new(0.0);
        let (results, make) = recorder();

        let first = scheduler.sequence(&clock, burst_steps());
        let second = scheduler.sequence(&clock, burst_steps());
        scheduler.start(first, make());
        scheduler.start(second, make());

        assert!(!scheduler.is_playing(first));
        assert!(scheduler.is_playing(second));
        assert_eq!(*results.lock().unwrap(), vec![false]);
    }

    #[test]
    fn test_zero_length_sequence_finishes_synchronously() {
        let scheduler = AnimationScheduler::new();
        let clock = AnimatedValue::new(5.0);
        let (results, make) = recorder();

        let id = scheduler.sequence(&clock, vec![TimingStep::new(0.0, 0)]);
        scheduler.start(id, make());

        assert_eq!(*results.lock().unwrap(), vec![true]);
        assert_eq!(clock.get(), 0.0);
    }

    #[test]
    fn test_callback_may_reenter_scheduler() {
        let scheduler = AnimationScheduler::new();
        let clock = AnimatedValue::new(0.0);
        let id = scheduler.sequence(&clock, vec![TimingStep::new(1.0, 10)]);

        let inner = scheduler.clone();
        scheduler.start(
            id,
            Box::new(move |_| {
                inner.release(id);
            }),
        );
        scheduler.tick(10.0);

        assert_eq!(scheduler.sequence_count(), 0);
    }

    #[test]
    fn test_release_ends_run_unfinished() {
        let scheduler = AnimationScheduler::new();
        let clock = AnimatedValue::new(0.0);
        let (results, make) = recorder();

        let id = scheduler.sequence(&clock, burst_steps());
        scheduler.start(id, make());
        scheduler.release(id);

        assert_eq!(*results.lock().unwrap(), vec![false]);
        assert_eq!(scheduler.sequence_count(), 0);
    }
}
