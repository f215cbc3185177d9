//! The tween-engine capability consumed by animated components

use slotmap::new_key_type;

use crate::timeline::{EndResult, TimingStep};
use crate::value::AnimatedValue;

new_key_type! {
    /// Handle to a sequence registered with a tween engine
    pub struct SequenceId;
}

/// Completion callback for a sequence run
pub type EndCallback = Box<dyn FnOnce(EndResult) + Send>;

/// Something that can play timing sequences on an [`AnimatedValue`].
///
/// Components build sequences through this trait and never advance clocks
/// themselves. [`AnimationScheduler`](crate::AnimationScheduler) is the
/// bundled tick-driven implementation; hosts with their own frame loop can
/// provide another.
pub trait TweenEngine {
    /// Register a sequence of steps that will drive `clock`
    fn sequence(&self, clock: &AnimatedValue, steps: Vec<TimingStep>) -> SequenceId;

    /// Start (or restart) playback. `on_end` fires exactly once for this
    /// run, with `finished: false` if the run is stopped or interrupted.
    fn start(&self, id: SequenceId, on_end: EndCallback);

    /// Halt playback wherever it currently is
    fn stop(&self, id: SequenceId);

    /// Forget a sequence. A run still in flight ends unfinished.
    fn release(&self, id: SequenceId);
}
