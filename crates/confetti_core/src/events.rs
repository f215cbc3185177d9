//! Animation lifecycle event dispatch
//!
//! Listeners are keyed by [`AnimationEvent`] and receive a borrowed payload
//! (for the explosion, the particle slice). Events without listeners are
//! silently skipped.

use rustc_hash::FxHashMap;

/// Lifecycle notifications raised by an animated component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationEvent {
    /// A fresh run began
    Start,
    /// Playback continued without rebuilding the timeline
    Resume,
    /// Playback was halted on request
    Stop,
    /// The timeline played to completion
    End,
}

impl AnimationEvent {
    pub const ALL: [AnimationEvent; 4] = [
        AnimationEvent::Start,
        AnimationEvent::Resume,
        AnimationEvent::Stop,
        AnimationEvent::End,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AnimationEvent::Start => "start",
            AnimationEvent::Resume => "resume",
            AnimationEvent::Stop => "stop",
            AnimationEvent::End => "end",
        }
    }
}

/// Listener function type
pub type Listener<P> = Box<dyn Fn(&P) + Send + Sync>;

/// Dispatches lifecycle events to registered listeners
pub struct EventDispatcher<P: ?Sized> {
    listeners: FxHashMap<AnimationEvent, Vec<Listener<P>>>,
}

impl<P: ?Sized> EventDispatcher<P> {
    pub fn new() -> Self {
        Self {
            listeners: FxHashMap::default(),
        }
    }

    /// Register a listener for an event
    pub fn register<F>(&mut self, event: AnimationEvent, listener: F)
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event)
            .or_default()
            .push(Box::new(listener));
    }

    /// Check if anything listens for `event`
    pub fn has_listeners(&self, event: AnimationEvent) -> bool {
        self.listeners.get(&event).is_some_and(|l| !l.is_empty())
    }

    /// Call every listener for `event` in registration order. Returns how
    /// many listeners ran.
    pub fn dispatch(&self, event: AnimationEvent, payload: &P) -> usize {
        let Some(listeners) = self.listeners.get(&event) else {
            return 0;
        };
        for listener in listeners {
            listener(payload);
        }
        listeners.len()
    }
}

impl<P: ?Sized> Default for EventDispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_dispatch_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher: EventDispatcher<[u32]> = EventDispatcher::new();

        let first = log.clone();
        dispatcher.register(AnimationEvent::Start, move |items: &[u32]| {
            first.lock().unwrap().push(("first", items.len()));
        });
        let second = log.clone();
        dispatcher.register(AnimationEvent::Start, move |items: &[u32]| {
            second.lock().unwrap().push(("second", items.len()));
        });

        let ran = dispatcher.dispatch(AnimationEvent::Start, &[1, 2, 3]);

        assert_eq!(ran, 2);
        assert_eq!(*log.lock().unwrap(), vec![("first", 3), ("second", 3)]);
    }

    #[test]
    fn test_missing_listeners_are_skipped() {
        let dispatcher: EventDispatcher<[u32]> = EventDispatcher::default();

        assert!(!dispatcher.has_listeners(AnimationEvent::End));
        assert_eq!(dispatcher.dispatch(AnimationEvent::End, &[]), 0);
    }

    #[test]
    fn test_event_names() {
        let names: Vec<_> = AnimationEvent::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["start", "resume", "stop", "end"]);
    }
}
