//! State Machine Runtime
//!
//! Flat state machines keyed by caller-defined state and event types
//! (usually small `Copy` enums). Events with no matching transition leave
//! the machine where it is.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
}

impl<S, E> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add the same event/target for several source states
    pub fn on_any(mut self, from: &[S], event: E, to: S) -> Self {
        for state in from {
            self.transitions.push(Transition::new(*state, event, to));
        }
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine::new(self.initial_state, self.transitions)
    }
}

/// Most recent transitions kept in [`StateMachine::history`]
pub const HISTORY_LIMIT: usize = 8;

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    /// Transitions indexed by (from, event)
    table: FxHashMap<(S, E), S>,
    /// Last [`HISTORY_LIMIT`] transitions (for debugging)
    history: SmallVec<[(S, E, S); HISTORY_LIMIT]>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    /// Create a new state machine with an initial state and transitions.
    ///
    /// A later transition for the same (state, event) pair replaces an
    /// earlier one.
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        let table = transitions
            .into_iter()
            .map(|t| ((t.from_state, t.event), t.to_state))
            .collect();
        Self {
            current_state: initial_state,
            table,
            history: SmallVec::new(),
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        self.table.contains_key(&(self.current_state, event))
    }

    /// Send an event. Returns the new state, or `None` when the event has
    /// no transition from the current state.
    pub fn send(&mut self, event: E) -> Option<S> {
        let from = self.current_state;
        let to = *self.table.get(&(from, event))?;

        tracing::trace!(?from, ?event, ?to, "state transition");
        self.current_state = to;
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
        Some(to)
    }

    /// Get transition history, oldest first
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Light {
        Off,
        On,
        Broken,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Switch {
        Flip,
        Smash,
    }

    fn lamp() -> StateMachine<Light, Switch> {
        StateMachine::builder(Light::Off)
            .on(Light::Off, Switch::Flip, Light::On)
            .on(Light::On, Switch::Flip, Light::Off)
            .on_any(&[Light::Off, Light::On], Switch::Smash, Light::Broken)
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = lamp();
        assert_eq!(fsm.current_state(), Light::Off);

        assert_eq!(fsm.send(Switch::Flip), Some(Light::On));
        assert!(fsm.is_in(Light::On));

        assert_eq!(fsm.send(Switch::Flip), Some(Light::Off));
        assert!(fsm.is_in(Light::Off));
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = lamp();
        fsm.send(Switch::Smash);

        assert_eq!(fsm.send(Switch::Flip), None);
        assert_eq!(fsm.current_state(), Light::Broken);
    }

    #[test]
    fn test_can_send() {
        let mut fsm = lamp();
        assert!(fsm.can_send(Switch::Flip));

        fsm.send(Switch::Smash);
        assert!(!fsm.can_send(Switch::Flip));
        assert!(!fsm.can_send(Switch::Smash));
    }

    #[test]
    fn test_history() {
        let mut fsm = lamp();
        fsm.send(Switch::Flip);
        fsm.send(Switch::Smash);
        fsm.send(Switch::Flip);

        let history = fsm.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (Light::Off, Switch::Flip, Light::On));
        assert_eq!(history[1], (Light::On, Switch::Smash, Light::Broken));

        fsm.clear_history();
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_history_keeps_most_recent() {
        let mut fsm = lamp();
        for _ in 0..HISTORY_LIMIT + 3 {
            fsm.send(Switch::Flip);
        }

        let history = fsm.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        // An odd number of flips ran, so the newest one turned the lamp on
        assert_eq!(history[HISTORY_LIMIT - 1], (Light::Off, Switch::Flip, Light::On));
        assert_eq!(history[0], (Light::On, Switch::Flip, Light::Off));
    }
}
